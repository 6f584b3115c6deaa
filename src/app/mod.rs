// App layer: the command-line flow from parsed flags to a process exit code.

pub mod runner;
