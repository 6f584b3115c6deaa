pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::aws::AwsLoadBalancer;
pub use config::CliConfig;
pub use crate::core::registrar::Registrar;
pub use domain::model::{CloudType, Mode, Outcome, Target};
pub use domain::ports::LoadBalancer;
pub use utils::error::{is_api_error, LbError, Result};
