// Domain layer: the target model and the load balancer port. Provider SDKs stay in adapters.

pub mod model;
pub mod ports;
