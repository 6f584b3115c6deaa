pub mod registrar;

#[cfg(test)]
pub(crate) mod mock;

pub use crate::domain::model::{Mode, Outcome, Target};
pub use crate::domain::ports::LoadBalancer;
pub use crate::utils::error::Result;
