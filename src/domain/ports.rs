use crate::domain::model::{CloudType, Outcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A load balancer API able to add and remove targets from a target group.
#[async_trait]
pub trait LoadBalancer: Send + Sync {
    fn provider(&self) -> CloudType;

    async fn register_targets(&self, group: &str, instances: &[String]) -> Result<Outcome>;

    async fn deregister_targets(&self, group: &str, instances: &[String]) -> Result<Outcome>;
}

#[async_trait]
impl<L: LoadBalancer + ?Sized> LoadBalancer for Box<L> {
    fn provider(&self) -> CloudType {
        (**self).provider()
    }

    async fn register_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        (**self).register_targets(group, instances).await
    }

    async fn deregister_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        (**self).deregister_targets(group, instances).await
    }
}
