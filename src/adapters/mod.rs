// Adapters layer: provider implementations of the LoadBalancer port.

pub mod aws;

use crate::domain::model::CloudType;
use crate::domain::ports::LoadBalancer;
use crate::utils::error::{LbError, Result};

/// Builds the load balancer client for `cloud`. Clouds without a provider
/// are rejected here so the dispatcher never has to look at the cloud type.
pub async fn connect(cloud: CloudType, region: &str) -> Result<Box<dyn LoadBalancer>> {
    match cloud {
        CloudType::Aws => Ok(Box::new(aws::AwsLoadBalancer::connect(region).await?)),
        CloudType::Azure | CloudType::Gcp | CloudType::Ali => {
            Err(LbError::UnsupportedProvider { cloud })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unimplemented_clouds_are_rejected() {
        for cloud in [CloudType::Azure, CloudType::Gcp, CloudType::Ali] {
            match connect(cloud, "us-east-1").await {
                Err(LbError::UnsupportedProvider { cloud: rejected }) => {
                    assert_eq!(rejected, cloud)
                }
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => panic!("{cloud} should not have a provider"),
            }
        }
    }
}
