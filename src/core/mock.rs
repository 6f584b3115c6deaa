use crate::domain::model::{CloudType, Outcome};
use crate::domain::ports::LoadBalancer;
use crate::utils::error::{LbError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub operation: &'static str,
    pub group: String,
    pub instances: Vec<String>,
}

/// Records every call and answers with 200, or with an API error when failing.
#[derive(Clone)]
pub(crate) struct MockLoadBalancer {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_with: Option<&'static str>,
}

impl MockLoadBalancer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(code: &'static str) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::new()
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(
        &self,
        operation: &'static str,
        group: &str,
        instances: &[String],
    ) -> Result<Outcome> {
        self.calls.lock().await.push(Call {
            operation,
            group: group.to_string(),
            instances: instances.to_vec(),
        });

        match self.fail_with {
            Some(code) => Err(LbError::ApiError {
                operation,
                code: Some(code.to_string()),
                message: "simulated failure".to_string(),
                status: Some(400),
            }),
            None => Ok(Outcome {
                status: Some(200),
                request_id: Some("mock-request".to_string()),
            }),
        }
    }
}

#[async_trait]
impl LoadBalancer for MockLoadBalancer {
    fn provider(&self) -> CloudType {
        CloudType::Aws
    }

    async fn register_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        self.record("RegisterTargets", group, instances).await
    }

    async fn deregister_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        self.record("DeregisterTargets", group, instances).await
    }
}
