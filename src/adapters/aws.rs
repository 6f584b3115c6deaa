use crate::domain::model::{CloudType, Mode, Outcome};
use crate::domain::ports::LoadBalancer;
use crate::utils::error::{LbError, Result};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_elasticloadbalancingv2::config::interceptors::BeforeDeserializationInterceptorContextRef;
use aws_sdk_elasticloadbalancingv2::config::{ConfigBag, Intercept, RuntimeComponents};
use aws_sdk_elasticloadbalancingv2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_elasticloadbalancingv2::operation::RequestId;
use aws_sdk_elasticloadbalancingv2::types::TargetDescription;
use aws_sdk_elasticloadbalancingv2::Client as ElbClient;
use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

/// ELBv2 target group registration backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsLoadBalancer {
    client: ElbClient,
}

impl AwsLoadBalancer {
    /// Loads the ambient AWS configuration pinned to `region` and resolves
    /// credentials up front, so a missing profile fails before any call.
    pub async fn connect(region: &str) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| LbError::CredentialsError {
                message: "no credentials provider found in the environment".to_string(),
            })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| LbError::CredentialsError {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("🔑 AWS credentials resolved for region {}", region);
        Ok(Self::from_client(ElbClient::new(&config)))
    }

    pub fn from_client(client: ElbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoadBalancer for AwsLoadBalancer {
    fn provider(&self) -> CloudType {
        CloudType::Aws
    }

    async fn register_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        let recorder = StatusRecorder::default();
        let result = self
            .client
            .register_targets()
            .target_group_arn(group)
            .set_targets(Some(describe_targets(instances)))
            .customize()
            .interceptor(recorder.clone())
            .send()
            .await;

        match result {
            Ok(output) => Ok(recorder.outcome(output.request_id())),
            Err(err) => Err(api_error(Mode::Register, err, recorder.status())),
        }
    }

    async fn deregister_targets(&self, group: &str, instances: &[String]) -> Result<Outcome> {
        let recorder = StatusRecorder::default();
        let result = self
            .client
            .deregister_targets()
            .target_group_arn(group)
            .set_targets(Some(describe_targets(instances)))
            .customize()
            .interceptor(recorder.clone())
            .send()
            .await;

        match result {
            Ok(output) => Ok(recorder.outcome(output.request_id())),
            Err(err) => Err(api_error(Mode::Unregister, err, recorder.status())),
        }
    }
}

fn describe_targets(instances: &[String]) -> Vec<TargetDescription> {
    instances
        .iter()
        .map(|id| TargetDescription::builder().id(id).build())
        .collect()
}

fn api_error<E, R>(mode: Mode, err: SdkError<E, R>, status: Option<u16>) -> LbError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    tracing::debug!(
        "{} failed (code: {:?}, status: {:?}): {}",
        mode.api_operation(),
        code,
        status,
        DisplayErrorContext(&err)
    );

    LbError::ApiError {
        operation: mode.api_operation(),
        code,
        message,
        status,
    }
}

/// Captures the HTTP status of the response the SDK received.
#[derive(Debug, Clone, Default)]
struct StatusRecorder {
    status: Arc<AtomicU16>,
}

impl StatusRecorder {
    fn status(&self) -> Option<u16> {
        match self.status.load(Ordering::Acquire) {
            0 => None,
            code => Some(code),
        }
    }

    fn outcome(&self, request_id: Option<&str>) -> Outcome {
        if let Some(id) = request_id {
            tracing::debug!("AWS request id: {}", id);
        }
        Outcome {
            status: self.status(),
            request_id: request_id.map(str::to_string),
        }
    }
}

impl Intercept for StatusRecorder {
    fn name(&self) -> &'static str {
        "StatusRecorder"
    }

    fn read_after_transmit(
        &self,
        context: &BeforeDeserializationInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.status
            .store(context.response().status().as_u16(), Ordering::Release);
        Ok(())
    }
}
