use crate::core::{LoadBalancer, Mode, Outcome, Target};
use crate::utils::error::Result;
use std::io::Write;

/// Issues one register or deregister call for a target and reports it to a writer.
pub struct Registrar<L: LoadBalancer> {
    balancer: L,
}

impl<L: LoadBalancer> Registrar<L> {
    pub fn new(balancer: L) -> Self {
        Self { balancer }
    }

    /// Runs `mode` against `target`. Failures are returned as-is, never retried.
    pub async fn run<W: Write>(&self, mode: Mode, target: &Target, out: &mut W) -> Result<Outcome> {
        writeln!(out, "{}", mode.announcement(target))?;
        tracing::debug!(
            "Calling {} on {} provider",
            mode.api_operation(),
            self.balancer.provider()
        );

        let instances = vec![target.instance.clone()];
        let outcome = match mode {
            Mode::Register => {
                self.balancer
                    .register_targets(&target.group, &instances)
                    .await?
            }
            Mode::Unregister => {
                self.balancer
                    .deregister_targets(&target.group, &instances)
                    .await?
            }
        };

        match outcome.status {
            Some(status) => writeln!(out, "{}", status)?,
            None => tracing::warn!("No HTTP status recorded for {}", mode.api_operation()),
        }

        tracing::info!("✅ {} completed for {}", mode.api_operation(), target.instance);
        Ok(outcome)
    }

    pub fn balancer(&self) -> &L {
        &self.balancer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{Call, MockLoadBalancer};
    use crate::domain::model::{CloudType, INSTANCE_ID, TARGET_GROUP_ARN};

    #[tokio::test]
    async fn test_register_issues_single_call() {
        let balancer = MockLoadBalancer::new();
        let registrar = Registrar::new(balancer.clone());

        let mut out = Vec::new();
        let outcome = registrar
            .run(Mode::Register, &Target::fixed(), &mut out)
            .await
            .unwrap();

        assert_eq!(outcome.status, Some(200));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "Registering {} at target group {}\n200\n",
                INSTANCE_ID, TARGET_GROUP_ARN
            )
        );
        assert_eq!(
            balancer.calls().await,
            vec![Call {
                operation: "RegisterTargets",
                group: TARGET_GROUP_ARN.to_string(),
                instances: vec![INSTANCE_ID.to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn test_unregister_issues_single_call() {
        let balancer = MockLoadBalancer::new();
        let registrar = Registrar::new(balancer.clone());

        registrar
            .run(Mode::Unregister, &Target::fixed(), &mut Vec::new())
            .await
            .unwrap();

        let calls = balancer.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "DeregisterTargets");
        assert_eq!(calls[0].group, TARGET_GROUP_ARN);
        assert_eq!(calls[0].instances, vec![INSTANCE_ID.to_string()]);
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let balancer = MockLoadBalancer::failing("TargetGroupNotFound");
        let registrar = Registrar::new(balancer.clone());

        let mut out = Vec::new();
        let err = registrar
            .run(Mode::Register, &Target::fixed(), &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.api_code(), Some("TargetGroupNotFound"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Registering "));
        assert_eq!(printed.lines().count(), 1);
        assert_eq!(balancer.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_boxed_balancer_dispatch() {
        let balancer = MockLoadBalancer::new();
        let boxed: Box<dyn LoadBalancer> = Box::new(balancer.clone());
        let registrar = Registrar::new(boxed);

        registrar
            .run(Mode::Unregister, &Target::new("arn:tg", "i-1"), &mut Vec::new())
            .await
            .unwrap();

        assert_eq!(registrar.balancer().provider(), CloudType::Aws);
        assert_eq!(balancer.calls().await[0].operation, "DeregisterTargets");
    }
}
