use crate::utils::error::Result;
use crate::utils::validation::{validate_instance_id, validate_target_group_arn, Validate};
use clap::ValueEnum;
use std::fmt;

pub const TARGET_GROUP_ARN: &str = "arn:aws:elasticloadbalancing:us-east-1:205379741905:targetgroup/cf-proxy-aws-cfn04-tg-https/5629e6c89ae42766";
pub const INSTANCE_ID: &str = "i-0e77c77f4e17f7b00";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Cloud the target group lives in. Only `Aws` has a backing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CloudType {
    Aws,
    Azure,
    Gcp,
    Ali,
}

impl CloudType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudType::Aws => "aws",
            CloudType::Azure => "azure",
            CloudType::Gcp => "gcp",
            CloudType::Ali => "ali",
        }
    }
}

impl fmt::Display for CloudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Register,
    Unregister,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Register => "register",
            Mode::Unregister => "unregister",
        }
    }

    /// Name of the load balancer API operation this mode maps to.
    pub fn api_operation(&self) -> &'static str {
        match self {
            Mode::Register => "RegisterTargets",
            Mode::Unregister => "DeregisterTargets",
        }
    }

    fn preposition(&self) -> &'static str {
        match self {
            Mode::Register => "at",
            Mode::Unregister => "from",
        }
    }

    /// Line printed before the call is issued.
    pub fn announcement(&self, target: &Target) -> String {
        let verb = match self {
            Mode::Register => "Registering",
            Mode::Unregister => "Unregistering",
        };
        format!(
            "{} {} {} target group {}",
            verb,
            target.instance,
            self.preposition(),
            target.group
        )
    }

    /// Line printed when the call fails.
    pub fn failure(&self, target: &Target) -> String {
        format!(
            "Could not {} {} {} target group {}",
            self.as_str(),
            target.instance,
            self.preposition(),
            target.group
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub group: String,
    pub instance: String,
}

impl Target {
    pub fn new(group: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            instance: instance.into(),
        }
    }

    /// The one target group / instance pair this tool operates on.
    pub fn fixed() -> Self {
        Self::new(TARGET_GROUP_ARN, INSTANCE_ID)
    }
}

/// Guards whatever pair reaches the provider. Today that is always
/// `Target::fixed()`; it starts to matter once `--group`/`--instance` are wired through.
impl Validate for Target {
    fn validate(&self) -> Result<()> {
        validate_target_group_arn("group", &self.group)?;
        validate_instance_id("instance", &self.instance)
    }
}

/// Result of a successful register/deregister call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub status: Option<u16>,
    pub request_id: Option<String>,
}
