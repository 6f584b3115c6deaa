use crate::domain::model::{CloudType, Mode, Target, DEFAULT_REGION};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tg-register")]
#[command(about = "Register or unregister an instance with a load balancer target group")]
#[command(version)]
pub struct CliConfig {
    /// Cloud type
    #[arg(short = 't', long = "type", value_enum, default_value_t = CloudType::Aws)]
    pub cloud_type: CloudType,

    /// Mode of operation
    #[arg(short, long, value_enum, default_value_t = Mode::Register)]
    pub mode: Mode,

    /// [AWS] Target group ARN to register at / unregister from (currently ignored)
    #[arg(short = 'g', long = "group")]
    pub target_group: Option<String>,

    /// Instance id to register / unregister (currently ignored)
    #[arg(short, long)]
    pub instance: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The target every run operates on. `--group` and `--instance` do not
    /// change it, whatever their value (blank included); deployments rely on
    /// the fixed pair.
    pub fn target(&self) -> Target {
        let target = Target::fixed();

        if let Some(group) = self.target_group.as_deref() {
            if group != target.group {
                tracing::warn!(
                    "--group '{}' is ignored, using target group {}",
                    group,
                    target.group
                );
            }
        }
        if let Some(instance) = self.instance.as_deref() {
            if instance != target.instance {
                tracing::warn!(
                    "--instance '{}' is ignored, using instance {}",
                    instance,
                    target.instance
                );
            }
        }

        target
    }

    pub fn region(&self) -> &'static str {
        DEFAULT_REGION
    }
}
