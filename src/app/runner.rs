use crate::config::CliConfig;
use crate::core::registrar::Registrar;
use crate::domain::model::CloudType;
use crate::domain::ports::LoadBalancer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::future::Future;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a flag parse error. `--help` and `--version` come through
/// clap as errors too but print to stdout and succeed.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Validates the target, builds the provider through `connect`, runs the
/// selected mode and returns the process exit code.
///
/// Status lines and API failures go to `out`. Setup failures go to `err`.
pub async fn run<F, Fut, L, O, E>(config: &CliConfig, connect: F, out: &mut O, err: &mut E) -> i32
where
    F: FnOnce(CloudType, &'static str) -> Fut,
    Fut: Future<Output = Result<L>>,
    L: LoadBalancer,
    O: Write,
    E: Write,
{
    let target = config.target();
    if let Err(e) = target.validate() {
        tracing::error!("❌ Target validation failed: {}", e);
        let _ = writeln!(err, "❌ {}", e);
        return EXIT_FAILURE;
    }

    let balancer = match connect(config.cloud_type, config.region()).await {
        Ok(balancer) => balancer,
        Err(e) => {
            tracing::error!("❌ Could not set up {} client: {}", config.cloud_type, e);
            let _ = writeln!(err, "❌ {}", e);
            return EXIT_FAILURE;
        }
    };

    let registrar = Registrar::new(balancer);
    match registrar.run(config.mode, &target, out).await {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("❌ {} failed: {:?}", config.mode.api_operation(), e);
            let _ = writeln!(out, "{}", config.mode.failure(&target));
            let _ = writeln!(out, "{}", e);
            EXIT_FAILURE
        }
    }
}
