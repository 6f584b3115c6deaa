use clap::Parser;
use tg_register::app::runner;
use tg_register::utils::logger;
use tg_register::{adapters, CliConfig};

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            std::process::exit(runner::parse_exit_code(&e));
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let code = runner::run(
        &config,
        |cloud, region| adapters::connect(cloud, region),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    if code != runner::EXIT_SUCCESS {
        std::process::exit(code);
    }
}
