use clap::Parser;
use skill_share::utils::logger;
use skill_share::{CliConfig, Runner};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting skill-runner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let runner = Runner::new();
    let stdout = std::io::stdout();

    if let Err(e) = runner.run(&mut stdout.lock()) {
        tracing::error!("Script output failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("skill-runner completed");
}
