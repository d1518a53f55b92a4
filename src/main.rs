use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rowbind::cli;
use rowbind::config::Config;

fn main() -> Result<()> {
    let config = Config::load();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("rowbind v{}", env!("CARGO_PKG_VERSION"));

    match cli::run(&config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}
