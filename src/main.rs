// Lineup server entrypoint
//!
//! The heavy lifting (initialization, HTTP wiring, graceful shutdown)
//! lives in dedicated modules so this file remains a thin orchestrator.

use anyhow::Result;
use lineup_server::config::ServerConfig;
use lineup_server::lifecycle::{bootstrap, run};
use lineup_server::logging;
use log::info;
use std::path::Path;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config_path = "config.toml";
    let config = match ServerConfig::load_or_default(config_path) {
        Ok(cfg) => {
            if Path::new(config_path).exists() {
                eprintln!(
                    "✅ Loaded config from: {}",
                    std::fs::canonicalize(config_path)
                        .unwrap_or_else(|_| std::path::PathBuf::from(config_path))
                        .display()
                );
            } else {
                eprintln!("No {} found, using built-in defaults", config_path);
            }
            cfg
        }
        Err(e) => {
            eprintln!("❌ FATAL: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Lineup server v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    // Build application state and kick off background services
    let components = bootstrap(&config).await?;

    // Run HTTP server until termination signal is received
    run(&config, components).await
}
