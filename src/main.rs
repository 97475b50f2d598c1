use std::sync::Arc;

use tokio::io::BufReader;
use tracing::{error, info};

use userdesk::{Application, Config};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = userdesk::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        userdesk::logging::init_console_only(&config.logging.level);
    }

    info!(storage = %config.storage.path, "userdesk starting");

    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    let mut app = Application::from_config(reader, writer, Arc::new(config));

    if let Err(e) = app.run().await {
        error!(error = %e, "Console I/O failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
