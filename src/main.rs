use std::path::PathBuf;

use clap::Parser;

use playground_client::config::{load_config, print_schema};
use playground_client::startup;
use playground_client::utils::logger::init_logging;

/// Terminal client for the code playground.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "./config.yaml")]
    config: PathBuf,

    /// Backend base URL, overriding the configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// Print the configuration JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.print_schema {
        if let Err(e) = print_schema() {
            eprintln!("Error printing schema: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = startup::run(&config).await {
        tracing::error!("Client failed: {}", e);
        std::process::exit(1);
    }
}
