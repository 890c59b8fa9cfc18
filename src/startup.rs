//! Client startup.
//!
//! Builds the backend client from the configuration and hands stdin/stdout
//! to the interactive shell.

use std::io::IsTerminal;

use tokio::io::BufReader;
use tracing::info;

use crate::api::create_api;
use crate::config::ConfigV1;
use crate::shell::{Renderer, Shell};

/// Runs the interactive client until the user quits or stdin closes.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run(config: &ConfigV1) -> Result<(), Box<dyn std::error::Error>> {
    let api = create_api(&config.api);
    let renderer = Renderer::new(std::io::stdout().is_terminal());
    let mut shell = Shell::new(api, renderer);

    info!(
        event_name = "client.started",
        event_domain = "startup",
        "Starting playground shell"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    shell.run(stdin, &mut stdout).await?;

    info!(
        event_name = "client.stopped",
        event_domain = "startup",
        "Playground shell closed"
    );
    Ok(())
}
