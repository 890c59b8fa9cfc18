use tracing::info;

use super::{ActionError, ActionResult, Notice};
use crate::api::PlaygroundApi;
use crate::state::{AppState, Output};

/// Sends the editor code for execution and shows the result and logs.
pub async fn run(api: &dyn PlaygroundApi, state: &mut AppState) -> ActionResult {
    let evaluation = api
        .run(&state.editor.code)
        .await
        .map_err(ActionError::failed("Failed to run code"))?;
    info!(
        event_name = "runner.completed",
        event_domain = "runner",
        log_lines = evaluation.logs.len(),
        "Code executed"
    );
    state.output = Output::from(&evaluation);
    Ok(Notice::new("Code executed"))
}
