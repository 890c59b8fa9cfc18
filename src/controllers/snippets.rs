use tracing::{debug, info, warn};

use super::{ActionError, ActionResult, Notice};
use crate::api::PlaygroundApi;
use crate::models::{SnippetDraft, SnippetId};
use crate::state::{AppState, NONE_SELECTED};

/// Fetches the snippet list and rebuilds the selector.
pub async fn reload(api: &dyn PlaygroundApi, state: &mut AppState) -> Result<(), ActionError> {
    let snippets = api
        .list_snippets(state.session.token())
        .await
        .map_err(ActionError::failed("Failed to load snippets"))?;
    debug!(
        event_name = "snippets.reload",
        event_domain = "snippets",
        count = snippets.len(),
        "Snippet list loaded"
    );
    state.replace_snippets(snippets);
    Ok(())
}

/// Reloads after a change the backend already accepted. A failed reload must not
/// turn that change into an error, so it is only logged.
pub(crate) async fn reload_after_change(
    api: &dyn PlaygroundApi,
    state: &mut AppState,
    change: &str,
) {
    if let Err(e) = reload(api, state).await {
        warn!(
            event_name = "snippets.reload.skipped",
            event_domain = "snippets",
            change,
            "Snippet list not refreshed: {}",
            e
        );
    }
}

/// Saves the editor contents: updates the selected snippet, or creates a new one.
pub async fn save(api: &dyn PlaygroundApi, state: &mut AppState) -> ActionResult {
    if state.editor.title.is_empty() {
        return Err(ActionError::Invalid("Please enter snippet name"));
    }
    if state.editor.code.is_empty() {
        return Err(ActionError::Invalid("Please enter snippet code"));
    }

    let draft = SnippetDraft {
        id: state.current_snippet,
        title: state.editor.title.clone(),
        body: state.editor.code.clone(),
    };
    let token = state.session.token();

    let notice = match state.current_snippet {
        Some(id) => {
            api.update_snippet(token, id, &draft)
                .await
                .map_err(ActionError::failed("Failed to update snippet"))?;
            info!(
                event_name = "snippets.updated",
                event_domain = "snippets",
                snippet_id = id.0,
                "Snippet updated"
            );
            Notice::new("Snippet updated successfully")
        }
        None => {
            let created = api
                .create_snippet(token, &draft)
                .await
                .map_err(ActionError::failed("Failed to create snippet"))?;
            info!(
                event_name = "snippets.created",
                event_domain = "snippets",
                snippet_id = created.map(|id| id.0),
                "Snippet created"
            );
            Notice::new("Snippet created successfully")
        }
    };

    reload_after_change(api, state, "save").await;
    Ok(notice)
}

/// Deletes the selected snippet.
pub async fn delete(api: &dyn PlaygroundApi, state: &mut AppState) -> ActionResult {
    let id = state
        .current_snippet
        .ok_or(ActionError::Invalid("Please select a snippet"))?;

    api.delete_snippet(state.session.token(), id)
        .await
        .map_err(ActionError::failed("Failed to delete snippet"))?;
    info!(
        event_name = "snippets.deleted",
        event_domain = "snippets",
        snippet_id = id.0,
        "Snippet deleted"
    );
    state.current_snippet = None;

    reload_after_change(api, state, "delete").await;
    Ok(Notice::new("Snippet deleted successfully"))
}

/// Applies a selector change. The sentinel value clears the editor; anything else
/// must name a cached snippet, which is loaded into the editor.
pub fn select(state: &mut AppState, value: &str) -> Result<(), ActionError> {
    if value.trim() == NONE_SELECTED {
        state.current_snippet = None;
        state.editor.clear();
        return Ok(());
    }

    let snippet = value
        .parse::<SnippetId>()
        .ok()
        .and_then(|id| state.find_snippet(id))
        .cloned()
        .ok_or(ActionError::NotFound("Snippet not found"))?;

    state.current_snippet = Some(snippet.id);
    state.editor.load(&snippet);
    Ok(())
}

/// Fetches one snippet fresh from the backend, selects it and opens it in the editor.
pub async fn open(api: &dyn PlaygroundApi, state: &mut AppState, id: SnippetId) -> ActionResult {
    let snippet = api
        .get_snippet(state.session.token(), id)
        .await
        .map_err(ActionError::failed("Snippet not found"))?;

    state.editor.load(&snippet);
    state.current_snippet = Some(snippet.id);
    let notice = Notice::new(format!("Opened \"{}\"", snippet.title));
    state.upsert_snippet(snippet);
    Ok(notice)
}
