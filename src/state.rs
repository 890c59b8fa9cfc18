//! Client-side application state.
//!
//! Everything the user sees lives here: the session token, the cached snippet
//! list and the selector built from it, the editor fields and the output panes.
//! Handlers in [`crate::controllers`] take it by `&mut` and are its only mutators.

use crate::models::{Evaluation, Snippet, SnippetId};

/// Selector value meaning "no snippet selected".
pub const NONE_SELECTED: &str = "0";
/// Label shown for the [`NONE_SELECTED`] option.
pub const NONE_SELECTED_LABEL: &str = "Select snippet";

/// Whether the auth panel shows the success styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIndicator {
    LoggedOut,
    Success,
}

/// The session token, if we hold one. UI state is derived from it, never stored separately.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn indicator(&self) -> AuthIndicator {
        if self.is_authenticated() {
            AuthIndicator::Success
        } else {
            AuthIndicator::LoggedOut
        }
    }

    /// Label of the single login/logout button.
    pub fn button_label(&self) -> &'static str {
        if self.is_authenticated() {
            "Logout"
        } else {
            "Login"
        }
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
    }
}

/// One entry of the snippet selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOption {
    pub value: String,
    pub label: String,
}

impl SnippetOption {
    fn sentinel() -> Self {
        SnippetOption {
            value: NONE_SELECTED.to_string(),
            label: NONE_SELECTED_LABEL.to_string(),
        }
    }
}

impl From<&Snippet> for SnippetOption {
    fn from(snippet: &Snippet) -> Self {
        SnippetOption {
            value: snippet.id.to_string(),
            label: snippet.title.clone(),
        }
    }
}

/// The snippet name field and the code area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    pub title: String,
    pub code: String,
}

impl Editor {
    pub fn clear(&mut self) {
        self.title.clear();
        self.code.clear();
    }

    pub fn load(&mut self, snippet: &Snippet) {
        self.title = snippet.title.clone();
        self.code = snippet.body.clone();
    }
}

/// The result field and the console pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub result: String,
    pub console: String,
}

impl From<&Evaluation> for Output {
    fn from(evaluation: &Evaluation) -> Self {
        Output {
            result: evaluation.result.clone(),
            console: evaluation.console(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    /// Last list fetched from the backend.
    pub snippets: Vec<Snippet>,
    pub selector: Vec<SnippetOption>,
    pub current_snippet: Option<SnippetId>,
    pub editor: Editor,
    pub output: Output,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_snippet(&self, id: SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// Replaces the cache and rebuilds the selector. A selection that vanished is dropped.
    pub fn replace_snippets(&mut self, snippets: Vec<Snippet>) {
        self.selector = std::iter::once(SnippetOption::sentinel())
            .chain(snippets.iter().map(SnippetOption::from))
            .collect();
        self.snippets = snippets;
        if let Some(id) = self.current_snippet {
            if self.find_snippet(id).is_none() {
                self.current_snippet = None;
            }
        }
    }

    /// Inserts or refreshes a single cached snippet, keeping list order.
    pub fn upsert_snippet(&mut self, snippet: Snippet) {
        let mut snippets = std::mem::take(&mut self.snippets);
        match snippets.iter_mut().find(|s| s.id == snippet.id) {
            Some(existing) => *existing = snippet,
            None => snippets.push(snippet),
        }
        self.replace_snippets(snippets);
    }

    /// Forgets everything tied to the session.
    pub fn clear_session(&mut self) {
        self.session.clear();
        self.snippets.clear();
        self.selector.clear();
        self.current_snippet = None;
    }
}
