use inline_colorization::*;

use crate::controllers::{ActionError, Notice};
use crate::state::{AppState, AuthIndicator};

/// Turns notices and state into terminal text, with ANSI colors when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub colored: bool,
}

impl Renderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colored {
            format!("{color}{text}{color_reset}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.colored {
            format!("{style_bold}{text}{style_reset}")
        } else {
            text.to_string()
        }
    }

    pub fn notice(&self, notice: &Notice) -> String {
        format!("{}\n", self.paint(color_green, &format!("✔ {}", notice)))
    }

    pub fn error(&self, error: &ActionError) -> String {
        self.problem(&error.to_string())
    }

    /// Usage errors and local failures that never reached a controller.
    pub fn problem(&self, message: &str) -> String {
        format!("{}\n", self.paint(color_red, &format!("✘ {}", message)))
    }

    pub fn prompt(&self, state: &AppState) -> String {
        match state.session.indicator() {
            AuthIndicator::Success => format!("{} ", self.paint(color_green, "playground>")),
            AuthIndicator::LoggedOut => "playground> ".to_string(),
        }
    }

    pub fn status(&self, state: &AppState) -> String {
        let session = match state.session.indicator() {
            AuthIndicator::Success => self.paint(color_green, "logged in"),
            AuthIndicator::LoggedOut => self.paint(color_yellow, "logged out"),
        };
        let selected = match state.current_snippet.and_then(|id| state.find_snippet(id)) {
            Some(snippet) => format!("#{} {}", snippet.id, snippet.title),
            None => "none".to_string(),
        };
        format!(
            "Session: {} [{}]\nSnippets: {}\nSelected: {}\n",
            session,
            state.session.button_label(),
            state.snippets.len(),
            selected
        )
    }

    /// The selector, current entry marked.
    pub fn selector(&self, state: &AppState) -> String {
        if state.selector.is_empty() {
            return "No snippets loaded.\n".to_string();
        }
        let current = state.current_snippet.map(|id| id.to_string());
        let mut out = String::new();
        for option in &state.selector {
            let marker = if current.as_deref() == Some(option.value.as_str()) {
                "*"
            } else {
                " "
            };
            out.push_str(&format!(
                "{} {:>4}  {}\n",
                marker,
                self.paint(color_cyan, &option.value),
                option.label
            ));
        }
        out
    }

    pub fn editor(&self, state: &AppState) -> String {
        format!(
            "{} {}\n{}\n{}\n",
            self.bold("Title:"),
            state.editor.title,
            self.bold("Code:"),
            state.editor.code
        )
    }

    pub fn output(&self, state: &AppState) -> String {
        format!(
            "{} {}\n{}\n{}\n",
            self.bold("Result:"),
            state.output.result,
            self.bold("Console:"),
            state.output.console
        )
    }
}
