//! User actions.
//!
//! Each handler performs at most a couple of sequential requests against a
//! [`PlaygroundApi`](crate::api::PlaygroundApi) and updates [`AppState`](crate::state::AppState).
//! Success is reported as a [`Notice`], failure as an [`ActionError`]; both carry
//! the text the user should see.

pub mod runner;
pub mod session;
pub mod snippets;

use std::fmt;

use thiserror::Error;

use crate::api::ApiError;

/// Result type shared by every handler.
pub type ActionResult = Result<Notice, ActionError>;

/// A user-visible success message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Notice(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an action did not go through. `Display` is the user-facing text.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Invalid(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    /// The backend refused or could not be reached.
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    pub(crate) fn failed(message: &'static str) -> impl FnOnce(ApiError) -> ActionError {
        move |source| {
            tracing::warn!(
                event_name = "action.failed",
                event_domain = "controllers",
                reason = %source,
                "{}",
                message
            );
            ActionError::Failed { message, source }
        }
    }
}
