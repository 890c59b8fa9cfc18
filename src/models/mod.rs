pub mod evaluation;
pub mod session;
pub mod snippet;

pub use evaluation::Evaluation;
pub use session::{Credentials, LoginResponse};
pub use snippet::{Snippet, SnippetDraft, SnippetId};
