pub mod base;
pub mod http_api;

// Re-export the primary API items so code outside can do
// "use crate::api::{PlaygroundApi, ApiError};"
pub use base::{create_api, ApiError, PlaygroundApi};
pub use http_api::HttpApi;
