//! Brave Search API domain.
//!
//! - `client.rs` - the API gateway issuing requests per endpoint
//! - `types/` - typed response bodies per search category
//! - `query.rs` - query string encoding helpers
//! - `error.rs` - API error types

pub mod client;
mod error;
pub mod query;
pub mod types;

pub use client::{BraveApi, DEFAULT_BASE_URL, Endpoint};
pub use error::{ApiError, ApiResult};
