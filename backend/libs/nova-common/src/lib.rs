//! Nova Common Library
//!
//! Shared wire models, error types and the REST client used by the Nova
//! social client crates. Pure crates (graph resolution, pagination) depend on
//! this with `default-features = false` to get the models without the HTTP
//! stack.

pub mod auth;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http_client;
pub mod models;

pub use auth::BearerToken;
pub use config::ApiConfig;
pub use error::{Result, ServiceError};
#[cfg(feature = "http")]
pub use http_client::ApiClient;

pub use models::{ApiMessage, ConnectionEdge, FeedPage, Post, User, UsersResponse};
