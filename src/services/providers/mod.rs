/// Recommendation API abstraction
///
/// The requester talks to the recommendation backend only through this trait,
/// so tests can swap the HTTP client for a mock and deployments can point the
/// HTTP client at any server speaking the `/recommend` contract.
use crate::{
    error::AppResult,
    models::{Query, RecommendationResponse},
};

pub mod http;

pub use http::HttpRecommendationApi;

/// Trait for recommendation data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Fetch recommendations for a movie title
    ///
    /// Returns the records in the order the backend ranked them. Transport
    /// failures, non-2xx statuses and malformed bodies are all errors.
    async fn recommend(&self, query: &Query) -> AppResult<RecommendationResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
