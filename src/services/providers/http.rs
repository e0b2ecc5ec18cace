/// HTTP recommendation provider
///
/// Issues `GET {base}/recommend?movie={title}` and decodes the
/// `{"recommendations": [...]}` body.
use std::time::Duration;

use reqwest::{Client as HttpClient, Url};

use crate::{
    config::Config,
    error::{AppResult, RecsError},
    models::{Query, RecommendationResponse},
    services::providers::RecommendationApi,
};

const RECOMMEND_SEGMENT: &str = "recommend";
const MOVIE_PARAM: &str = "movie";
/// Longest error body kept in a `Status` error, in characters
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Clone)]
pub struct HttpRecommendationApi {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationApi {
    /// Creates a provider with a bounded request timeout
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.recs_api_url.clone(), config.request_timeout())
    }

    /// Build the request URL for a query
    ///
    /// The title is percent-encoded as a single `movie` parameter so the
    /// server decodes back exactly what the user typed. A base URL carrying
    /// its own query or fragment is rejected.
    pub fn request_url(&self, query: &Query) -> AppResult<Url> {
        let invalid = |reason: &str| RecsError::InvalidUrl(format!("{}: {}", self.api_url, reason));

        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(&e.to_string()))?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("base URL must not have a query or fragment"));
        }

        url.path_segments_mut()
            .map_err(|_| invalid("base URL cannot have a path"))?
            .pop_if_empty()
            .push(RECOMMEND_SEGMENT);
        url.set_query(Some(&format!("{}={}", MOVIE_PARAM, query.encoded())));

        Ok(url)
    }
}

/// Cap an error body so large error pages do not flood the logs
fn truncate_body(body: String) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body,
    }
}

#[async_trait::async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn recommend(&self, query: &Query) -> AppResult<RecommendationResponse> {
        let url = self.request_url(query)?;
        tracing::debug!(query = %query, url = %url, "Requesting recommendations");

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = truncate_body(response.text().await.unwrap_or_default());
            return Err(RecsError::Status { status, body });
        }

        let body = response.text().await?;
        let recommendations = RecommendationResponse::from_body(&body)?;

        tracing::info!(
            query = %query,
            results = recommendations.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
