mod card;
mod recommendation;

pub use card::{Card, CARD_CLASS};
pub use recommendation::{Recommendation, RecommendationResponse};

use std::fmt::Display;

/// Movie title entered by the user, used as the search key
///
/// Kept exactly as typed: no trimming, no validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Component-style percent-encoding (space becomes `%20`, `&` becomes `%26`)
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
