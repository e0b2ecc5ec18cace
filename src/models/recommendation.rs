use serde::{Deserialize, Serialize};

/// A single `{title, poster}` pair returned by the recommendation API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Movie title, rendered verbatim as the card heading
    pub title: String,
    /// Poster image URL, rendered verbatim as the card image source
    pub poster: String,
}

/// Body of a successful `/recommend` response
///
/// Records keep the order the API sent them in. Duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResponse {
    /// Parse a raw response body, failing on any shape mismatch
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let body = r#"{"recommendations":[
            {"title":"Interstellar","poster":"a.jpg"},
            {"title":"Memento","poster":"b.jpg"},
            {"title":"Interstellar","poster":"a.jpg"}
        ]}"#;

        let response = RecommendationResponse::from_body(body).unwrap();
        let titles: Vec<&str> = response
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Interstellar", "Memento", "Interstellar"]);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"recommendations":[{"title":"Heat","poster":"h.jpg","year":1995}],"model":"knn"}"#;
        let response = RecommendationResponse::from_body(body).unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.recommendations[0].poster, "h.jpg");
    }

    #[test]
    fn test_parse_empty_list() {
        let response = RecommendationResponse::from_body(r#"{"recommendations":[]}"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_parse_missing_recommendations_field() {
        let result = RecommendationResponse::from_body(r#"{"error":"movie not found"}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("recommendations"));
    }

    #[test]
    fn test_parse_record_missing_poster() {
        let result = RecommendationResponse::from_body(r#"{"recommendations":[{"title":"Heat"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_wrong_types() {
        assert!(RecommendationResponse::from_body(r#"{"recommendations":"Heat"}"#).is_err());
        assert!(RecommendationResponse::from_body(r#"[{"title":"Heat","poster":"h.jpg"}]"#).is_err());
        assert!(RecommendationResponse::from_body("<html>500</html>").is_err());
    }
}
