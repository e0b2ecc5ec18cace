use serde::Serialize;

use super::Recommendation;

/// CSS class carried by every rendered card
pub const CARD_CLASS: &str = "movie-card";

/// Rendered unit for one recommendation: an image plus a heading
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Card {
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
}

impl From<&Recommendation> for Card {
    fn from(rec: &Recommendation) -> Self {
        Card {
            image_src: rec.poster.clone(),
            image_alt: rec.title.clone(),
            heading: rec.title.clone(),
        }
    }
}
