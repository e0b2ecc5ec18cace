pub mod providers;
pub mod requester;

pub use providers::{HttpRecommendationApi, RecommendationApi};
pub use requester::{CycleOutcome, PageBindings, RecommendationRequester};
