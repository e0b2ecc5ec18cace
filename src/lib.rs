//! Client for a movie recommendation API.
//!
//! A [`RecommendationRequester`] reads a movie title from a page's input
//! element, asks the recommendation API for similar movies and renders the
//! results as cards into the page's container element.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use config::Config;
pub use error::{AppResult, RecsError, USER_NOTICE};
pub use services::{
    CycleOutcome, HttpRecommendationApi, PageBindings, RecommendationApi,
    RecommendationRequester,
};
pub use ui::{Notifier, Page, StderrNotifier};
