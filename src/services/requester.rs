use tokio::sync::RwLock;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::Config,
    error::{AppResult, RecsError, USER_NOTICE},
    models::{Card, Query},
    services::providers::RecommendationApi,
    ui::{Notifier, Page},
};

/// Ids of the page elements a requester reads from and renders into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    pub input_id: String,
    pub container_id: String,
}

impl Default for PageBindings {
    fn default() -> Self {
        Self {
            input_id: "movieInput".to_string(),
            container_id: "recommendations".to_string(),
        }
    }
}

impl From<&Config> for PageBindings {
    fn from(config: &Config) -> Self {
        Self {
            input_id: config.recs_input_id.clone(),
            container_id: config.recs_container_id.clone(),
        }
    }
}

/// Result of one request/render cycle
#[derive(Debug)]
pub enum CycleOutcome {
    /// The container now holds exactly `cards` cards from this cycle
    Rendered { cards: usize },
    /// The user was notified; the error was logged
    Failed(RecsError),
}

impl CycleOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, CycleOutcome::Rendered { .. })
    }
}

/// Runs one request/render cycle per user action
pub struct RecommendationRequester<A, N> {
    api: A,
    notifier: N,
    bindings: PageBindings,
    max_cards: Option<usize>,
}

impl<A, N> RecommendationRequester<A, N>
where
    A: RecommendationApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            bindings: PageBindings::default(),
            max_cards: None,
        }
    }

    pub fn with_bindings(mut self, bindings: PageBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Render at most `max_cards` records, keeping response order
    pub fn with_max_cards(mut self, max_cards: Option<usize>) -> Self {
        self.max_cards = max_cards;
        self
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Read the query, fetch recommendations and replace the container's cards
    ///
    /// The page lock is held only while reading the input and while rendering,
    /// never across the request, so the page stays usable while a cycle is in
    /// flight. Overlapping cycles are not coordinated: the last to finish
    /// decides what the container shows.
    ///
    /// API failures never escape: they fire exactly one notification, are
    /// logged, and come back as `CycleOutcome::Failed`. The container is only
    /// cleared once a well-formed response has arrived, so a failed cycle
    /// leaves the previous cards in place.
    ///
    /// A missing input element is returned as `Err` before any request is made
    /// and does not notify the user.
    pub async fn fetch_and_render(&self, page: &RwLock<Page>) -> AppResult<CycleOutcome> {
        let span = tracing::info_span!("recommendation_cycle", cycle_id = %Uuid::new_v4());
        self.run_cycle(page).instrument(span).await
    }

    async fn run_cycle(&self, page: &RwLock<Page>) -> AppResult<CycleOutcome> {
        let query = self.read_query(&*page.read().await)?;

        match self.render(&query, page).await {
            Ok(cards) => {
                tracing::info!(query = %query, cards, "Recommendations rendered");
                Ok(CycleOutcome::Rendered { cards })
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "Recommendation cycle failed");
                self.notifier.notify(USER_NOTICE);
                Ok(CycleOutcome::Failed(e))
            }
        }
    }

    fn read_query(&self, page: &Page) -> AppResult<Query> {
        match page.input_value(&self.bindings.input_id) {
            Some(value) => Ok(Query::new(value)),
            None => {
                tracing::warn!(
                    input_id = %self.bindings.input_id,
                    "Input element missing, skipping recommendation request"
                );
                Err(RecsError::MissingElement {
                    id: self.bindings.input_id.clone(),
                })
            }
        }
    }

    async fn render(&self, query: &Query, page: &RwLock<Page>) -> AppResult<usize> {
        let response = self.api.recommend(query).await?;

        let mut page = page.write().await;
        let container = page
            .container_mut(&self.bindings.container_id)
            .ok_or_else(|| RecsError::MissingElement {
                id: self.bindings.container_id.clone(),
            })?;

        container.clear_children();
        let limit = self.max_cards.unwrap_or(usize::MAX);
        for rec in response.recommendations.iter().take(limit) {
            container.append_child(Card::from(rec));
        }

        Ok(container.len())
    }
}
