//! Shared application state.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use taskpilot_enrich::{ChatModel, Enricher};
use taskpilot_store::TodoStore;
use tokio::sync::Mutex;

/// State shared by every handler.
///
/// The store sits behind an async mutex (rusqlite connections are not
/// `Sync`); the guard is held only for the duration of a statement, never
/// across the enrichment call.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<TodoStore>>,
    enricher: Enricher,
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Build state over a store and a chat model.
    pub fn new(store: TodoStore, model: Arc<dyn ChatModel>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            enricher: Enricher::new(model),
            fixed_today: None,
        }
    }

    /// Pin "today" to a fixed date. Used by tests for deterministic
    /// date validation.
    #[must_use]
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// The reference date for due-date validation and the prompt.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// The shared store.
    pub fn store(&self) -> &Mutex<TodoStore> {
        &self.store
    }

    /// The enrichment client.
    pub fn enricher(&self) -> &Enricher {
        &self.enricher
    }
}
