//! Record Manager
//!
//! Drives the panel through fetch -> display -> mutate -> refetch.
//! Every write is followed by a fresh read; the list is never patched locally.

use tracing::{debug, error, info, warn};

use crate::api::TransactionApi;
use crate::models::{DraftField, NewTransaction};
use crate::state::PanelState;

/// How many times the initial read is attempted before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: 3 }
    }
}

pub struct RecordManager<A, S> {
    api: A,
    state: S,
    retry: RetryPolicy,
}

impl<A, S> RecordManager<A, S>
where
    A: TransactionApi,
    S: PanelState,
{
    pub fn new(api: A, state: S) -> Self {
        Self {
            api,
            state,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// First read after mount. Retries without backoff, then gives up quietly.
    ///
    /// Returns whether the list was replaced.
    pub async fn load_initial(&self) -> bool {
        let attempts = self.retry.attempts.max(1);
        for attempt in 1..=attempts {
            match self.api.list().await {
                Ok(records) => {
                    info!(count = records.len(), attempt, "[PANEL] Loaded transactions");
                    self.state.replace_records(records);
                    return true;
                }
                Err(e) => {
                    warn!(attempt, attempts, error = %e, "[PANEL] Transaction load failed");
                }
            }
        }
        error!(attempts, "[PANEL] Giving up on initial transaction load");
        false
    }

    /// Single read, no retry. Used after every write.
    pub async fn refresh(&self) -> bool {
        match self.api.list().await {
            Ok(records) => {
                debug!(count = records.len(), "[PANEL] Refreshed transactions");
                self.state.replace_records(records);
                true
            }
            Err(e) => {
                warn!(error = %e, "[PANEL] Transaction refresh failed");
                false
            }
        }
    }

    /// POST the current draft, clear the draft, then refresh once.
    pub async fn add(&self) {
        let body = NewTransaction::from(&self.state.draft());
        match self.api.create(&body).await {
            Ok(()) => debug!(amount = %body.amount, "[PANEL] Transaction added"),
            Err(e) => warn!(error = %e, "[PANEL] Add transaction failed"),
        }
        self.state.clear_draft();
        self.refresh().await;
    }

    /// DELETE every record, clear the draft, then refresh once.
    pub async fn clear_all(&self) {
        match self.api.delete_all().await {
            Ok(()) => debug!("[PANEL] Transactions cleared"),
            Err(e) => warn!(error = %e, "[PANEL] Clear transactions failed"),
        }
        self.state.clear_draft();
        self.refresh().await;
    }

    /// Keystroke in one of the input row's fields
    pub fn edit(&self, field: DraftField, value: String) {
        let mut draft = self.state.draft();
        draft.set(field, value);
        self.state.set_draft(draft);
    }
}
