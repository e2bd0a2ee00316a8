//! Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use record_sync::{DraftInput, PanelState, Record};

/// Record list and draft row of the transaction panel
#[derive(Clone, Debug, Default, Store)]
pub struct PanelData {
    /// Last successful read, never patched locally
    pub records: Vec<Record>,
    /// Text currently in the input row
    pub draft: DraftInput,
}

/// Copyable handle shared by the panel's views and its async handlers
#[derive(Clone, Copy)]
pub struct PanelStore(Store<PanelData>);

impl Default for PanelStore {
    fn default() -> Self {
        Self(Store::new(PanelData::default()))
    }
}

impl PanelStore {
    pub fn records(&self) -> Vec<Record> {
        self.0.records().get()
    }

    pub fn draft_value(&self) -> DraftInput {
        self.0.draft().get()
    }
}

impl PanelState for PanelStore {
    fn draft(&self) -> DraftInput {
        self.0.draft().get_untracked()
    }

    fn set_draft(&self, draft: DraftInput) {
        self.0.draft().set(draft);
    }

    fn replace_records(&self, records: Vec<Record>) {
        self.0.records().set(records);
    }
}
