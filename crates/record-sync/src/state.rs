//! Panel State
//!
//! Storage seam for the record list and the draft input row.

use crate::models::{DraftInput, Record};

/// Where the panel keeps its records and draft.
///
/// Methods take `&self`: the UI backs this with reactive cells, tests with `RefCell`.
pub trait PanelState {
    /// Current draft, read without subscribing
    fn draft(&self) -> DraftInput;

    fn set_draft(&self, draft: DraftInput);

    /// Replace the whole list with the last successful read
    fn replace_records(&self, records: Vec<Record>);

    fn clear_draft(&self) {
        self.set_draft(DraftInput::default());
    }
}
