//! Record Sync
//!
//! Target-independent core of the transaction panel:
//! - models: wire and view data (Record, DraftInput, request/response bodies)
//! - api: the `TransactionApi` seam over the `/transaction` resource
//! - state: the `PanelState` seam the UI implements with reactive storage
//! - manager: load / add / clear-all / edit operations
//! - config: build-time base URL and log level

mod api;
mod config;
mod error;
mod manager;
mod models;
mod state;


pub use api::TransactionApi;
pub use config::{ClientConfig, DEFAULT_SERVER_URL, TRANSACTION_PATH};
pub use error::{ApiError, ApiResult};
pub use manager::{RecordManager, RetryPolicy};
pub use models::{DraftField, DraftInput, ListResponse, MessageResponse, NewTransaction, Record};
pub use state::PanelState;
