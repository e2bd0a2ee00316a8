//! Transaction API - Core Trait
//!
//! Abstract interface over the backend's `/transaction` resource.
//! The browser build implements it over `fetch`; tests use a scripted fake.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTransaction, Record};

/// List / create / delete-all against `<base>/transaction`.
///
/// Futures are `?Send`: they run on the browser's single event loop.
#[async_trait(?Send)]
pub trait TransactionApi {
    /// `GET /transaction`, returning the `result` array
    async fn list(&self) -> ApiResult<Vec<Record>>;

    /// `POST /transaction` with a JSON body
    async fn create(&self, transaction: &NewTransaction) -> ApiResult<()>;

    /// `DELETE /transaction`
    async fn delete_all(&self) -> ApiResult<()>;
}
