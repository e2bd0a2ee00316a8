//! HTTP API Client
//!
//! `TransactionApi` over the browser's fetch, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use record_sync::{
    ApiError, ApiResult, ClientConfig, ListResponse, MessageResponse, NewTransaction, Record,
    TransactionApi,
};

#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    url: String,
}

impl HttpTransactionApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.transaction_url(),
        }
    }
}

#[async_trait(?Send)]
impl TransactionApi for HttpTransactionApi {
    async fn list(&self) -> ApiResult<Vec<Record>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(network)?;
        let response = ensure_ok(response)?;

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.result)
    }

    async fn create(&self, transaction: &NewTransaction) -> ApiResult<()> {
        let response = create_request(&self.url, transaction)?
            .send()
            .await
            .map_err(network)?;
        log_message("create", ensure_ok(response)?).await;
        Ok(())
    }

    async fn delete_all(&self) -> ApiResult<()> {
        let response = delete_request(&self.url)?
            .send()
            .await
            .map_err(network)?;
        log_message("delete", ensure_ok(response)?).await;
        Ok(())
    }
}

/// POST with the draft as a JSON body
fn create_request(url: &str, transaction: &NewTransaction) -> ApiResult<Request> {
    let body = serde_json::to_string(transaction).map_err(|e| ApiError::Encode(e.to_string()))?;
    Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Body-less DELETE of the whole collection
fn delete_request(url: &str) -> ApiResult<Request> {
    Request::delete(url)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn ensure_ok(response: Response) -> ApiResult<Response> {
    check_status(response.status())?;
    Ok(response)
}

/// Anything outside 2xx counts as a failed request.
fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

// Write responses carry a human-readable message only.
async fn log_message(op: &str, response: Response) {
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&text).unwrap_or_default();
    tracing::debug!(op, message = %message.message, "[API] Write acknowledged");
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_net::http::Method;
    use wasm_bindgen_test::*;

    const URL: &str = "http://test-server.com/transaction";

    #[wasm_bindgen_test]
    fn create_request_posts_json() {
        let transaction = NewTransaction {
            amount: "150".to_string(),
            desc: "New Transaction".to_string(),
        };
        let request = create_request(URL, &transaction).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url(), URL);
        assert_eq!(
            request.headers().get("Content-Type").as_deref(),
            Some("application/json")
        );
    }

    #[wasm_bindgen_test]
    fn delete_request_targets_collection() {
        let request = delete_request(URL).unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url(), URL);
        assert_eq!(request.headers().get("Content-Type"), None);
    }
}
