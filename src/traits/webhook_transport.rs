use async_trait::async_trait;
use crate::errors::WebhookResult;
use crate::structs::transport_response::TransportResponse;

/// Issues the single outbound POST for a notification.
///
/// Implementations send `body` verbatim with `Content-Type: application/json`
/// and return `Err(WebhookError::TransportError)` only when no response was
/// received. Any status code, including 4xx and 5xx, is an `Ok` response;
/// the body is read only for non-2xx statuses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> WebhookResult<TransportResponse>;
}
