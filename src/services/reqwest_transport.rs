use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use crate::config::constants::{timeout_duration, JSON_CONTENT_TYPE};
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::transport_response::TransportResponse;
use crate::traits::webhook_transport::WebhookTransport;

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
    headers: HeaderMap,
}

impl ReqwestTransport {
    /// Without a timeout the client waits as long as the endpoint keeps the connection open.
    pub fn new(timeout: Option<Duration>, extra_headers: &HashMap<String, String>) -> WebhookResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| WebhookError::system_error("HTTP client setup", &e.to_string()))?;

        Ok(Self {
            client,
            headers: Self::build_headers(extra_headers)?,
        })
    }

    pub fn from_config(config: &WebhookConfig) -> WebhookResult<Self> {
        Self::new(config.timeout_secs.map(timeout_duration), &config.headers)
    }

    fn build_headers(extra_headers: &HashMap<String, String>) -> WebhookResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        for (name, value) in extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                WebhookError::config_error(&e.to_string(), Some(&format!("webhook.headers.{name}")), None)
            })?;

            if header_name == CONTENT_TYPE {
                log::warn!("⚠️ Ignoring configured {name} header; the payload is always JSON");
                continue;
            }

            let header_value = HeaderValue::from_str(value).map_err(|e| {
                WebhookError::config_error(&e.to_string(), Some(&format!("webhook.headers.{name}")), None)
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> WebhookResult<TransportResponse> {
        let response = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
            .map_err(|e| WebhookError::transport_error(url, &e.to_string()))?;

        let status = response.status();
        log::debug!("Webhook responded with {status}");

        if status.is_success() {
            return Ok(TransportResponse::new(status.as_u16(), String::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::transport_error(url, &e.to_string()))?;

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
