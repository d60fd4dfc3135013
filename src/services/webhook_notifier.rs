use crate::enums::notify_outcome::NotifyOutcome;
use crate::errors::WebhookResult;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::contact_record::ContactRecord;
use crate::structs::webhook_envelope::WebhookEnvelope;
use crate::traits::webhook_transport::WebhookTransport;

/// Posts contact records to one webhook URL as `create` envelopes.
///
/// Holds no mutable state, so a single notifier can serve concurrent calls.
pub struct WebhookNotifier<T: WebhookTransport> {
    transport: T,
    url: String,
}

/// The pretty-printed envelope for `record`, without sending anything.
pub fn preview(record: ContactRecord) -> WebhookResult<String> {
    WebhookEnvelope::create(record).to_pretty_json()
}

impl WebhookNotifier<ReqwestTransport> {
    pub fn from_config(config: &WebhookConfig, url: impl Into<String>) -> WebhookResult<Self> {
        Ok(Self::new(ReqwestTransport::from_config(config)?, url))
    }
}

impl<T: WebhookTransport> WebhookNotifier<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one request and reports how the endpoint answered.
    ///
    /// A non-2xx answer is logged and returned as `NotifyOutcome::Rejected`;
    /// only a missing answer is an error.
    pub async fn notify(&self, record: ContactRecord) -> WebhookResult<NotifyOutcome> {
        let envelope = WebhookEnvelope::create(record);
        let body = envelope.to_body()?;

        log::info!("📤 Sending data to webhook: {}", envelope.to_pretty_json()?);
        log::debug!("Posting {} envelope to {}", envelope.action.as_str(), self.url);

        let response = self.transport.post_json(&self.url, body).await?;

        if response.is_success() {
            log::info!("✅ Webhook sent successfully");
            Ok(NotifyOutcome::Delivered { status: response.status })
        } else {
            log::error!("❌ Failed to send webhook: {}", response.body);
            Ok(NotifyOutcome::Rejected {
                status: response.status,
                body: response.body,
            })
        }
    }
}
