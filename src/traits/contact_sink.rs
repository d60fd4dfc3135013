use async_trait::async_trait;
use crate::errors::WebhookResult;
use crate::structs::contact::Contact;

/// Where the receiver applies contact changes.
///
/// Contacts are addressed by the HR_ID they carry. `update` and `delete`
/// return `Ok(None)` when no stored contact has that HR_ID.
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Stores a new contact and returns its id.
    async fn create(&self, contact: Contact) -> WebhookResult<String>;

    async fn update(&self, hr_id: &str, contact: Contact) -> WebhookResult<Option<String>>;

    async fn delete(&self, hr_id: &str) -> WebhookResult<Option<String>>;
}
