use std::sync::Arc;
use crate::enums::sync_action::SyncAction;
use crate::enums::sync_outcome::SyncOutcome;
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::contact::Contact;
use crate::structs::inbound_envelope::InboundEnvelope;
use crate::traits::contact_sink::ContactSink;

/// Applies inbound envelopes to a `ContactSink`.
///
/// Unknown actions and updates or deletes of unknown HR_IDs are logged and
/// reported as outcomes. Only a refused create and a failing sink are errors.
pub struct ContactSyncService {
    sink: Arc<dyn ContactSink>,
}

impl ContactSyncService {
    pub fn new(sink: Arc<dyn ContactSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, envelope: InboundEnvelope) -> WebhookResult<SyncOutcome> {
        let contact = Contact::from_fields(&envelope.record.fields);

        let Some(action) = envelope.action.as_deref().and_then(SyncAction::parse) else {
            log::warn!("⚠️ Ignoring envelope with action {:?}", envelope.action);
            return Ok(SyncOutcome::Ignored { action: envelope.action });
        };

        log::info!("📥 Received {action} for HR_ID {}", contact.hr_id.as_deref().unwrap_or("-"));

        match action {
            SyncAction::Create => self.create(contact).await,
            SyncAction::Update => self.update(contact).await,
            SyncAction::Delete => self.delete(contact).await,
        }
    }

    async fn create(&self, contact: Contact) -> WebhookResult<SyncOutcome> {
        if !contact.has_details() {
            log::error!("❌ No valid fields provided. Contact cannot be created.");
            return Err(WebhookError::sync_error(
                SyncAction::Create.as_str(),
                "no valid fields provided (need a name, email, phone, city or country)",
            ));
        }

        log::debug!("Creating contact {contact:?}");
        let contact_id = self.sink.create(contact).await?;
        Ok(SyncOutcome::Created { contact_id })
    }

    async fn update(&self, contact: Contact) -> WebhookResult<SyncOutcome> {
        let Some(hr_id) = contact.hr_id.clone() else {
            log::warn!("⚠️ Update without HR_ID, nothing to match");
            return Ok(SyncOutcome::NotFound { hr_id: None });
        };

        match self.sink.update(&hr_id, contact).await? {
            Some(contact_id) => Ok(SyncOutcome::Updated { contact_id }),
            None => {
                log::warn!("⚠️ Contact not found for HR_ID: {hr_id}");
                Ok(SyncOutcome::NotFound { hr_id: Some(hr_id) })
            }
        }
    }

    async fn delete(&self, contact: Contact) -> WebhookResult<SyncOutcome> {
        let Some(hr_id) = contact.hr_id else {
            log::warn!("⚠️ Delete without HR_ID, nothing to match");
            return Ok(SyncOutcome::NotFound { hr_id: None });
        };

        match self.sink.delete(&hr_id).await? {
            Some(contact_id) => Ok(SyncOutcome::Deleted { contact_id }),
            None => {
                log::warn!("⚠️ Contact not found for HR_ID: {hr_id}");
                Ok(SyncOutcome::NotFound { hr_id: Some(hr_id) })
            }
        }
    }
}
