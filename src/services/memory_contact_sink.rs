use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;
use crate::config::constants::CONTACT_ID_PREFIX;
use crate::errors::WebhookResult;
use crate::structs::contact::Contact;
use crate::traits::contact_sink::ContactSink;

/// Keeps contacts in memory for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryContactSink {
    contacts: DashMap<String, Contact>,
}

impl InMemoryContactSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, contact_id: &str) -> Option<Contact> {
        self.contacts.get(contact_id).map(|entry| entry.value().clone())
    }

    pub fn find_by_hr_id(&self, hr_id: &str) -> Option<String> {
        self.contacts
            .iter()
            .find(|entry| entry.value().hr_id.as_deref() == Some(hr_id))
            .map(|entry| entry.key().clone())
    }

    /// Every stored contact, ordered by id.
    pub fn snapshot(&self) -> Vec<(String, Contact)> {
        let mut contacts: Vec<_> = self
            .contacts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        contacts.sort_by(|a, b| a.0.cmp(&b.0));
        contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[async_trait]
impl ContactSink for InMemoryContactSink {
    async fn create(&self, contact: Contact) -> WebhookResult<String> {
        let contact_id = format!("{CONTACT_ID_PREFIX}{}", Uuid::new_v4().simple());
        log::info!(
            "👤 Contact created with HR_ID: {}, contact ID: {contact_id}",
            contact.hr_id.as_deref().unwrap_or("-")
        );
        self.contacts.insert(contact_id.clone(), contact);
        Ok(contact_id)
    }

    async fn update(&self, hr_id: &str, contact: Contact) -> WebhookResult<Option<String>> {
        // The lookup's shard guard is released before the write.
        let Some(contact_id) = self.find_by_hr_id(hr_id) else {
            return Ok(None);
        };

        self.contacts.insert(contact_id.clone(), contact);
        log::info!("✏️ Contact updated: {contact_id}");
        Ok(Some(contact_id))
    }

    async fn delete(&self, hr_id: &str) -> WebhookResult<Option<String>> {
        let Some(contact_id) = self.find_by_hr_id(hr_id) else {
            return Ok(None);
        };

        self.contacts.remove(&contact_id);
        log::info!("🗑️ Contact deleted: {contact_id}");
        Ok(Some(contact_id))
    }
}
