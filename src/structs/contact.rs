use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::contact_record::ContactRecord;

/// A contact as the receiver stores it.
///
/// Every value is text: strings are taken as-is, other scalars as their JSON
/// rendering (`true`, `42`), and `null` or a missing key as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub hr_id: Option<String>,
    pub last_synced: Option<String>,
    pub needs_sync: Option<String>,
}

impl Contact {
    pub fn from_fields(fields: &ContactRecord) -> Self {
        Self {
            name: text(fields.full_name.as_ref()),
            email: text(fields.email.as_ref()),
            phone: text(fields.mobile.as_ref()),
            city: text(fields.city.as_ref()),
            country: text(fields.country.as_ref()),
            hr_id: text(fields.hr_id.as_ref()),
            last_synced: text(fields.last_synced.as_ref()),
            needs_sync: text(fields.needs_sync.as_ref()),
        }
    }

    /// True when at least one of name, email, phone, city or country is
    /// non-empty. HR metadata alone does not make a contact.
    pub fn has_details(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.city, &self.country]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
