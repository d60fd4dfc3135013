use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The contact fields forwarded to the webhook.
///
/// Values are carried exactly as the source supplied them, whatever their
/// JSON type. Every field serializes as `null` when absent, so the payload
/// always carries all eight keys in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    #[serde(rename = "FullName")]
    pub full_name: Option<Value>,

    #[serde(rename = "City")]
    pub city: Option<Value>,

    #[serde(rename = "Country")]
    pub country: Option<Value>,

    #[serde(rename = "Mobile")]
    pub mobile: Option<Value>,

    #[serde(rename = "Email")]
    pub email: Option<Value>,

    #[serde(rename = "HR_ID")]
    pub hr_id: Option<Value>,

    #[serde(rename = "LastSynced")]
    pub last_synced: Option<Value>,

    #[serde(rename = "NeedsSync")]
    pub needs_sync: Option<Value>,
}

impl ContactRecord {
    /// Overwrites `LastSynced` with `at` as an RFC 3339 UTC timestamp.
    #[must_use]
    pub fn synced_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_synced = Some(Value::String(at.to_rfc3339_opts(SecondsFormat::Secs, true)));
        self
    }
}
