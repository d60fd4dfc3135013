use serde::{Deserialize, Serialize};
use crate::enums::webhook_action::WebhookAction;
use crate::errors::WebhookResult;
use crate::structs::contact_record::ContactRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeRecord {
    pub fields: ContactRecord,
}

/// `{ "action": "create", "record": { "fields": { ... } } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    pub action: WebhookAction,
    pub record: EnvelopeRecord,
}

impl WebhookEnvelope {
    pub const fn create(fields: ContactRecord) -> Self {
        Self {
            action: WebhookAction::Create,
            record: EnvelopeRecord { fields },
        }
    }

    /// Compact JSON, as sent on the wire.
    pub fn to_body(&self) -> WebhookResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON, for logs and previews.
    pub fn to_pretty_json(&self) -> WebhookResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn jane_doe() -> ContactRecord {
        ContactRecord {
            full_name: Some(json!("Jane Doe")),
            city: Some(json!("Paris")),
            country: Some(json!("FR")),
            mobile: Some(json!("+33000000")),
            email: Some(json!("jane@x.com")),
            hr_id: Some(json!("HR42")),
            last_synced: Some(json!("2024-01-01T00:00:00Z")),
            needs_sync: Some(json!(true)),
        }
    }

    #[test]
    fn body_matches_wire_format() {
        let body = WebhookEnvelope::create(jane_doe()).to_body().unwrap();

        assert_eq!(
            body,
            r#"{"action":"create","record":{"fields":{"FullName":"Jane Doe","City":"Paris","Country":"FR","Mobile":"+33000000","Email":"jane@x.com","HR_ID":"HR42","LastSynced":"2024-01-01T00:00:00Z","NeedsSync":true}}}"#
        );
    }

    #[test]
    fn empty_record_keeps_every_key() {
        let value = serde_json::to_value(WebhookEnvelope::create(ContactRecord::default())).unwrap();
        let fields = value["record"]["fields"].as_object().unwrap();

        assert_eq!(value["action"], json!("create"));
        assert_eq!(fields.len(), 8);
        assert!(fields.values().all(serde_json::Value::is_null));
    }

    #[test]
    fn pretty_json_is_indented() {
        let pretty = WebhookEnvelope::create(jane_doe()).to_pretty_json().unwrap();

        assert!(pretty.starts_with("{\n  \"action\": \"create\",\n  \"record\": {"));
        assert!(pretty.contains("      \"FullName\": \"Jane Doe\""));
    }

    fn arb_value() -> impl Strategy<Value = Option<serde_json::Value>> {
        proptest::option::of(prop_oneof![
            ".{0,24}".prop_map(serde_json::Value::from),
            any::<i64>().prop_map(serde_json::Value::from),
            any::<bool>().prop_map(serde_json::Value::from),
        ])
    }

    prop_compose! {
        fn arb_record()(
            full_name in arb_value(),
            city in arb_value(),
            country in arb_value(),
            mobile in arb_value(),
            email in arb_value(),
            hr_id in arb_value(),
            last_synced in arb_value(),
            needs_sync in arb_value(),
        ) -> ContactRecord {
            ContactRecord { full_name, city, country, mobile, email, hr_id, last_synced, needs_sync }
        }
    }

    proptest! {
        #[test]
        fn envelope_fields_mirror_record(record in arb_record()) {
            let value = serde_json::to_value(WebhookEnvelope::create(record.clone())).unwrap();

            prop_assert_eq!(&value["action"], &json!("create"));
            prop_assert_eq!(&value["record"]["fields"], &serde_json::to_value(&record).unwrap());

            let parsed: WebhookEnvelope = serde_json::from_value(value).unwrap();
            prop_assert_eq!(parsed.record.fields, record);
        }
    }
}
