use serde::{Deserialize, Serialize};
use crate::structs::contact_record::ContactRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundRecord {
    #[serde(default)]
    pub fields: ContactRecord,
}

/// `{ "action": ..., "record": { "fields": { ... } } }` as received.
///
/// Unlike the outgoing envelope the action is free text, and both it and the
/// record may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEnvelope {
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub record: InboundRecord,
}
