use serde::{Deserialize, Serialize};

/// Only creation notifications are ever emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookAction {
    #[default]
    Create,
}

impl WebhookAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
        }
    }
}
