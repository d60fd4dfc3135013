use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,

    /// Environment variable consulted before `url`.
    #[serde(default = "ConfigHelper::default_url_env")]
    pub url_env: String,

    /// Absent means the request may wait forever on a silent endpoint.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            url_env: ConfigHelper::default_url_env(),
            timeout_secs: None,
            headers: HashMap::new(),
        }
    }
}
