use serde::{Deserialize, Serialize};
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::webhook_config::WebhookConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub server: ServerConfig,

    /// Inline record used when no `--record` source is given. Kept as raw
    /// TOML so every value reaches the payload with the type it was written in.
    #[serde(default)]
    pub record: Option<toml::Table>,
}
