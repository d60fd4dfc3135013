use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Where `serve` listens for inbound envelopes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_server_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_server_host(),
            port: ConfigHelper::default_server_port(),
        }
    }
}
