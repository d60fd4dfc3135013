use std::path::PathBuf;
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_WEBHOOK_URL_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_url_env() -> String {
        DEFAULT_WEBHOOK_URL_ENV.to_string()
    }

    pub fn default_server_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub const fn default_server_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
