use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "contact-webhook";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_WEBHOOK_URL_ENV: &str = "CONTACT_WEBHOOK_URL";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const STDIN_RECORD_ARG: &str = "-";

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const WEBHOOK_ROUTE: &str = "webhook";
pub const CONTACT_ID_PREFIX: &str = "people/c";
