use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Url;
use crate::config::constants::CONTENT_TYPE_HEADER;
use crate::errors::{WebhookError, WebhookResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Contact Webhook Configuration

[webhook]
# Endpoint that receives the create-record envelope
url = "https://hooks.example.com/webhook"

# Environment variable checked before `url`
url_env = "CONTACT_WEBHOOK_URL"

# Seconds to wait for a response. Leave unset to wait indefinitely.
# timeout_secs = 30

# Extra headers sent with every request. Content-Type is always application/json.
[webhook.headers]
X-Source = "contact-webhook"

# Address `serve` listens on for inbound envelopes
[server]
host = "0.0.0.0"
port = 8080

# Record sent when `send` is run without --record
[record]
FullName = "Jane Doe"
City = "Paris"
Country = "FR"
Mobile = "+33000000"
Email = "jane@x.com"
HR_ID = "HR42"
LastSynced = "2024-01-01T00:00:00Z"
NeedsSync = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads `path`, or the default location when `None`.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> WebhookResult<Config> {
        let explicit = path.is_some();
        let Some(config_path) = path.map(Path::to_path_buf).or_else(ConfigHelper::default_config_path) else {
            return Ok(Config::default());
        };

        if !config_path.exists() {
            if explicit {
                return Err(WebhookError::config_file_error(
                    &config_path.display().to_string(),
                    "file does not exist",
                ));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| WebhookError::config_file_error(&config_path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> WebhookResult<PathBuf> {
        let config_file_path = path
            .map(Path::to_path_buf)
            .or_else(ConfigHelper::default_config_path)
            .ok_or_else(|| WebhookError::system_error("locate home directory", "no home directory found"))?;

        if config_file_path.exists() {
            return Err(WebhookError::config_file_error(
                &config_file_path.display().to_string(),
                "file already exists; refusing to overwrite",
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let webhook = &config.webhook;

        if let Some(url) = &webhook.url {
            if let Err(reason) = Self::check_url(url) {
                errors.push(format!("webhook.url '{url}' is invalid: {reason}"));
            }
        }

        if webhook.url_env.trim().is_empty() {
            errors.push("webhook.url_env must not be empty".to_string());
        }

        if webhook.timeout_secs == Some(0) {
            errors.push("webhook.timeout_secs must be greater than zero; omit it to disable the timeout".to_string());
        }

        let mut header_names: Vec<&String> = webhook.headers.keys().collect();
        header_names.sort();
        for name in header_names {
            if name.eq_ignore_ascii_case(CONTENT_TYPE_HEADER) {
                errors.push(format!("webhook.headers.{name} cannot override the JSON content type"));
                continue;
            }
            if HeaderName::from_bytes(name.as_bytes()).is_err() {
                errors.push(format!("webhook.headers: '{name}' is not a valid header name"));
            }
            if HeaderValue::from_str(&webhook.headers[name]).is_err() {
                errors.push(format!("webhook.headers.{name} has an invalid value"));
            }
        }

        if config.server.host.parse::<IpAddr>().is_err() {
            errors.push(format!("server.host '{}' is not an IP address", config.server.host));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `--url`, then the `url_env` environment variable, then `webhook.url`.
    pub fn resolve_webhook_url(config: &Config, cli_url: Option<&str>) -> WebhookResult<String> {
        let url = cli_url
            .map(ToString::to_string)
            .or_else(|| std::env::var(&config.webhook.url_env).ok().filter(|v| !v.trim().is_empty()))
            .or_else(|| config.webhook.url.clone())
            .ok_or_else(|| {
                WebhookError::config_error(
                    "No webhook URL configured",
                    Some("webhook.url"),
                    Some(&format!(
                        "Pass --url, set {}, or add url under [webhook] in the config file",
                        config.webhook.url_env
                    )),
                )
            })?;

        Self::check_url(&url).map_err(|reason| WebhookError::config_error(&reason, Some("webhook.url"), None))?;
        Ok(url)
    }

    /// `--host`/`--port` override `server.host`/`server.port`.
    pub fn resolve_listen_addr(config: &Config, host: Option<&str>, port: Option<u16>) -> WebhookResult<SocketAddr> {
        let host = host.unwrap_or(&config.server.host);
        let ip: IpAddr = host.parse().map_err(|_| {
            WebhookError::config_error(
                &format!("'{host}' is not an IP address"),
                Some("server.host"),
                Some("Use an address such as 0.0.0.0 or 127.0.0.1"),
            )
        })?;

        Ok(SocketAddr::new(ip, port.unwrap_or(config.server.port)))
    }

    fn check_url(url: &str) -> Result<(), String> {
        let parsed = Url::parse(url).map_err(|e| e.to_string())?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(format!("unsupported scheme '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();

        assert_eq!(config.webhook.url.as_deref(), Some("https://hooks.example.com/webhook"));
        assert_eq!(config.webhook.timeout_secs, None);
        assert_eq!(config.server.port, 8080);
        let record = config.record.as_ref().unwrap();
        assert_eq!(record.get("HR_ID").and_then(toml::Value::as_str), Some("HR42"));
        assert_eq!(record.get("NeedsSync").and_then(toml::Value::as_bool), Some(true));
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn creates_sample_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = ConfigManager::create_sample_config(Some(&path)).unwrap();
        assert_eq!(created, path);

        let loaded = ConfigManager::load(Some(&path)).unwrap();
        assert!(loaded.record.is_some());

        let error = ConfigManager::create_sample_config(Some(&path)).unwrap_err();
        assert!(matches!(error, WebhookError::ConfigurationFileError { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap_err();

        assert!(matches!(error, WebhookError::ConfigurationFileError { .. }));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[webhook\nurl = ").unwrap();

        let error = ConfigManager::load(Some(&path)).unwrap_err();
        assert!(matches!(error, WebhookError::ParseError { .. }));
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut config = Config::default();
        config.webhook.url = Some("ftp://hooks.example.com".to_string());
        config.webhook.url_env = " ".to_string();
        config.webhook.timeout_secs = Some(0);
        config.webhook.headers.insert("Content-Type".to_string(), "text/plain".to_string());
        config.webhook.headers.insert("bad header".to_string(), "x".to_string());
        config.server.host = "localhost".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors[0].contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn cli_url_wins() {
        let mut config = Config::default();
        config.webhook.url = Some("https://config.example.com/webhook".to_string());

        let url = ConfigManager::resolve_webhook_url(&config, Some("http://127.0.0.1:9000/webhook")).unwrap();
        assert_eq!(url, "http://127.0.0.1:9000/webhook");
    }

    #[test]
    fn environment_beats_config_file() {
        let mut config = Config::default();
        config.webhook.url_env = "CONTACT_WEBHOOK_TEST_ENV_BEATS_FILE".to_string();
        config.webhook.url = Some("https://config.example.com/webhook".to_string());

        std::env::set_var("CONTACT_WEBHOOK_TEST_ENV_BEATS_FILE", "https://env.example.com/webhook");
        let url = ConfigManager::resolve_webhook_url(&config, None).unwrap();
        std::env::remove_var("CONTACT_WEBHOOK_TEST_ENV_BEATS_FILE");

        assert_eq!(url, "https://env.example.com/webhook");
    }

    #[test]
    fn missing_url_is_a_configuration_error() {
        let mut config = Config::default();
        config.webhook.url_env = "CONTACT_WEBHOOK_TEST_UNSET".to_string();

        let error = ConfigManager::resolve_webhook_url(&config, None).unwrap_err();
        match error {
            WebhookError::ConfigurationError { field, suggestion, .. } => {
                assert_eq!(field.as_deref(), Some("webhook.url"));
                assert!(suggestion.unwrap().contains("CONTACT_WEBHOOK_TEST_UNSET"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn listen_addr_defaults_and_overrides() {
        let config = Config::default();

        let default = ConfigManager::resolve_listen_addr(&config, None, None).unwrap();
        assert_eq!(default, "0.0.0.0:8080".parse().unwrap());

        let overridden = ConfigManager::resolve_listen_addr(&config, Some("127.0.0.1"), Some(0)).unwrap();
        assert_eq!(overridden, "127.0.0.1:0".parse().unwrap());

        let error = ConfigManager::resolve_listen_addr(&config, Some("not-an-ip"), None).unwrap_err();
        assert!(matches!(error, WebhookError::ConfigurationError { field: Some(ref f), .. } if f == "server.host"));
    }
}
