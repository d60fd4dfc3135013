use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::notify_outcome::NotifyOutcome;
use crate::enums::record_source::RecordSource;
use crate::errors::{WebhookError, WebhookResult};
use crate::services::contact_sync_service::ContactSyncService;
use crate::services::memory_contact_sink::InMemoryContactSink;
use crate::services::record_loader::RecordLoader;
use crate::services::webhook_notifier::{self, WebhookNotifier};
use crate::services::webhook_server::WebhookServer;
use crate::structs::config::config::Config;
use crate::structs::contact_record::ContactRecord;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> WebhookResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Send { record, url, touch, fail_on_reject } => {
                self.send_command(record.as_deref(), url.as_deref(), touch, fail_on_reject).await
            }
            Commands::Preview { record, touch } => self.preview_command(record.as_deref(), touch),
            Commands::Validate => self.validate_command(),
            Commands::Serve { host, port } => self.serve_command(host.as_deref(), port).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> WebhookResult<()> {
        log::info!("🚀 Initializing contact-webhook configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to point at your webhook.", path.display());
        log::info!("🔧 Run 'contact-webhook validate' to check your configuration.");
        Ok(())
    }

    async fn send_command(&self, record: Option<&str>, url: Option<&str>, touch: bool, fail_on_reject: bool) -> WebhookResult<()> {
        let config = self.load_config()?;
        let record = Self::load_record(record, touch, &config)?;
        let url = ConfigManager::resolve_webhook_url(&config, url)?;

        let notifier = WebhookNotifier::from_config(&config.webhook, url)?;
        let outcome = notifier.notify(record).await?;

        match outcome {
            NotifyOutcome::Delivered { status } => {
                log::debug!("Delivered with status {status}");
                Ok(())
            }
            rejected if fail_on_reject => rejected.into_result(notifier.url()).map(|_| ()),
            NotifyOutcome::Rejected { status, .. } => {
                log::warn!("⚠️ Webhook refused the record with status {status}");
                Ok(())
            }
        }
    }

    fn preview_command(&self, record: Option<&str>, touch: bool) -> WebhookResult<()> {
        let config = self.load_config()?;
        let record = Self::load_record(record, touch, &config)?;

        println!("{}", webhook_notifier::preview(record)?);
        Ok(())
    }

    fn validate_command(&self) -> WebhookResult<()> {
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if config.webhook.url.is_none() {
                    log::warn!(
                        "⚠️ No webhook.url set; send will need --url or {}",
                        config.webhook.url_env
                    );
                }
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    log::error!("❌ {problem}");
                }
                Err(WebhookError::config_error(
                    &format!("{} problem(s) found in configuration", problems.len()),
                    None,
                    Some("Fix the entries listed above and run validate again"),
                ))
            }
        }
    }

    async fn serve_command(&self, host: Option<&str>, port: Option<u16>) -> WebhookResult<()> {
        let config = self.load_config()?;
        let addr = ConfigManager::resolve_listen_addr(&config, host, port)?;

        let sink = Arc::new(InMemoryContactSink::new());
        let mut server = WebhookServer::new(ContactSyncService::new(sink.clone()));
        server.start(addr)?;
        log::info!("⌨️  Press Ctrl+C to stop");

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| WebhookError::system_error("waiting for Ctrl+C", &e.to_string()))?;

        server.shutdown().await?;
        log::info!("📇 {} contact(s) held at shutdown", sink.len());
        Ok(())
    }

    fn load_config(&self) -> WebhookResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {e}");
            e
        })
    }

    fn load_record(arg: Option<&str>, touch: bool, config: &Config) -> WebhookResult<ContactRecord> {
        let source = RecordSource::from_arg(arg);
        let record = RecordLoader::load(&source, config)?;

        Ok(if touch { record.synced_at(Utc::now()) } else { record })
    }
}
