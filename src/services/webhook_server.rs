use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::WEBHOOK_ROUTE;
use crate::errors::{WebhookError, WebhookResult};
use crate::services::contact_sync_service::ContactSyncService;
use crate::structs::inbound_envelope::InboundEnvelope;

/// HTTP front of the receiver: `GET /` and `POST /webhook`.
pub struct WebhookServer {
    service: Arc<ContactSyncService>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl WebhookServer {
    pub fn new(service: ContactSyncService) -> Self {
        Self {
            service: Arc::new(service),
            addr: None,
            shutdown_tx: None,
            task: None,
        }
    }

    /// Binds `addr` and serves in the background. Port 0 picks a free port;
    /// the address actually bound is returned.
    pub fn start(&mut self, addr: SocketAddr) -> WebhookResult<SocketAddr> {
        let service = Arc::clone(&self.service);
        let service_filter = warp::any().map(move || Arc::clone(&service));

        let home = warp::path::end()
            .and(warp::get())
            .map(|| "contact-webhook receiver is running!");

        let webhook = warp::path(WEBHOOK_ROUTE)
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(service_filter)
            .and_then(webhook_handler);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (bound, server) = warp::serve(home.or(webhook))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| WebhookError::system_error(&format!("binding {addr}"), &e.to_string()))?;

        self.shutdown_tx = Some(shutdown_tx);
        self.task = Some(tokio::spawn(server));
        self.addr = Some(bound);

        log::info!("🌐 Webhook receiver listening on http://{bound}/{WEBHOOK_ROUTE}");
        Ok(bound)
    }

    pub const fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(&mut self) -> WebhookResult<()> {
        log::info!("🛑 Shutting down webhook receiver...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|()| WebhookError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| WebhookError::system_error("shutdown", &e.to_string()))?;
        }

        self.addr = None;
        log::info!("✅ Webhook receiver shutdown complete");
        Ok(())
    }
}

async fn webhook_handler(
    envelope: InboundEnvelope,
    service: Arc<ContactSyncService>,
) -> Result<impl warp::Reply, Infallible> {
    match service.handle(envelope).await {
        Ok(outcome) => {
            log::debug!("Envelope applied: {outcome:?}");
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "status": "success" })),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            log::error!("❌ Error: {e}");
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "status": "error", "message": e.to_string() })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
