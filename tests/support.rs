use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use contact_webhook::structs::contact_record::ContactRecord;
use serde_json::json;
use warp::http::{HeaderMap, StatusCode};
use warp::Filter;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: String,
}

pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

pub const JANE_DOE_BODY: &str = r#"{"action":"create","record":{"fields":{"FullName":"Jane Doe","City":"Paris","Country":"FR","Mobile":"+33000000","Email":"jane@x.com","HR_ID":"HR42","LastSynced":"2024-01-01T00:00:00Z","NeedsSync":true}}}"#;

pub fn jane_doe() -> ContactRecord {
    ContactRecord {
        full_name: Some(json!("Jane Doe")),
        city: Some(json!("Paris")),
        country: Some(json!("FR")),
        mobile: Some(json!("+33000000")),
        email: Some(json!("jane@x.com")),
        hr_id: Some(json!("HR42")),
        last_synced: Some(json!("2024-01-01T00:00:00Z")),
        needs_sync: Some(json!(true)),
    }
}

/// Starts a local `POST /webhook` endpoint answering every request with `status` and `reply`.
pub fn spawn_endpoint(status: StatusCode, reply: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);

    let route = warp::post()
        .and(warp::path("webhook"))
        .and(warp::path::end())
        .and(warp::header::headers_cloned())
        .and(warp::body::bytes())
        .map(move |headers: HeaderMap, body: warp::hyper::body::Bytes| {
            sink.lock().unwrap().push(CapturedRequest {
                headers,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
            warp::reply::with_status(reply, status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (webhook_url(addr), captured)
}

/// Accepts connections and never writes a byte back.
pub async fn spawn_silent_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    webhook_url(addr)
}

/// A URL on a port nothing listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    webhook_url(addr)
}

fn webhook_url(addr: SocketAddr) -> String {
    format!("http://{addr}/webhook")
}
