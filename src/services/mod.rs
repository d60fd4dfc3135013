pub mod contact_sync_service;
pub mod memory_contact_sink;
pub mod record_loader;
pub mod reqwest_transport;
pub mod webhook_notifier;
pub mod webhook_server;
