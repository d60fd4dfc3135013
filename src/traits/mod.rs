pub mod contact_sink;
pub mod webhook_transport;
