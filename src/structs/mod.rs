pub mod cli;
pub mod config;
pub mod contact;
pub mod contact_record;
pub mod inbound_envelope;
pub mod transport_response;
pub mod webhook_envelope;
