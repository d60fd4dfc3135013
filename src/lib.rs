//! Forwards contact records to a webhook endpoint as a JSON `create` envelope.
//!
//! [`services::webhook_notifier::WebhookNotifier`] builds the envelope, posts it
//! once and reports the endpoint's answer as a
//! [`enums::notify_outcome::NotifyOutcome`]. Transport failures come back as
//! [`errors::WebhookError::TransportError`].
//!
//! The receiving end lives in [`services::webhook_server::WebhookServer`],
//! which hands each envelope to a [`traits::contact_sink::ContactSink`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
