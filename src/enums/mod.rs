pub mod commands;
pub mod notify_outcome;
pub mod record_source;
pub mod sync_action;
pub mod sync_outcome;
pub mod webhook_action;
