pub mod config;
pub mod server_config;
pub mod webhook_config;
