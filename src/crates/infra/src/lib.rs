pub mod repository;

pub mod config;
pub use config::{AppConfigImpl, LogConfig};
