pub mod app_config;
pub mod config;
pub mod interaction;
pub mod site;

use thiserror::Error;

pub use app_config::{AppConfig, ContainerFilterKind, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use interaction::InteractionState;
pub use site::{
    HeritageSite, KeyPolicy, SiteKey, DEFAULT_SUMMARY_CHARS, NO_DESCRIPTION, NO_TITLE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
