use acme_types::ContentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse window.__APP_CONFIG: {0}")]
    Parse(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}
