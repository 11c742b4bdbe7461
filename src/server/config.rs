use super::RequestsLoggingLevel;
use crate::config::{AppConfig, DEFAULT_MAX_BODY_SIZE, DEFAULT_PORT};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub frontend_dir_path: Option<String>,
    /// Served under `/uploads` when set.
    pub uploads_dir_path: Option<String>,
    pub max_body_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: DEFAULT_PORT,
            frontend_dir_path: None,
            uploads_dir_path: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            port: config.port,
            frontend_dir_path: config.frontend_dir_path.clone(),
            uploads_dir_path: config.uploads_dir_path.clone(),
            max_body_size: config.max_body_size,
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        }
    }
}
