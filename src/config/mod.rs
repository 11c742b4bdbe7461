mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "data/catalog.json";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_SIZE: usize = 50 * 1024 * 1024;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_file: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub uploads_dir_path: Option<String>,
    pub max_body_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub uploads_dir_path: Option<String>,
    pub max_body_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_file = file
            .data_file
            .map(PathBuf::from)
            .or_else(|| cli.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        if data_file.is_dir() {
            bail!("data_file points to a directory: {:?}", data_file);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(path) = &frontend_dir_path {
            ensure_dir(path, "frontend_dir_path")?;
        }

        let uploads_dir_path = file
            .uploads_dir_path
            .or_else(|| cli.uploads_dir_path.clone());
        if let Some(path) = &uploads_dir_path {
            ensure_dir(path, "uploads_dir_path")?;
        }

        let max_body_size = file.max_body_size.unwrap_or(cli.max_body_size);
        if max_body_size == 0 {
            bail!("max_body_size must be greater than zero");
        }

        let cors_allowed_origins = file
            .cors_allowed_origins
            .unwrap_or_else(|| cli.cors_allowed_origins.clone());

        Ok(Self {
            data_file,
            port,
            logging_level,
            frontend_dir_path,
            uploads_dir_path,
            max_body_size,
            cors_allowed_origins,
        })
    }
}

fn ensure_dir(path: &str, field: &str) -> Result<()> {
    let path_buf = PathBuf::from(path);
    if !path_buf.exists() {
        bail!("{} does not exist: {:?}", field, path_buf);
    }
    if !path_buf.is_dir() {
        bail!("{} is not a directory: {:?}", field, path_buf);
    }
    Ok(())
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
