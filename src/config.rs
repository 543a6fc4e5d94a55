use std::path::PathBuf;

use crate::errors::CustomError;

const DEFAULT_ORIGINS: &[&str] = &["http://localhost:8080", "http://localhost:5173"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Where to write the toolchain export, if anywhere.
    pub export_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| CustomError::ConfigError(format!("Failed to parse PORT: {:?}", raw)))?,
            None => 8080,
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            allowed_origins,
            export_path: lookup("TOOLCHAIN_CONFIG_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }
}
