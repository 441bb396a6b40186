//! Configuration for the idscan server.
//!
//! Values come from built-in defaults, then an optional TOML file named by
//! `IDSCAN_CONFIG`, then `IDSCAN_*` environment variables (later wins).

use idscan_ocr::OcrBackendKind;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ocr_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub ocr_backend: OcrBackendKind,
    pub tesseract_lang: String,
    pub tessdata_path: Option<String>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 6001,
            ocr_timeout_secs: 30,
            max_upload_bytes: 10 * 1024 * 1024,
            ocr_backend: OcrBackendKind::Mock,
            tesseract_lang: "eng".to_string(),
            tessdata_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Defaults → `IDSCAN_CONFIG` file → environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("IDSCAN_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `IDSCAN_*` overrides. `lookup` is `std::env::var` in production;
    /// tests pass a map so the process environment is left alone.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("IDSCAN_HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("IDSCAN_PORT") {
            self.port = parse("IDSCAN_PORT", &v)?;
        }
        if let Some(v) = lookup("IDSCAN_OCR_TIMEOUT_SECS") {
            self.ocr_timeout_secs = parse("IDSCAN_OCR_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("IDSCAN_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = parse("IDSCAN_MAX_UPLOAD_BYTES", &v)?;
        }
        if let Some(v) = lookup("IDSCAN_OCR_BACKEND") {
            self.ocr_backend = parse("IDSCAN_OCR_BACKEND", &v)?;
        }
        if let Some(v) = lookup("IDSCAN_TESSERACT_LANG") {
            self.tesseract_lang = v;
        }
        if let Some(v) = lookup("IDSCAN_TESSDATA_PATH") {
            self.tessdata_path = Some(v);
        }
        if let Some(v) = lookup("IDSCAN_LOG_FORMAT") {
            self.log_format = parse("IDSCAN_LOG_FORMAT", &v)?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = parse("host", &self.host)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn ocr_timeout(&self) -> Duration {
        Duration::from_secs(self.ocr_timeout_secs)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
