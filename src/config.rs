//! 配置：凭据与进程级运行参数。
//!
//! Credentials supplied by the host and process-wide settings read once from
//! the environment.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint used when the host does not configure a `base_url`.
pub const DEFAULT_BASE_URL: &str = "https://edgettsapi.duckcloud.fun/v1";

/// Default upper bound for one synthesis request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Provider credentials, immutable once configured.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// The configured base URL, or [`DEFAULT_BASE_URL`] when none was given.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Parse credentials from the host's JSON credential map.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load credentials from a YAML file (`api_key:` / `base_url:`).
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Process-wide plugin settings, fixed at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginEnv {
    /// Upper bound for every outbound request.
    pub request_timeout: Duration,
    /// Optional proxy applied to all requests.
    pub proxy_url: Option<String>,
    /// Where synthesized audio is written; the system temp dir when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for PluginEnv {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy_url: None,
            output_dir: None,
        }
    }
}

impl PluginEnv {
    /// Read settings from `EDGETTS_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let request_timeout = match env::var("EDGETTS_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = parse_timeout_secs(&raw)?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let proxy_url = env::var("EDGETTS_PROXY_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let output_dir = env::var_os("EDGETTS_OUTPUT_DIR").map(PathBuf::from);
        Ok(Self {
            request_timeout,
            proxy_url,
            output_dir,
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Directory synthesized audio is written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(env::temp_dir)
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        Error::configuration_with_context(
            format!("timeout must be a whole number of seconds: {}", e),
            ErrorContext::new()
                .with_field_path("EDGETTS_HTTP_TIMEOUT_SECS")
                .with_details(format!("got '{}'", raw))
                .with_source("plugin_env"),
        )
    })
}
