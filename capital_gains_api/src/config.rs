//! Base URL resolution for the calculate endpoint.

use std::fmt;
use std::str::FromStr;

/// Environment variable holding the base URL in production mode.
pub const BASE_URL_ENV_VAR: &str = "VITE_API_BASE_URL";
/// Base URL used in development mode.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000/api";

/// Which set of defaults to resolve the base URL from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    /// Talks to a backend on localhost.
    Development,
    /// Reads the base URL from [`BASE_URL_ENV_VAR`], with no fallback.
    Production,
}

impl BuildMode {
    /// `Development` for debug builds, `Production` for release builds.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(BuildMode::Development),
            "prod" | "production" => Ok(BuildMode::Production),
            other => Err(format!(
                "unknown build mode '{}', expected development or production",
                other
            )),
        }
    }
}

/// Resolved client configuration. Computed once and handed to
/// [`Client::new`](crate::Client::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    mode: BuildMode,
    base_url: Option<String>,
}

impl ApiConfig {
    /// Resolves the base URL for `mode`, reading variables through `lookup`.
    ///
    /// In production an unset variable leaves the base URL empty; requests
    /// then fail when they are made, not here.
    pub fn resolve<F>(mode: BuildMode, lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let base_url = match mode {
            BuildMode::Production => lookup(BASE_URL_ENV_VAR),
            BuildMode::Development => Some(DEVELOPMENT_BASE_URL.to_string()),
        };
        let config = Self { mode, base_url };
        config.log_resolved();
        config
    }

    /// Resolves against the process environment and the current build mode.
    pub fn from_env() -> Self {
        Self::from_env_in(BuildMode::current())
    }

    /// Resolves against the process environment for an explicit build mode.
    pub fn from_env_in(mode: BuildMode) -> Self {
        Self::resolve(mode, |key| std::env::var(key).ok())
    }

    /// Uses an explicit base URL, skipping environment lookup.
    pub fn with_base_url(mode: BuildMode, base_url: &str) -> Self {
        let config = Self {
            mode,
            base_url: Some(base_url.to_string()),
        };
        config.log_resolved();
        config
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// `{base_url}/calculate`, or `None` when no base URL was resolved.
    pub fn calculate_url(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/calculate", base))
    }

    fn log_resolved(&self) {
        tracing::info!(
            "API_BASE_URL={} ({} mode)",
            self.base_url().unwrap_or("<unset>"),
            self.mode
        );
    }
}
