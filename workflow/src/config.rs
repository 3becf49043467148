use url::Url;

/// Environment variable naming the detection service base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DETECT_PATH: &str = "/api/detect";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid backend URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported backend URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    base_url: Url,
}

impl DetectorConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self { base_url: parsed }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Builds the config from an optional raw value. Unset or blank values
    /// fall back to [`DEFAULT_BASE_URL`].
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Self::new(v),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Reads `BACKEND_URL` from the process environment, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let value = std::env::var(BACKEND_URL_VAR).ok();
        Self::from_value(value.as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn detect_endpoint(&self) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), DETECT_PATH)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default backend URL is valid"),
        }
    }
}
