//! Server configuration read from the process environment.

pub const DEFAULT_MODEL: &str = "models/gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// `None` when `GOOGLE_API_KEY` is unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub port: u16,
    pub static_dir: String,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// - `GOOGLE_API_KEY`: provider credential (absence is reported per request)
    /// - `GEMINI_MODEL`: defaults to `models/gemini-2.0-flash`
    /// - `GEMINI_BASE_URL`: defaults to the public v1beta endpoint
    /// - `PORT`: defaults to 3000
    /// - `STATIC_DIR`: defaults to `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty());
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            provider: ProviderConfig { api_key, model, base_url },
            port,
            static_dir,
        })
    }
}
