//! Client configuration.

use std::env;
use std::fmt;

use crate::error::ApiError;

/// Environment variable holding the API base URL.
const ENV_BASE_URL: &str = "RECIPEZ_BASE_URL";
/// Environment variable holding the JWT bearer token.
const ENV_JWT_TOKEN: &str = "RECIPEZ_JWT_TOKEN";

/// Connection settings for the Recipez API.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: String,
}

impl ClientConfig {
    /// Creates a configuration from an explicit base URL and token.
    ///
    /// The base URL must use the `http` or `https` scheme; a trailing
    /// slash is stripped so paths can always start with `/`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let token = token.into();

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if token.trim().is_empty() {
            return Err(ApiError::Config("JWT token must not be empty".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Creates a configuration from `RECIPEZ_BASE_URL` and
    /// `RECIPEZ_JWT_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var(ENV_BASE_URL)
            .map_err(|_| ApiError::Config(format!("{ENV_BASE_URL} is not set")))?;
        let token = env::var(ENV_JWT_TOKEN)
            .map_err(|_| ApiError::Config(format!("{ENV_JWT_TOKEN} is not set")))?;

        Self::new(base_url, token)
    }

    /// Returns the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for ClientConfig {
    // Keeps the token out of logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests
    // that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("https://api.recipez.app/", "jwt-token").unwrap();
        assert_eq!(config.base_url(), "https://api.recipez.app");
    }

    #[test]
    fn test_new_rejects_bad_scheme() {
        let err = ClientConfig::new("ftp://api.recipez.app", "jwt-token").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let err = ClientConfig::new("not a url", "jwt-token").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let err = ClientConfig::new("https://api.recipez.app", "   ").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            env::set_var(ENV_BASE_URL, "http://localhost:8000");
            env::set_var(ENV_JWT_TOKEN, "secret");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.token(), "secret");

        unsafe {
            env::remove_var(ENV_BASE_URL);
            env::remove_var(ENV_JWT_TOKEN);
        }
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("https://api.recipez.app", "super-secret").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }
}
