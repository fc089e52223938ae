use pricebook_core::AppError;

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `PRICEBOOK_HOST` (optional, defaults to `0.0.0.0`)
    /// - `PRICEBOOK_PORT` (optional, defaults to 8000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("PRICEBOOK_HOST").ok(),
            std::env::var("PRICEBOOK_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match port {
            None => defaults.port,
            Some(raw) => {
                let parsed: u16 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid PRICEBOOK_PORT '{raw}': must be an integer between 1 and 65535"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "PRICEBOOK_PORT must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self {
            host: host.unwrap_or(defaults.host),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
