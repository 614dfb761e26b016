use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origin allowed by CORS; any origin is allowed when unset.
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origin = match var("CORS_ORIGIN") {
            Some(value) => Some(HeaderValue::from_str(&value).map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    value,
                }
            })?),
            None => None,
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_origin,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
