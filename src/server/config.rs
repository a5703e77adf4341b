use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_SECS: u64 = 86_400;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_secs: match std::env::var("JWT_EXPIRATION_SECS") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: "JWT_EXPIRATION_SECS".to_string(),
                        value,
                    })?,
                Err(_) => DEFAULT_JWT_EXPIRATION_SECS,
            },
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
