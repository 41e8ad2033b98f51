use std::env;
use std::net::IpAddr;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: IpAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST")
            .unwrap_or_else(|_| "127.0.0.1".into())
            .parse::<IpAddr>()
            .map_err(|_| AppError::ConfigError("Invalid HOST".into()))?;

        Ok(Self { port, host })
    }
}
