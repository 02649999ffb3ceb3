use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => parse_max_connections(&value)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            database_max_connections,
        })
    }
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvValue {
        var: "DATABASE_MAX_CONNECTIONS".to_string(),
        reason: reason.to_string(),
    };

    let parsed: u32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("must be a positive integer"))?;

    if parsed == 0 {
        return Err(invalid("must be greater than zero"));
    }

    Ok(parsed)
}
