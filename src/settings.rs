use std::net::SocketAddr;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// sqlx connection url, the file is created when missing
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Defaults overridden by `TRIVIA_*` environment variables, `.env` included.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_environment(Environment::with_prefix("TRIVIA"))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "sqlite:trivia.db")?
            .set_default("bind_addr", "0.0.0.0:8080")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_without_environment() {
        let env = Environment::with_prefix("TRIVIA").source(Some(HashMap::new()));
        let settings = Settings::from_environment(env).unwrap();
        assert_eq!(settings.database_url, "sqlite:trivia.db");
        assert_eq!(settings.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            ("TRIVIA_DATABASE_URL".to_owned(), "sqlite::memory:".to_owned()),
            ("TRIVIA_BIND_ADDR".to_owned(), "127.0.0.1:5000".to_owned()),
        ]);
        let env = Environment::with_prefix("TRIVIA").source(Some(vars));
        let settings = Settings::from_environment(env).unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.bind_addr.port(), 5000);
    }
}
