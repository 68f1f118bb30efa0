use std::env;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    /// Reads the runtime configuration from the environment. The backing
    /// table name has no usable default; a missing or empty `TABLE_NAME`
    /// fails startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let table_name = env::var("TABLE_NAME").map_err(|_| ConfigError::MissingTableName)?;

        if table_name.is_empty() {
            return Err(ConfigError::MissingTableName);
        }

        Ok(Self { table_name })
    }
}
