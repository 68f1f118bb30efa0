use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("DynamoDB scan failed: {0}")]
    Scan(String),

    #[error("DynamoDB put failed: {0}")]
    Put(String),

    #[error("Item conversion failed: {0}")]
    Conversion(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TABLE_NAME environment variable is not set")]
    MissingTableName,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: title, date, and description are required")]
    MissingFields,
}
