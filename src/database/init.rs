// init.rs

use log::info;
use mongodb::{options::ClientOptions, Client, Database};
use thiserror::Error;

use crate::config::AppConfig;

/// Database-related error types
#[derive(Error, Debug)]
pub enum DbError {
    /// Error when the connection string cannot be parsed
    #[error("Failed to parse MONGO_URL: {0}")]
    ParseError(String),

    /// Error when the client cannot be constructed
    #[error("Failed to create client: {0}")]
    ClientCreationError(String),
}

/// Initializes the MongoDB client and selects the configured database.
///
/// The client is created once at startup and shared across all requests;
/// connections are established lazily by the driver.
///
/// # Returns
/// * `Result<(Client, Database), DbError>` - Client handle and database, or an error
pub async fn init_db(config: &AppConfig) -> Result<(Client, Database), DbError> {
    let options = ClientOptions::parse(&config.mongo_url)
        .await
        .map_err(|e| DbError::ParseError(e.to_string()))?;

    let client =
        Client::with_options(options).map_err(|e| DbError::ClientCreationError(e.to_string()))?;
    let db = client.database(&config.db_name);

    info!("✓ Database client initialized for '{}'", config.db_name);
    Ok((client, db))
}
