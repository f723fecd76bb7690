// config.rs

use dotenv::dotenv;
use std::env;
use thiserror::Error;

const DEFAULT_MAILGUN_DOMAIN: &str = "sandbox9876543210abcdef1234567890abcde.mailgun.org";

/// Configuration-related error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when a required environment variable is not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Process configuration loaded once at startup and injected into handlers
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string
    pub mongo_url: String,
    /// Name of the database holding the contact collection
    pub db_name: String,
    /// Mailgun API key (empty string makes every send fail, which is logged)
    pub mailgun_api_key: String,
    /// Mailgun sending domain
    pub mailgun_domain: String,
    /// Address notification emails are sent from
    pub sender_email: String,
    /// Address notification emails are delivered to
    pub receiver_email: String,
    /// Allowed cross-origin request origins, or a single "*" entry
    pub cors_origins: Vec<String>,
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::EnvVarNotFound(name.to_string()))
}

impl AppConfig {
    /// Loads configuration from the environment (reading `.env` first if present)
    ///
    /// # Returns
    /// * `Result<AppConfig, ConfigError>` - Loaded configuration or an error
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            mongo_url: require_var("MONGO_URL")?,
            db_name: require_var("DB_NAME")?,
            mailgun_api_key: env::var("MAILGUN_API_KEY").unwrap_or_default(),
            mailgun_domain: env::var("MAILGUN_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_MAILGUN_DOMAIN.to_string()),
            sender_email: env::var("SENDER_EMAIL").unwrap_or_default(),
            receiver_email: env::var("RECEIVER_EMAIL").unwrap_or_default(),
            cors_origins,
        })
    }
}
