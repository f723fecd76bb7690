use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A persisted contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Builds the full record from a validated submission, generating
    /// the id and creation timestamp server-side
    pub fn new(input: ContactMessageCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            timestamp: Utc::now(),
        }
    }
}
