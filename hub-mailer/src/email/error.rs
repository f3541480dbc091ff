//! Email error types

use thiserror::Error;

/// Errors that can occur when composing or dispatching emails
#[derive(Debug, Error)]
pub enum MailError {
    /// Required SMTP settings are missing; nothing was sent
    #[error("SMTP is not configured: {0}")]
    Configuration(String),

    /// The transport failed to connect, authenticate or transmit
    #[error("failed to send email: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),

    /// A required part of the message was never set
    #[error("email must have {0}")]
    Incomplete(&'static str),

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled
    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Template rendering error
    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),
}

impl MailError {
    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the caller may reasonably try the same send again later
    ///
    /// Only transport failures qualify; everything else needs a fix to the
    /// configuration or the input first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}
