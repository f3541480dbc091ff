//! Email sender trait abstraction
//!
//! This module defines the `EmailSender` trait that transports implement.

use async_trait::async_trait;

use super::{Email, MailError};

/// Trait for sending emails
///
/// Implemented by [`SmtpBackend`](super::SmtpBackend); tests substitute a
/// recording or mocked sender so no connection is made.
///
/// # Examples
///
/// ```rust,no_run
/// use hub_mailer::email::{Email, EmailSender, SmtpBackend, SmtpSettings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SmtpSettings::new("smtp.example.com", 465, "bot@example.com", "secret", "");
/// let sender = SmtpBackend::new(settings);
///
/// let email = Email::new()
///     .to("user@example.com")
///     .from("bot@example.com")
///     .subject("Hello!")
///     .html("<p>Hello, World!</p>");
///
/// sender.send(email).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Errors
    ///
    /// Returns `MailError` if the email is invalid or cannot be delivered
    async fn send(&self, email: Email) -> Result<(), MailError>;
}
