//! Email builder with fluent API
//!
//! Provides a convenient builder pattern for constructing emails.

use serde::{Deserialize, Serialize};

use super::MailError;

/// An email message
///
/// Use the builder pattern to construct emails:
///
/// ```rust
/// use hub_mailer::email::Email;
///
/// let email = Email::new()
///     .to("user@example.com")
///     .from("noreply@myapp.com")
///     .subject("Welcome!")
///     .html("<h1>Welcome to our app!</h1>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Email recipients (To)
    pub to: Vec<String>,

    /// Email sender (From)
    pub from: Option<String>,

    /// Email subject
    pub subject: Option<String>,

    /// HTML body
    pub html: Option<String>,

    /// `References` header value
    pub references: Option<String>,

    /// `User-Agent` header value
    pub user_agent: Option<String>,
}

impl Email {
    /// Create a new empty email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient (To)
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_string());
        self
    }

    /// Set the sender (From)
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the email subject
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    /// Set the `References` header
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hub_mailer::email::Email;
    ///
    /// let email = Email::new()
    ///     .references("<noreply.3f2c@myapp.com>");
    /// ```
    #[must_use]
    pub fn references(mut self, value: &str) -> Self {
        self.references = Some(value.to_string());
        self
    }

    /// Set the `User-Agent` header
    #[must_use]
    pub fn user_agent(mut self, value: &str) -> Self {
        self.user_agent = Some(value.to_string());
        self
    }

    /// Validate the email
    ///
    /// Checks that all required fields are present
    ///
    /// # Errors
    ///
    /// Returns `MailError::Incomplete` if:
    /// - No recipients
    /// - No sender
    /// - No subject
    /// - No HTML body
    pub fn validate(&self) -> Result<(), MailError> {
        if self.to.is_empty() {
            return Err(MailError::Incomplete("at least one recipient"));
        }

        if self.from.is_none() {
            return Err(MailError::Incomplete("a from address"));
        }

        if self.subject.is_none() {
            return Err(MailError::Incomplete("a subject"));
        }

        if self.html.is_none() {
            return Err(MailError::Incomplete("an HTML body"));
        }

        Ok(())
    }
}
