//! Testing utilities for the email system
//!
//! [`RecordingSender`] captures emails in memory instead of sending them.
//! For expectation-style tests use the mockall-generated
//! [`MockEmailSender`](crate::email::MockEmailSender).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::email::{Email, EmailSender, MailError};

/// Sender that records every valid email it is given
#[derive(Debug, Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingSender {
    /// Create a new recording sender
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of emails sent
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Get all sent emails
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    /// Get the last sent email
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        email.validate()?;
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_sender() {
        let sender = RecordingSender::new();

        let email = Email::new()
            .to("user@example.com")
            .from("noreply@myapp.com")
            .subject("Test")
            .html("<p>Hello</p>");

        sender.send(email.clone()).await.unwrap();

        assert_eq!(sender.sent_count(), 1);
        assert_eq!(sender.last_sent(), Some(email));
    }

    #[tokio::test]
    async fn test_recording_sender_rejects_invalid_email() {
        let sender = RecordingSender::new();

        let email = Email::new()
            .from("noreply@myapp.com")
            .subject("Test")
            .html("<p>Hello</p>");

        assert!(sender.send(email).await.is_err());
        assert_eq!(sender.sent_count(), 0);
    }
}
