//! Transactional email composition and SMTP dispatch
//!
//! This module provides:
//! - [`SmtpSettings`]: server, account and sender address, with TLS selection
//! - [`Mailer`]: message composition (`References`, `User-Agent`) and sending
//! - Fixed Askama templates for password reset, verification code and quota
//!   warning emails, wrapped in a shared outer layout
//! - [`EmailSender`]: the transport seam, implemented by [`SmtpBackend`]
//!
//! # Examples
//!
//! ## Sending a verification code
//!
//! ```rust,no_run
//! use hub_mailer::config::MailerConfig;
//! use hub_mailer::email::Mailer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MailerConfig::load(None)?;
//! let mailer = Mailer::smtp(&config)?;
//!
//! mailer.send_verification_code_email("user@example.com", "123456").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Sending a prebuilt email
//!
//! ```rust,no_run
//! use hub_mailer::email::{Email, EmailSender, SmtpBackend, SmtpSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SmtpSettings::new("smtp.example.com", 587, "bot@example.com", "secret", "");
//! let backend = SmtpBackend::new(settings);
//!
//! let email = Email::new()
//!     .to("user@example.com")
//!     .from("bot@example.com")
//!     .subject("Maintenance tonight")
//!     .html("<p>We will be down from 22:00 to 23:00 UTC.</p>");
//!
//! backend.send(email).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod error;
mod mailer;
pub mod notifications;
mod sender;
mod settings;
mod template;

pub use backend::smtp::SmtpBackend;
pub use builder::Email;
pub use error::MailError;
pub use mailer::{Mailer, USER_AGENT};
pub use notifications::{
    send_password_reset_email, send_quota_warning_email, send_verification_code_email,
};
pub use sender::EmailSender;
pub use settings::{SmtpSettings, TlsMode, IMPLICIT_TLS_PORT, SUBMISSION_PORT};
pub use template::{
    EmailTemplate, LayoutTemplate, PasswordResetTemplate, QuotaWarningTemplate,
    VerificationCodeTemplate,
};

#[cfg(test)]
pub use sender::MockEmailSender;
