//! hub-mailer: transactional email over SMTP
//!
//! Sends the handful of emails an account system needs (password reset,
//! email verification code, quota warning) through an SMTP server using
//! `lettre`. Message bodies come from fixed Askama templates wrapped in a
//! shared HTML layout.
//!
//! Every send is independent: it composes a message, opens one connection,
//! transmits and closes it. There is no queue, retry or batching; errors are
//! returned to the caller as [`email::MailError`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hub_mailer::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = MailerConfig::load(None)?;
//!     let mailer = Mailer::smtp(&config)?;
//!
//!     mailer
//!         .send_password_reset_email("alice", "alice@example.com", "https://hub.example.com/reset/abc")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod email;
pub mod observability;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::{MailerConfig, SiteSettings, SmtpConfig};
    pub use crate::email::{
        Email, EmailSender, MailError, Mailer, SmtpBackend, SmtpSettings, TlsMode,
    };
}
