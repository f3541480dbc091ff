//! SMTP account settings
//!
//! [`SmtpSettings`] is the read-only value every send works from. It is built
//! either directly with [`SmtpSettings::new`] or from the layered
//! configuration with [`SmtpSettings::from_config`], which refuses to produce
//! a value while any required field is unset.

use uuid::Uuid;

use super::MailError;
use crate::config::SmtpConfig;

/// Port conventionally used for SMTP over implicit TLS (SMTPS)
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// Port conventionally used for mail submission with STARTTLS
pub const SUBMISSION_PORT: u16 = 587;

/// How the transport secures the connection to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS handshake immediately after connecting
    Implicit,

    /// Plain connection upgraded with STARTTLS; fails if the server refuses
    StartTls,

    /// STARTTLS when the server offers it, plaintext otherwise
    Opportunistic,
}

impl TlsMode {
    /// Select the TLS mode conventionally associated with `port`
    ///
    /// ```rust
    /// use hub_mailer::email::TlsMode;
    ///
    /// assert_eq!(TlsMode::for_port(465), TlsMode::Implicit);
    /// assert_eq!(TlsMode::for_port(587), TlsMode::StartTls);
    /// assert_eq!(TlsMode::for_port(25), TlsMode::Opportunistic);
    /// ```
    #[must_use]
    pub const fn for_port(port: u16) -> Self {
        match port {
            IMPLICIT_TLS_PORT => Self::Implicit,
            SUBMISSION_PORT => Self::StartTls,
            _ => Self::Opportunistic,
        }
    }
}

/// SMTP server and account used to send mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password or token
    pub password: String,

    /// Sender address; the username when not given explicitly
    pub from: String,
}

impl SmtpSettings {
    /// Create settings, falling back to `username` when `from` is blank
    ///
    /// Host and port are taken as given.
    ///
    /// ```rust
    /// use hub_mailer::email::SmtpSettings;
    ///
    /// let settings = SmtpSettings::new("smtp.example.com", 587, "bot@example.com", "secret", "");
    /// assert_eq!(settings.from, "bot@example.com");
    /// ```
    #[must_use]
    pub fn new(host: &str, port: u16, username: &str, password: &str, from: &str) -> Self {
        let from = if from.trim().is_empty() { username } else { from };

        Self {
            host: host.to_string(),
            port,
            username: username.to_string(),
            password: password.to_string(),
            from: from.to_string(),
        }
    }

    /// Build settings from configuration
    ///
    /// # Errors
    ///
    /// Returns `MailError::Configuration` if any of host, port, account or
    /// token is unset.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let missing: Vec<&str> = [
            ("host", config.host.is_empty()),
            ("port", config.port == 0),
            ("account", config.account.is_empty()),
            ("token", config.token.is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, unset)| unset.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(MailError::config(format!(
                "missing smtp {}",
                missing.join(", ")
            )));
        }

        Ok(Self::new(
            &config.host,
            config.port,
            &config.account,
            &config.token,
            &config.from,
        ))
    }

    /// TLS mode implied by the configured port
    #[must_use]
    pub const fn tls_mode(&self) -> TlsMode {
        TlsMode::for_port(self.port)
    }

    /// Generate a fresh `References` header value
    ///
    /// The value has the form `<local.uuid@domain>` where `local@domain` is
    /// the sender address, so every message starts its own thread.
    ///
    /// # Errors
    ///
    /// Returns `MailError::InvalidAddress` if the sender address has no `@`.
    pub fn references(&self) -> Result<String, MailError> {
        let (local, domain) = self
            .from
            .split_once('@')
            .ok_or_else(|| MailError::InvalidAddress(self.from.clone()))?;

        Ok(format!("<{local}.{}@{domain}>", Uuid::new_v4().simple()))
    }
}
