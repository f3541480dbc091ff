//! SMTP backend for sending emails
//!
//! Uses the `lettre` crate to send emails via SMTP servers. A new transport
//! is built for every message, so each send opens and closes its own
//! connection.

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info, instrument, warn};

use crate::email::{Email, EmailSender, MailError, SmtpSettings, TlsMode};

/// SMTP email backend
///
/// Sends emails via SMTP using the `lettre` crate. The connection security is
/// chosen from the configured port, see [`TlsMode::for_port`].
#[derive(Debug, Clone)]
pub struct SmtpBackend {
    settings: SmtpSettings,
}

impl SmtpBackend {
    /// Create a new SMTP backend with the given settings
    #[must_use]
    pub const fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Settings this backend connects with
    #[must_use]
    pub const fn settings(&self) -> &SmtpSettings {
        &self.settings
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
        address
            .parse()
            .map_err(|_| MailError::InvalidAddress(address.to_string()))
    }

    /// Build lettre Message from Email
    pub(crate) fn build_message(email: &Email) -> Result<Message, MailError> {
        email.validate()?;

        let from_addr = email.from.as_deref().ok_or(MailError::Incomplete("a from address"))?;
        let mut builder = Message::builder().from(Self::parse_mailbox(from_addr)?);

        for to_addr in &email.to {
            builder = builder.to(Self::parse_mailbox(to_addr)?);
        }

        let subject = email.subject.as_deref().ok_or(MailError::Incomplete("a subject"))?;
        builder = builder.subject(subject);

        if let Some(references) = &email.references {
            builder = builder.references(references.clone());
        }

        if let Some(user_agent) = &email.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let html = email.html.clone().ok_or(MailError::Incomplete("an HTML body"))?;

        Ok(builder.header(header::ContentType::TEXT_HTML).body(html)?)
    }

    /// Create SMTP transport from settings
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let credentials = Credentials::new(
            self.settings.username.clone(),
            self.settings.password.clone(),
        );
        let tls_parameters = TlsParameters::new(self.settings.host.clone())?;

        let tls = match self.settings.tls_mode() {
            TlsMode::Implicit => Tls::Wrapper(tls_parameters),
            TlsMode::StartTls => Tls::Required(tls_parameters),
            TlsMode::Opportunistic => Tls::Opportunistic(tls_parameters),
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.settings.host)
            .port(self.settings.port)
            .credentials(credentials)
            .tls(tls)
            .build();

        Ok(transport)
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    #[instrument(
        skip_all,
        fields(
            host = %self.settings.host,
            port = self.settings.port,
            tls = ?self.settings.tls_mode(),
        )
    )]
    async fn send(&self, email: Email) -> Result<(), MailError> {
        let message = Self::build_message(&email)?;
        let transport = self.create_transport()?;

        debug!(to = ?email.to, subject = ?email.subject, "Handing email to SMTP transport");

        if let Err(e) = transport.send(message).await {
            warn!(error = %e, "SMTP delivery failed");
            return Err(e.into());
        }

        info!(to = ?email.to, "Email sent");
        Ok(())
    }
}
