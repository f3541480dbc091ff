//! Message composition and dispatch
//!
//! [`Mailer`] turns a recipient, subject and HTML body into an [`Email`]
//! carrying the sender address, a fresh `References` value and the
//! `User-Agent` header, and hands it to an [`EmailSender`].

use tracing::debug;

use super::{
    Email, EmailSender, EmailTemplate, LayoutTemplate, MailError, SmtpBackend, SmtpSettings,
};
use crate::config::{MailerConfig, SiteSettings};

/// Value of the `User-Agent` header on every outgoing message
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Composes messages from fixed settings and dispatches them through `S`
///
/// The mailer is stateless between calls: settings are read-only and the
/// sender decides how each message reaches the server.
#[derive(Debug, Clone)]
pub struct Mailer<S> {
    settings: SmtpSettings,
    site: SiteSettings,
    sender: S,
}

impl Mailer<SmtpBackend> {
    /// Create an SMTP mailer from configuration
    ///
    /// # Errors
    ///
    /// Returns `MailError::Configuration` if any required SMTP setting is
    /// unset.
    pub fn smtp(config: &MailerConfig) -> Result<Self, MailError> {
        let settings = SmtpSettings::from_config(&config.smtp)?;
        let backend = SmtpBackend::new(settings.clone());
        Ok(Self::new(settings, config.site.clone(), backend))
    }
}

impl<S: EmailSender> Mailer<S> {
    /// Create a mailer from explicit settings and a sender
    #[must_use]
    pub const fn new(settings: SmtpSettings, site: SiteSettings, sender: S) -> Self {
        Self {
            settings,
            site,
            sender,
        }
    }

    /// Create a mailer from configuration with a custom sender
    ///
    /// # Errors
    ///
    /// Returns `MailError::Configuration` if any required SMTP setting is
    /// unset. The sender is not touched in that case.
    pub fn from_config(config: &MailerConfig, sender: S) -> Result<Self, MailError> {
        let settings = SmtpSettings::from_config(&config.smtp)?;
        Ok(Self::new(settings, config.site.clone(), sender))
    }

    /// SMTP settings messages are sent with
    #[must_use]
    pub const fn settings(&self) -> &SmtpSettings {
        &self.settings
    }

    /// Site details used by the templates
    #[must_use]
    pub const fn site(&self) -> &SiteSettings {
        &self.site
    }

    /// Underlying sender
    #[must_use]
    pub const fn sender(&self) -> &S {
        &self.sender
    }

    /// Compose the message [`send`](Self::send) would dispatch
    ///
    /// # Errors
    ///
    /// Returns `MailError::InvalidAddress` if the sender address has no `@`.
    pub fn compose(&self, to: &str, subject: &str, html_body: &str) -> Result<Email, MailError> {
        let references = self.settings.references()?;

        Ok(Email::new()
            .from(&self.settings.from)
            .to(to)
            .subject(subject)
            .references(&references)
            .user_agent(USER_AGENT)
            .html(html_body))
    }

    /// Send an HTML email to a single recipient
    ///
    /// # Errors
    ///
    /// Returns `MailError::Delivery` if the transport fails, or an address
    /// error if the message cannot be built.
    pub async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let email = self.compose(to, subject, html_body)?;
        debug!(to, subject, "Dispatching email");
        self.sender.send(email).await
    }

    /// Wrap `content` in the outer layout and send it
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send), plus `MailError::Template` if the layout
    /// fails to render.
    pub async fn render(&self, to: &str, subject: &str, content: &str) -> Result<(), MailError> {
        let body = LayoutTemplate {
            system_name: &self.site.system_name,
            content,
        }
        .render_html()?;

        self.send(to, subject, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MockEmailSender;
    use crate::testing::RecordingSender;

    fn settings() -> SmtpSettings {
        SmtpSettings::new("smtp.example.com", 465, "bot@example.com", "secret", "noreply@hub.example")
    }

    fn mailer() -> Mailer<RecordingSender> {
        Mailer::new(settings(), SiteSettings::default(), RecordingSender::new())
    }

    #[test]
    fn test_user_agent_names_crate_and_version() {
        assert!(USER_AGENT.starts_with("hub-mailer/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_compose_sets_all_headers() {
        let email = mailer()
            .compose("user@example.com", "Hello", "<p>hi</p>")
            .unwrap();

        assert_eq!(email.from.as_deref(), Some("noreply@hub.example"));
        assert_eq!(email.to, vec!["user@example.com"]);
        assert_eq!(email.subject.as_deref(), Some("Hello"));
        assert_eq!(email.html.as_deref(), Some("<p>hi</p>"));
        assert_eq!(email.user_agent.as_deref(), Some(USER_AGENT));

        let references = email.references.unwrap();
        assert!(references.starts_with("<noreply."));
        assert!(references.ends_with("@hub.example>"));
    }

    #[tokio::test]
    async fn test_send_passes_body_through() {
        let mailer = mailer();
        mailer
            .send("user@example.com", "Hello", "<p>raw body</p>")
            .await
            .unwrap();

        let sent = mailer.sender().last_sent().unwrap();
        assert_eq!(sent.html.as_deref(), Some("<p>raw body</p>"));
    }

    #[tokio::test]
    async fn test_render_wraps_in_layout() {
        let mailer = Mailer::new(
            settings(),
            SiteSettings {
                system_name: "Acme Hub".to_string(),
                ..SiteSettings::default()
            },
            RecordingSender::new(),
        );
        mailer
            .render("user@example.com", "Hello", "<p>fragment</p>")
            .await
            .unwrap();

        let html = mailer.sender().last_sent().unwrap().html.unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>fragment</p>"));
        assert!(html.contains("Acme Hub"));
    }

    #[tokio::test]
    async fn test_send_without_at_in_from_never_reaches_sender() {
        let mut sender = MockEmailSender::new();
        sender.expect_send().never();

        let settings = SmtpSettings::new("smtp.example.com", 465, "bot", "secret", "");
        let mailer = Mailer::new(settings, SiteSettings::default(), sender);

        let result = mailer.send("user@example.com", "Hello", "<p>hi</p>").await;
        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_sender_error_is_propagated() {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(1).returning(|_| {
            Err(MailError::config("simulated failure"))
        });

        let mailer = Mailer::new(settings(), SiteSettings::default(), sender);
        let result = mailer.send("user@example.com", "Hello", "<p>hi</p>").await;

        assert!(matches!(result, Err(MailError::Configuration(msg)) if msg == "simulated failure"));
    }

    #[test]
    fn test_smtp_mailer_requires_configuration() {
        let result = Mailer::smtp(&MailerConfig::default());
        assert!(matches!(result, Err(MailError::Configuration(_))));
    }
}
