//! Transactional emails: password reset, verification code, quota warning
//!
//! Each notification renders one fixed fragment and sends it through
//! [`Mailer::render`]. The free functions build an SMTP mailer from the
//! configuration first, so an incomplete SMTP section fails with
//! [`MailError::Configuration`] before any connection is attempted.

use super::{
    EmailSender, EmailTemplate, MailError, Mailer, PasswordResetTemplate, QuotaWarningTemplate,
    VerificationCodeTemplate,
};
use crate::config::MailerConfig;

/// Subject of a quota warning
#[must_use]
pub const fn quota_warning_subject(no_more_quota: bool) -> &'static str {
    if no_more_quota {
        "Your quota has been used up"
    } else {
        "Your quota is running low"
    }
}

impl<S: EmailSender> Mailer<S> {
    /// Send a password reset link to `email`
    ///
    /// # Errors
    ///
    /// Returns `MailError` if rendering or delivery fails
    pub async fn send_password_reset_email(
        &self,
        user_name: &str,
        email: &str,
        link: &str,
    ) -> Result<(), MailError> {
        let content = PasswordResetTemplate {
            user_name,
            link,
            valid_minutes: self.site().verification_valid_minutes,
        }
        .render_html()?;
        let subject = format!("{} password reset", self.site().system_name);

        self.render(email, &subject, &content).await
    }

    /// Send an email address verification code to `email`
    ///
    /// # Errors
    ///
    /// Returns `MailError` if rendering or delivery fails
    pub async fn send_verification_code_email(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), MailError> {
        let content = VerificationCodeTemplate {
            code,
            valid_minutes: self.site().verification_valid_minutes,
        }
        .render_html()?;
        let subject = format!("{} email verification", self.site().system_name);

        self.render(email, &subject, &content).await
    }

    /// Warn `email` that its quota is low, or gone when `no_more_quota`
    ///
    /// # Errors
    ///
    /// Returns `MailError` if rendering or delivery fails
    pub async fn send_quota_warning_email(
        &self,
        user_name: &str,
        email: &str,
        quota: i64,
        no_more_quota: bool,
    ) -> Result<(), MailError> {
        let subject = quota_warning_subject(no_more_quota);
        let top_up_link = self.site().top_up_link();
        let content = QuotaWarningTemplate {
            user_name,
            notice: subject,
            quota,
            top_up_link: &top_up_link,
        }
        .render_html()?;

        self.render(email, subject, &content).await
    }
}

/// Send a password reset link over the configured SMTP server
///
/// # Errors
///
/// Returns `MailError::Configuration` if SMTP is not configured, otherwise
/// any rendering or delivery error.
pub async fn send_password_reset_email(
    config: &MailerConfig,
    user_name: &str,
    email: &str,
    link: &str,
) -> Result<(), MailError> {
    Mailer::smtp(config)?
        .send_password_reset_email(user_name, email, link)
        .await
}

/// Send an email verification code over the configured SMTP server
///
/// # Errors
///
/// Returns `MailError::Configuration` if SMTP is not configured, otherwise
/// any rendering or delivery error.
pub async fn send_verification_code_email(
    config: &MailerConfig,
    email: &str,
    code: &str,
) -> Result<(), MailError> {
    Mailer::smtp(config)?
        .send_verification_code_email(email, code)
        .await
}

/// Send a quota warning over the configured SMTP server
///
/// # Errors
///
/// Returns `MailError::Configuration` if SMTP is not configured, otherwise
/// any rendering or delivery error.
pub async fn send_quota_warning_email(
    config: &MailerConfig,
    user_name: &str,
    email: &str,
    quota: i64,
    no_more_quota: bool,
) -> Result<(), MailError> {
    Mailer::smtp(config)?
        .send_quota_warning_email(user_name, email, quota, no_more_quota)
        .await
}
