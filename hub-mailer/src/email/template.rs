//! Askama templates for the transactional emails
//!
//! Every message body is one of the fragment templates below, wrapped in
//! [`LayoutTemplate`]. The templates are compiled with `escape = "none"`:
//! values are substituted verbatim, so a caller-supplied name containing
//! markup ends up as markup in the message.

use askama::Template;

use super::MailError;

/// Trait for the HTML fragments placed inside the outer layout
///
/// Implemented for every fragment template; the default method renders it
/// and maps askama failures to [`MailError::Template`].
pub trait EmailTemplate: Template {
    /// Render the fragment to HTML
    ///
    /// # Errors
    ///
    /// Returns `MailError::Template` if the template fails to render
    fn render_html(&self) -> Result<String, MailError> {
        Ok(self.render()?)
    }
}

/// Outer HTML document every email body is wrapped in
#[derive(Template)]
#[template(path = "emails/layout.html", escape = "none")]
pub struct LayoutTemplate<'a> {
    /// Display name shown in the header and footer
    pub system_name: &'a str,
    /// Rendered fragment
    pub content: &'a str,
}

impl EmailTemplate for LayoutTemplate<'_> {}

/// Password reset link
#[derive(Template)]
#[template(path = "emails/password_reset.html", escape = "none")]
pub struct PasswordResetTemplate<'a> {
    pub user_name: &'a str,
    pub link: &'a str,
    pub valid_minutes: u32,
}

impl EmailTemplate for PasswordResetTemplate<'_> {}

/// Email address verification code
#[derive(Template)]
#[template(path = "emails/verification_code.html", escape = "none")]
pub struct VerificationCodeTemplate<'a> {
    pub code: &'a str,
    pub valid_minutes: u32,
}

impl EmailTemplate for VerificationCodeTemplate<'_> {}

/// Low or exhausted quota notice with a top-up link
#[derive(Template)]
#[template(path = "emails/quota_warning.html", escape = "none")]
pub struct QuotaWarningTemplate<'a> {
    pub user_name: &'a str,
    /// Headline sentence, the same text as the subject
    pub notice: &'a str,
    pub quota: i64,
    pub top_up_link: &'a str,
}

impl EmailTemplate for QuotaWarningTemplate<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_content() {
        let html = LayoutTemplate {
            system_name: "Hub",
            content: "<p>inner</p>",
        }
        .render_html()
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>inner</p>"));
        assert!(html.contains("<title>Hub</title>"));
    }

    #[test]
    fn test_verification_code_fragment() {
        let html = VerificationCodeTemplate {
            code: "123456",
            valid_minutes: 10,
        }
        .render_html()
        .unwrap();

        assert!(html.contains("<strong>123456</strong>"));
        assert!(html.contains("valid for 10 minutes"));
    }

    #[test]
    fn test_password_reset_fragment_repeats_link() {
        let html = PasswordResetTemplate {
            user_name: "alice",
            link: "https://hub.example.com/reset?token=abc",
            valid_minutes: 30,
        }
        .render_html()
        .unwrap();

        assert_eq!(html.matches("https://hub.example.com/reset?token=abc").count(), 2);
        assert!(html.contains("Hi <strong>alice,</strong>"));
        assert!(html.contains("valid for 30 minutes"));
    }

    #[test]
    fn test_quota_warning_fragment() {
        let html = QuotaWarningTemplate {
            user_name: "bob",
            notice: "Your quota is running low",
            quota: -25,
            top_up_link: "https://hub.example.com/topup",
        }
        .render_html()
        .unwrap();

        assert!(html.contains("Your quota is running low. Your remaining quota is -25."));
        assert_eq!(html.matches("https://hub.example.com/topup").count(), 2);
    }

    // Substitution is verbatim; markup in user data is not escaped.
    #[test]
    fn test_values_are_not_html_escaped() {
        let html = PasswordResetTemplate {
            user_name: "<b>Tom & Jerry</b>",
            link: "https://hub.example.com/reset?a=1&b=2",
            valid_minutes: 10,
        }
        .render_html()
        .unwrap();

        assert!(html.contains("<b>Tom & Jerry</b>"));
        assert!(!html.contains("&lt;"));
        assert!(!html.contains("&amp;"));
        assert!(html.contains("?a=1&b=2"));
    }
}
