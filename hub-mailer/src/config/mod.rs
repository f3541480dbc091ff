//! Configuration management for hub-mailer
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `HUB_MAILER_` prefix, `__`
//!    between section and key)
//! 2. The TOML file passed to [`MailerConfig::load`], or `./hub-mailer.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! Nothing here is validated. Missing SMTP values are reported when a mailer
//! is built from the configuration, see
//! [`SmtpSettings::from_config`](crate::email::SmtpSettings::from_config).
//!
//! # Example Configuration
//!
//! ```toml
//! # hub-mailer.toml
//! [smtp]
//! host = "smtp.example.com"
//! port = 465
//! account = "bot@example.com"
//! token = "app-password"
//! from = "noreply@example.com"
//!
//! [site]
//! system_name = "Example Hub"
//! server_address = "https://hub.example.com"
//! verification_valid_minutes = 10
//! ```
//!
//! The same values from the environment:
//!
//! ```text
//! HUB_MAILER_SMTP__HOST=smtp.example.com
//! HUB_MAILER_SMTP__PORT=465
//! HUB_MAILER_SITE__SYSTEM_NAME="Example Hub"
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// File read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "hub-mailer.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "HUB_MAILER_";

/// Raw SMTP values; empty strings and port 0 mean "unset"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// Account used to authenticate
    pub account: String,

    /// Password or app token for the account
    pub token: String,

    /// Sender address override; the account is used when empty
    pub from: String,
}

/// Site details interpolated into the templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Display name used in subjects and the layout
    pub system_name: String,

    /// Public base URL of the server
    pub server_address: String,

    /// How long verification codes and reset links stay valid
    pub verification_valid_minutes: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            system_name: "Hub".to_string(),
            server_address: "http://localhost:3000".to_string(),
            verification_valid_minutes: 10,
        }
    }
}

impl SiteSettings {
    /// Link to the top-up page
    ///
    /// ```rust
    /// use hub_mailer::config::SiteSettings;
    ///
    /// let site = SiteSettings {
    ///     server_address: "https://hub.example.com/".to_string(),
    ///     ..SiteSettings::default()
    /// };
    /// assert_eq!(site.top_up_link(), "https://hub.example.com/topup");
    /// ```
    #[must_use]
    pub fn top_up_link(&self) -> String {
        format!("{}/topup", self.server_address.trim_end_matches('/'))
    }
}

/// Complete hub-mailer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailerConfig {
    /// SMTP server and account
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// Site details
    #[serde(default)]
    pub site: SiteSettings,
}

impl MailerConfig {
    /// Layered configuration sources, see the [module docs](self)
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from defaults, an optional TOML file and the
    /// environment
    ///
    /// A missing file is not an error; its values are simply absent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hub_mailer::config::MailerConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = MailerConfig::load(Some("./config/production.toml".as_ref()))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Ok(Self::figment(path).extract()?)
    }

    /// Copy with the SMTP token masked, for display
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if !config.smtp.token.is_empty() {
            config.smtp.token = "********".to_string();
        }
        config
    }
}
