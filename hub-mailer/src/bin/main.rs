//! hub-mailer CLI - send a single transactional email
//!
//! # Usage
//!
//! ```bash
//! hub-mailer --config hub-mailer.toml verification-code --to user@example.com --code 123456
//! hub-mailer password-reset --to user@example.com --name alice --link https://hub.example.com/reset/abc
//! hub-mailer quota-warning --to user@example.com --name alice --quota 120 --exhausted
//! hub-mailer show-config
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hub_mailer::{config::MailerConfig, email::Mailer, observability};
use tracing::info;

#[derive(Parser)]
#[command(name = "hub-mailer")]
#[command(version)]
#[command(about = "Send transactional emails over SMTP", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./hub-mailer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an email verification code
    VerificationCode {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Code to include in the message
        #[arg(long)]
        code: String,
    },
    /// Send a password reset link
    PasswordReset {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Name used in the greeting
        #[arg(long)]
        name: String,
        /// Reset link
        #[arg(long)]
        link: String,
    },
    /// Send a low or exhausted quota warning
    QuotaWarning {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Name used in the greeting
        #[arg(long)]
        name: String,
        /// Remaining quota
        #[arg(long, allow_hyphen_values = true)]
        quota: i64,
        /// The quota is fully used up
        #[arg(long)]
        exhausted: bool,
    },
    /// Print the effective configuration as JSON (token masked)
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init()?;

    let config = MailerConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if matches!(cli.command, Commands::ShowConfig) {
        println!("{}", serde_json::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let mailer = Mailer::smtp(&config)?;

    match cli.command {
        Commands::VerificationCode { to, code } => {
            mailer.send_verification_code_email(&to, &code).await?;
            info!(%to, "Verification code sent");
        }
        Commands::PasswordReset { to, name, link } => {
            mailer.send_password_reset_email(&name, &to, &link).await?;
            info!(%to, "Password reset email sent");
        }
        Commands::QuotaWarning {
            to,
            name,
            quota,
            exhausted,
        } => {
            mailer
                .send_quota_warning_email(&name, &to, quota, exhausted)
                .await?;
            info!(%to, quota, exhausted, "Quota warning sent");
        }
        Commands::ShowConfig => {}
    }

    Ok(())
}
