//! Email backend implementations
//!
//! - **SMTP**: Send emails via an SMTP server with `lettre`

pub mod smtp;
