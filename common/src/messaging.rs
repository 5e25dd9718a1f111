//! # Messaging Contracts
//!
//! High-level notification code depends on [`MessageSender`] only. Which
//! channel a message travels through is decided once, when the sender is
//! built, and never by comparing strings at send time.

use std::str::FromStr;

use crate::SolidError;

/// Sends a message through one channel and returns the delivery confirmation.
pub trait MessageSender: Send + Sync {
    fn send(&self, message: &str) -> String;
}

/// Delivery channels known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
}

impl FromStr for Channel {
    type Err = SolidError;

    /// Parses "email" or "sms" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            _ => Err(SolidError::unknown("channel", s)),
        }
    }
}
