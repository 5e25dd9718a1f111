//! # Discount Strategies
//!
//! Every customer tier owns one [`DiscountStrategy`]. Adding a tier means
//! adding a strategy, never editing a branch inside an existing one.

use std::fmt;
use std::str::FromStr;

use crate::SolidError;

/// Computes the discount granted on an amount (the amount taken off, not
/// the final price).
pub trait DiscountStrategy: Send + Sync {
    fn apply(&self, amount: f64) -> f64;

    /// The tier this strategy is registered for.
    fn tier(&self) -> CustomerTier;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerTier {
    Standard,
    Premium,
    Vip,
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerTier::Standard => "STANDARD",
            CustomerTier::Premium => "PREMIUM",
            CustomerTier::Vip => "VIP",
        };
        f.write_str(label)
    }
}

impl FromStr for CustomerTier {
    type Err = SolidError;

    /// Parses "standard", "premium" or "vip" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(CustomerTier::Standard),
            "PREMIUM" => Ok(CustomerTier::Premium),
            "VIP" => Ok(CustomerTier::Vip),
            _ => Err(SolidError::unknown("customer tier", s)),
        }
    }
}
