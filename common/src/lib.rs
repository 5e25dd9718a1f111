//! # Solid Common
//!
//! Domain models and the contracts (traits) every adapter in `solid-core`
//! implements. Nothing in here performs IO on its own.
//!
//! * **[`messaging`]**: `MessageSender` and the `Channel` label.
//! * **[`device`]**: segregated `Printable`, `Scannable` and `Faxable` contracts.
//! * **[`discount`]**: `DiscountStrategy` and the `CustomerTier` label.
//! * **[`invoice`]**: the `Invoice` model and its store/mailer contracts.
//! * **[`bird`]**: the `Bird` base contract and the separate `Flyable` capability.

pub mod amount;
pub mod bird;
pub mod config;
pub mod device;
pub mod discount;
pub mod error;
pub mod invoice;
pub mod messaging;

pub use error::{Result, SolidError};
