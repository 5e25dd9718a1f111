//! # Solid Core
//!
//! Concrete implementations of the contracts defined in `solid-common`,
//! plus the lookups that turn a parsed label into a typed implementation.

pub mod birds;
pub mod devices;
pub mod discount;
pub mod invoice;
pub mod messaging;
