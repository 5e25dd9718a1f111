//! # Device Capabilities
//!
//! Each capability a device may offer is its own contract. A device
//! implements exactly the subset it supports, so asking an old printer to
//! fax is not an error at runtime, it is simply not expressible.

use std::str::FromStr;

use crate::SolidError;

pub trait Printable: Send + Sync {
    fn print(&self, content: &str) -> String;
}

pub trait Scannable: Send + Sync {
    fn scan(&self, content: &str) -> String;
}

pub trait Faxable: Send + Sync {
    fn fax(&self, content: &str) -> String;
}

/// The device models known to the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    OldPrinter,
    PhotoCopier,
    OfficeMachine,
}

impl DeviceKind {
    /// Human readable name, used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            DeviceKind::OldPrinter => "old printer",
            DeviceKind::PhotoCopier => "photocopier",
            DeviceKind::OfficeMachine => "office machine",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = SolidError;

    /// Accepts "old-printer", "photocopier" and "office" (case-insensitive,
    /// `_` and `-` interchangeable).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "old-printer" | "printer" => Ok(DeviceKind::OldPrinter),
            "photocopier" | "copier" => Ok(DeviceKind::PhotoCopier),
            "office" | "office-machine" => Ok(DeviceKind::OfficeMachine),
            _ => Err(SolidError::unknown("device", s)),
        }
    }
}
