//! # Devices
//!
//! Concrete devices and a small catalogue that answers capability queries.
//! A device that lacks a capability has no method for it at all:
//!
//! ```compile_fail
//! use solid_common::device::Scannable;
//! use solid_core::devices::OldPrinter;
//!
//! OldPrinter.scan("doc");
//! ```
//!
//! ```compile_fail
//! use solid_common::device::Faxable;
//! use solid_core::devices::PhotoCopier;
//!
//! PhotoCopier.fax("doc");
//! ```

use solid_common::device::{DeviceKind, Faxable, Printable, Scannable};
use solid_common::{Result, SolidError};
use tracing::debug;

fn printing(content: &str) -> String {
    format!("printing: {content}")
}

fn scanning(content: &str) -> String {
    format!("scanning: {content}")
}

pub struct OldPrinter;

impl Printable for OldPrinter {
    fn print(&self, content: &str) -> String {
        printing(content)
    }
}

pub struct PhotoCopier;

impl Printable for PhotoCopier {
    fn print(&self, content: &str) -> String {
        printing(content)
    }
}

impl Scannable for PhotoCopier {
    fn scan(&self, content: &str) -> String {
        scanning(content)
    }
}

/// Supports every capability.
pub struct OfficeMachine;

impl Printable for OfficeMachine {
    fn print(&self, content: &str) -> String {
        printing(content)
    }
}

impl Scannable for OfficeMachine {
    fn scan(&self, content: &str) -> String {
        scanning(content)
    }
}

impl Faxable for OfficeMachine {
    fn fax(&self, content: &str) -> String {
        format!("faxing: {content}")
    }
}

/// A device picked from the catalogue at runtime.
///
/// Capability queries return `None` when the underlying device does not
/// implement the contract; nothing is ever invoked on a device that can't
/// handle it.
pub enum Device {
    OldPrinter(OldPrinter),
    PhotoCopier(PhotoCopier),
    OfficeMachine(OfficeMachine),
}

impl From<DeviceKind> for Device {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::OldPrinter => Device::OldPrinter(OldPrinter),
            DeviceKind::PhotoCopier => Device::PhotoCopier(PhotoCopier),
            DeviceKind::OfficeMachine => Device::OfficeMachine(OfficeMachine),
        }
    }
}

impl Device {
    pub fn kind(&self) -> DeviceKind {
        match self {
            Device::OldPrinter(_) => DeviceKind::OldPrinter,
            Device::PhotoCopier(_) => DeviceKind::PhotoCopier,
            Device::OfficeMachine(_) => DeviceKind::OfficeMachine,
        }
    }

    pub fn as_printable(&self) -> Option<&dyn Printable> {
        match self {
            Device::OldPrinter(d) => Some(d),
            Device::PhotoCopier(d) => Some(d),
            Device::OfficeMachine(d) => Some(d),
        }
    }

    pub fn as_scannable(&self) -> Option<&dyn Scannable> {
        match self {
            Device::OldPrinter(_) => None,
            Device::PhotoCopier(d) => Some(d),
            Device::OfficeMachine(d) => Some(d),
        }
    }

    pub fn as_faxable(&self) -> Option<&dyn Faxable> {
        match self {
            Device::OldPrinter(_) | Device::PhotoCopier(_) => None,
            Device::OfficeMachine(d) => Some(d),
        }
    }

    pub fn require_printable(&self) -> Result<&dyn Printable> {
        self.as_printable().ok_or_else(|| self.unsupported("print"))
    }

    pub fn require_scannable(&self) -> Result<&dyn Scannable> {
        self.as_scannable().ok_or_else(|| self.unsupported("scan"))
    }

    pub fn require_faxable(&self) -> Result<&dyn Faxable> {
        self.as_faxable().ok_or_else(|| self.unsupported("fax"))
    }

    fn unsupported(&self, capability: &'static str) -> SolidError {
        let subject = self.kind().name();
        debug!(subject, capability, "capability lookup failed");
        SolidError::Unsupported {
            subject,
            capability,
        }
    }
}
