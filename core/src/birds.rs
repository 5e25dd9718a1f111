//! # Birds
//!
//! Only birds that fly implement `Flyable`; the rest are plain `Bird`s.
//!
//! ```compile_fail
//! use solid_common::bird::Flyable;
//! use solid_core::birds::Ostrich;
//!
//! Ostrich.fly();
//! ```
//!
//! ```compile_fail
//! use solid_common::bird::Bird;
//! use solid_core::birds::Sparrow;
//!
//! let bird: &dyn Bird = &Sparrow;
//! bird.fly();
//! ```

use solid_common::bird::{Bird, BirdKind, Flyable};
use solid_common::{Result, SolidError};

pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &str {
        "sparrow"
    }
}

impl Flyable for Sparrow {
    fn fly(&self) -> String {
        String::from("flap")
    }
}

pub struct Ostrich;

impl Bird for Ostrich {
    fn name(&self) -> &str {
        "ostrich"
    }
}

/// A bird resolved from a [`BirdKind`], able to answer whether it flies.
pub enum Aviary {
    Sparrow(Sparrow),
    Ostrich(Ostrich),
}

impl From<BirdKind> for Aviary {
    fn from(kind: BirdKind) -> Self {
        match kind {
            BirdKind::Sparrow => Aviary::Sparrow(Sparrow),
            BirdKind::Ostrich => Aviary::Ostrich(Ostrich),
        }
    }
}

impl Aviary {
    pub fn as_bird(&self) -> &dyn Bird {
        match self {
            Aviary::Sparrow(b) => b,
            Aviary::Ostrich(b) => b,
        }
    }

    pub fn as_flyable(&self) -> Option<&dyn Flyable> {
        match self {
            Aviary::Sparrow(b) => Some(b),
            Aviary::Ostrich(_) => None,
        }
    }

    pub fn require_flyable(&self) -> Result<&dyn Flyable> {
        self.as_flyable().ok_or(SolidError::Unsupported {
            subject: match self {
                Aviary::Sparrow(_) => "sparrow",
                Aviary::Ostrich(_) => "ostrich",
            },
            capability: "fly",
        })
    }
}
