//! # Birds
//!
//! [`Bird`] describes what every bird has in common, which does not include
//! flying. Birds that can fly additionally implement [`Flyable`].

use std::str::FromStr;

use crate::SolidError;

pub trait Bird: Send + Sync {
    fn name(&self) -> &str;
}

pub trait Flyable: Send + Sync {
    /// Describes how the bird moves through the air.
    fn fly(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirdKind {
    Sparrow,
    Ostrich,
}

impl FromStr for BirdKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sparrow" => Ok(BirdKind::Sparrow),
            "ostrich" => Ok(BirdKind::Ostrich),
            _ => Err(SolidError::unknown("bird", s)),
        }
    }
}
