use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolidError>;

#[derive(Debug, Error)]
pub enum SolidError {
    /// A capability lookup found no implementation for the requested subject.
    #[error("{subject} cannot {capability}")]
    Unsupported {
        subject: &'static str,
        capability: &'static str,
    },

    /// A boundary label did not name any known variant.
    #[error("unknown {kind}: '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SolidError {
    pub fn unknown(kind: &'static str, label: &str) -> Self {
        Self::UnknownLabel {
            kind,
            label: label.to_string(),
        }
    }
}
