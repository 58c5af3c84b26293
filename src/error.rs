use crate::metro::{line::LineId, station::StationId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetroError {
    #[error("no station named {0:?}")]
    StationNotFound(String),

    #[error("no station named {name:?} on line {line}")]
    StationNotOnLine { name: String, line: LineId },

    #[error("line {0} is not registered")]
    LineNotFound(LineId),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: StationId, to: StationId },

    #[error("invalid route: {from} and {to} are not adjacent")]
    InvalidRoute { from: StationId, to: StationId },
}

impl MetroError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MetroError::StationNotFound(_)
                | MetroError::StationNotOnLine { .. }
                | MetroError::LineNotFound(_)
        )
    }
}

pub type Result<T, E = MetroError> = std::result::Result<T, E>;
