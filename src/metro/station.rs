use std::fmt;

use crate::metro::line::LineId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Names are not unique: an interchange served by two lines is two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub line: LineId,
    pub(crate) position: usize,
}

impl Station {
    pub(crate) fn new(name: String, line: LineId, position: usize) -> Self {
        Self {
            name,
            line,
            position,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.name, self.line)
    }
}
