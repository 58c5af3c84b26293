use crate::metro::station::StationId;

/// Unordered transfer pair, stored smallest id first so `(a, b) == (b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
    a: StationId,
    b: StationId,
}

impl Connection {
    pub fn new(a: StationId, b: StationId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}
