use std::fmt;

use serde::Deserialize;

use crate::metro::station::StationId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct LineId(u32);

impl LineId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub stations: Vec<StationId>,
}

impl Line {
    pub fn new(id: LineId, name: String) -> Self {
        Self {
            id,
            name,
            stations: vec![],
        }
    }

    pub(crate) fn add_station(&mut self, station: StationId) -> usize {
        self.stations.push(station);
        self.stations.len() - 1
    }

    pub fn neighbours(&self, position: usize) -> impl Iterator<Item = StationId> + '_ {
        let prev = position.checked_sub(1).and_then(|p| self.stations.get(p));
        let next = self.stations.get(position + 1);

        prev.into_iter().chain(next).copied()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
