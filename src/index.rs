use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use crate::{
    error::{MetroError, Result},
    metro::{
        connection::Connection,
        line::{Line, LineId},
        station::{Station, StationId},
    },
    route::EdgeKind,
};

#[derive(Debug, Default, Clone)]
pub struct StationIndex {
    lines: BTreeMap<LineId, Line>,
    stations: Vec<Station>,
    by_name: HashMap<String, Vec<StationId>>,
    connections: Vec<Connection>,
    seen_connections: HashSet<Connection>,
    transfers: Vec<Vec<StationId>>,
}

impl StationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later calls with an id already present leave the existing line untouched.
    pub fn add_line(&mut self, id: LineId, name: &str) -> LineId {
        if let Some(existing) = self.lines.get(&id) {
            debug!(line = %id, name = %existing.name, "line already registered");
            return id;
        }

        self.lines.insert(id, Line::new(id, name.to_owned()));
        id
    }

    pub fn add_station(&mut self, name: &str, line: LineId) -> Result<StationId> {
        if let Ok(existing) = self.station_on_line(name, line) {
            debug!(name, line = %line, "station already registered");
            return Ok(existing);
        }

        let id = StationId::new(self.stations.len());
        let position = self
            .lines
            .get_mut(&line)
            .ok_or(MetroError::LineNotFound(line))?
            .add_station(id);

        self.stations
            .push(Station::new(name.to_owned(), line, position));
        self.transfers.push(vec![]);
        self.by_name.entry(name.to_owned()).or_default().push(id);

        Ok(id)
    }

    /// When several lines share the name the earliest registered station wins.
    pub fn station(&self, name: &str) -> Result<StationId> {
        self.stations_named(name)
            .first()
            .copied()
            .ok_or_else(|| MetroError::StationNotFound(name.to_owned()))
    }

    pub fn stations_named(&self, name: &str) -> &[StationId] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn station_on_line(&self, name: &str, line: LineId) -> Result<StationId> {
        self.stations_named(name)
            .iter()
            .copied()
            .find(|&id| self.stations[id.index()].line == line)
            .ok_or_else(|| MetroError::StationNotOnLine {
                name: name.to_owned(),
                line,
            })
    }

    pub fn add_connection(&mut self, a: StationId, b: StationId) -> Result<()> {
        let line_a = self.require(a)?.line;
        let line_b = self.require(b)?.line;

        if a == b {
            return Err(MetroError::InvalidArgument(format!(
                "station {a} cannot be connected to itself"
            )));
        }
        if line_a == line_b {
            return Err(MetroError::InvalidArgument(format!(
                "stations {a} and {b} are both on line {line_a}"
            )));
        }

        let connection = Connection::new(a, b);
        if !self.seen_connections.insert(connection) {
            debug!(%a, %b, "connection already registered");
            return Ok(());
        }

        self.connections.push(connection);
        self.transfers[a.index()].push(b);
        self.transfers[b.index()].push(a);

        Ok(())
    }

    pub fn add_connection_group(&mut self, stations: &[StationId]) -> Result<()> {
        for (a, b) in stations.iter().copied().tuple_combinations() {
            self.add_connection(a, b)?;
        }

        Ok(())
    }

    pub fn connected_stations(&self, station: StationId) -> &[StationId] {
        self.transfers.get(station.index()).map_or(&[], Vec::as_slice)
    }

    pub fn line_neighbours(&self, station: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.get(station)
            .and_then(|s| self.lines.get(&s.line).map(|l| l.neighbours(s.position)))
            .into_iter()
            .flatten()
    }

    pub fn neighbours(
        &self,
        station: StationId,
    ) -> impl Iterator<Item = (StationId, EdgeKind)> + '_ {
        self.line_neighbours(station)
            .map(|s| (s, EdgeKind::Ride))
            .chain(
                self.connected_stations(station)
                    .iter()
                    .map(|&s| (s, EdgeKind::Transfer)),
            )
    }

    pub fn edge_between(&self, a: StationId, b: StationId) -> Option<EdgeKind> {
        if self.line_neighbours(a).any(|s| s == b) {
            Some(EdgeKind::Ride)
        } else if self.connected_stations(a).contains(&b) {
            Some(EdgeKind::Transfer)
        } else {
            None
        }
    }

    pub fn get(&self, station: StationId) -> Option<&Station> {
        self.stations.get(station.index())
    }

    pub(crate) fn require(&self, station: StationId) -> Result<&Station> {
        self.get(station).ok_or_else(|| {
            MetroError::InvalidArgument(format!("station {station} is not registered"))
        })
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn line_of(&self, station: StationId) -> Option<&Line> {
        self.get(station).and_then(|s| self.lines.get(&s.line))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}
