pub mod connection;
pub mod io;
pub mod line;
pub mod station;

use std::{collections::BTreeMap, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::info;

use crate::{
    index::StationIndex,
    metro::{
        io::{LineEntry, StationRef},
        line::LineId,
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct MetroMap {
    pub lines: Vec<LineEntry>,
    pub stations: BTreeMap<LineId, Vec<String>>,
    #[serde(default)]
    pub connections: Vec<Vec<StationRef>>,
}

impl MetroMap {
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        io::read_map(path)
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        io::parse_map(s)
    }

    pub fn build_index(&self) -> anyhow::Result<StationIndex> {
        let mut index = StationIndex::new();

        for line in &self.lines {
            index.add_line(line.number, &line.name);
        }

        for (line, names) in &self.stations {
            for name in names {
                if index.station_on_line(name, *line).is_ok() {
                    bail!("Station {name:?} is listed twice on line {line}");
                }

                index
                    .add_station(name, *line)
                    .with_context(|| format!("Station {name:?} is on an unknown line"))?;
            }
        }

        for (i, group) in self.connections.iter().enumerate() {
            let stations = group
                .iter()
                .map(|s| index.station_on_line(&s.station, s.line))
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("Connection {i} names an unknown station"))?;

            index
                .add_connection_group(&stations)
                .with_context(|| format!("Connection {i} is invalid"))?;
        }

        info!(
            lines = self.lines.len(),
            stations = index.station_count(),
            connections = index.connections().len(),
            "built station index"
        );

        Ok(index)
    }
}
