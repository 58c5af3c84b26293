use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::metro::{line::LineId, MetroMap};

#[derive(Debug, Clone, Deserialize)]
pub struct LineEntry {
    pub number: LineId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationRef {
    pub line: LineId,
    pub station: String,
}

pub fn read_map<P: AsRef<Path>>(path: P) -> anyhow::Result<MetroMap> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let rdr = BufReader::new(f);

    serde_json::from_reader(rdr).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_map(s: &str) -> anyhow::Result<MetroMap> {
    serde_json::from_str(s).context("Failed to parse metro map")
}
