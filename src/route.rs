use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Deref;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    config::RouteConfig,
    error::{MetroError, Result},
    index::StationIndex,
    metro::station::StationId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Ride,
    Transfer,
}

/// Stations from origin to destination, both included. Empty when the two
/// are the same station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
}

impl Route {
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }
}

impl Deref for Route {
    type Target = [StationId];

    fn deref(&self) -> &Self::Target {
        &self.stations
    }
}

#[derive(Clone, Copy, Debug)]
struct State {
    cost: f64,
    seq: u64,
    station: StationId,
}

// Min-heap on cost. Equal costs pop in discovery order so the first path
// found to a station is the one kept.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

#[derive(Debug, Clone, Copy)]
pub struct RouteCalculator<'a> {
    index: &'a StationIndex,
    config: RouteConfig,
}

impl<'a> RouteCalculator<'a> {
    pub fn new(index: &'a StationIndex) -> Self {
        Self::with_config(index, RouteConfig::default())
    }

    pub fn with_config(index: &'a StationIndex, config: RouteConfig) -> Self {
        Self { index, config }
    }

    /// Among routes of equal duration the first one discovered is returned.
    pub fn shortest_route(&self, from: StationId, to: StationId) -> Result<Route> {
        self.index.require(from)?;
        self.index.require(to)?;

        if from == to {
            return Ok(Route::default());
        }

        let n = self.index.station_count();
        let mut best = vec![f64::INFINITY; n];
        let mut previous: Vec<Option<StationId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut seq = 0;

        best[from.index()] = 0.0;
        heap.push(State {
            cost: 0.0,
            seq,
            station: from,
        });

        let mut expanded = 0usize;
        while let Some(State { cost, station, .. }) = heap.pop() {
            if settled[station.index()] {
                continue;
            }
            settled[station.index()] = true;
            expanded += 1;

            if station == to {
                debug!(%from, %to, duration = cost, expanded, "route found");
                return Ok(Self::walk_back(&previous, from, to));
            }

            trace!(%station, cost, "expanding");

            for (next, kind) in self.index.neighbours(station) {
                if settled[next.index()] {
                    continue;
                }

                let candidate = cost + self.config.weight(kind);
                if candidate < best[next.index()] {
                    best[next.index()] = candidate;
                    previous[next.index()] = Some(station);
                    seq += 1;
                    heap.push(State {
                        cost: candidate,
                        seq,
                        station: next,
                    });
                }
            }
        }

        debug!(%from, %to, expanded, "destination unreachable");
        Err(MetroError::NoRoute { from, to })
    }

    fn walk_back(previous: &[Option<StationId>], from: StationId, to: StationId) -> Route {
        let mut stations = vec![to];
        let mut current = to;
        while current != from {
            match previous[current.index()] {
                Some(p) => {
                    stations.push(p);
                    current = p;
                }
                None => break,
            }
        }

        stations.reverse();
        Route::new(stations)
    }

    pub fn edges(&self, route: &[StationId]) -> Result<Vec<EdgeKind>> {
        for &station in route {
            self.index.require(station)?;
        }

        route
            .iter()
            .copied()
            .tuple_windows()
            .map(|(from, to)| {
                self.index
                    .edge_between(from, to)
                    .ok_or(MetroError::InvalidRoute { from, to })
            })
            .collect()
    }

    /// Total minutes along `route`; zero for routes shorter than two stations.
    pub fn calculate_duration(&self, route: &[StationId]) -> Result<f64> {
        Ok(self
            .edges(route)?
            .into_iter()
            .map(|kind| self.config.weight(kind))
            .sum())
    }

    pub fn transfers(&self, route: &[StationId]) -> Result<usize> {
        Ok(self
            .edges(route)?
            .into_iter()
            .filter(|&kind| kind == EdgeKind::Transfer)
            .count())
    }
}
