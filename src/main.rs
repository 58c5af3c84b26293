use std::time::Instant;

use anyhow::{bail, Context};
use chrono::{NaiveTime, TimeDelta};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use metro_router::{LineId, MetroMap, RouteCalculator, RouteConfig, StationId, StationIndex};

#[derive(Parser)]
struct Args {
    /// Path to the metro map JSON file
    map_path: String,
    /// Origin station name
    from: String,
    /// Destination station name
    to: String,
    /// Line of the origin, when several lines share its name
    #[arg(long)]
    from_line: Option<u32>,
    /// Line of the destination, when several lines share its name
    #[arg(long)]
    to_line: Option<u32>,
    /// Departure time (HH:MM) used to estimate the arrival time
    #[arg(long, value_parser = parse_hhmm)]
    depart: Option<NaiveTime>,
    /// Minutes per ride between neighbouring stations
    #[arg(long, default_value_t = RouteConfig::default().ride_minutes)]
    ride_minutes: f64,
    /// Minutes per transfer between lines
    #[arg(long, default_value_t = RouteConfig::default().transfer_minutes)]
    transfer_minutes: f64,
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

fn arrival_time(depart: NaiveTime, minutes: f64) -> NaiveTime {
    depart + TimeDelta::seconds((minutes * 60.0).round() as i64)
}

fn resolve(index: &StationIndex, name: &str, line: Option<u32>) -> anyhow::Result<StationId> {
    if let Some(line) = line {
        return Ok(index.station_on_line(name, LineId::new(line))?);
    }

    let matches = index.stations_named(name);
    if matches.len() > 1 {
        let lines = matches
            .iter()
            .filter_map(|&s| index.get(s))
            .map(|s| s.line)
            .join(", ");
        bail!("{name:?} is served by lines {lines}; pick one with --from-line/--to-line");
    }

    Ok(index.station(name)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let now = Instant::now();
    let index = MetroMap::read(&args.map_path)?.build_index()?;
    println!("Read metro map in {:?}", now.elapsed());

    let from = resolve(&index, &args.from, args.from_line)?;
    let to = resolve(&index, &args.to, args.to_line)?;

    let config = RouteConfig::new(args.ride_minutes, args.transfer_minutes)?;
    let calculator = RouteCalculator::with_config(&index, config);

    let now = Instant::now();
    let route = calculator.shortest_route(from, to)?;
    println!("Found route in {:?}", now.elapsed());

    if route.is_empty() {
        println!("{} is both origin and destination", args.from);
        return Ok(());
    }

    let mut previous_line = None;
    for &id in route.iter() {
        let station = index.get(id).context("Route station missing from index")?;
        let line = index.line_of(id).context("Route station has no line")?;

        if previous_line.is_some_and(|l| l != station.line) {
            println!("  -- transfer to {} --", line.name);
        }
        println!("  {} ({})", station.name, line.name);
        previous_line = Some(station.line);
    }

    let duration = calculator.calculate_duration(&route)?;
    let transfers = calculator.transfers(&route)?;
    println!(
        "{} stations, {transfers} transfers, {duration} minutes",
        route.len()
    );

    if let Some(depart) = args.depart {
        let arrival = arrival_time(depart, duration);
        println!("Depart {} arrive {}", depart.format("%H:%M"), arrival.format("%H:%M"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow() -> StationIndex {
        MetroMap::parse(include_str!("../tests/data/moscow.json"))
            .unwrap()
            .build_index()
            .unwrap()
    }

    fn hhmm(s: &str) -> NaiveTime {
        parse_hhmm(s).unwrap()
    }

    #[test]
    fn ambiguous_name_lists_its_lines() {
        let index = moscow();

        let err = resolve(&index, "Белорусская", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"Белорусская\" is served by lines 1, 4; pick one with --from-line/--to-line"
        );
    }

    #[test]
    fn line_picks_between_shared_names() {
        let index = moscow();

        let b4 = resolve(&index, "Белорусская", Some(4)).unwrap();
        assert_eq!(index.get(b4).unwrap().line, LineId::new(4));
        assert_ne!(b4, resolve(&index, "Белорусская", Some(1)).unwrap());
    }

    #[test]
    fn unique_and_unknown_names() {
        let index = moscow();

        assert_eq!(
            resolve(&index, "Динамо", None).unwrap(),
            index.station("Динамо").unwrap()
        );
        assert!(resolve(&index, "Охотный ряд", None).is_err());
        assert!(resolve(&index, "Динамо", Some(3)).is_err());
    }

    #[test]
    fn arrival_wraps_past_midnight() {
        let arrival = arrival_time(hhmm("23:55"), 13.5);

        assert_eq!(arrival.format("%H:%M").to_string(), "00:08");
        assert_eq!(arrival, NaiveTime::from_hms_opt(0, 8, 30).unwrap());
    }

    #[test]
    fn arrival_for_empty_route_is_departure() {
        assert_eq!(arrival_time(hhmm("08:15"), 0.0), hhmm("08:15"));
    }

    #[test]
    fn departure_must_be_hours_and_minutes() {
        assert!(parse_hhmm("8 15").is_err());
        assert!(parse_hhmm("25:00").is_err());
    }
}
