//! Build-time configuration and the static data embedded in the bundle.
use anyhow::Context;
use log::LevelFilter;
use skyfare_core::search::offers_from_json;
use skyfare_core::{FlightOffer, FlowConfig, SeatMap};

const FLOW_JSON: &str = include_str!("../static/data/flow.json");
const SEAT_MAP_JSON: &str = include_str!("../static/data/seat_map.json");
const FLIGHTS_JSON: &str = include_str!("../static/data/flights.json");

/// Console log level, set with `SKYFARE_LOG` at compile time.
#[must_use]
pub fn log_level() -> LevelFilter {
    log_level_from(option_env!("SKYFARE_LOG"))
}

fn log_level_from(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Simulated latencies; defaults when `flow.json` is unreadable.
#[must_use]
pub fn flow_config() -> FlowConfig {
    or_log_default(FlowConfig::from_json(FLOW_JSON).context("loading flow.json"))
}

/// Cabin layout for the seat page; empty when `seat_map.json` is invalid.
#[must_use]
pub fn seat_map() -> SeatMap {
    or_log_default(SeatMap::from_json(SEAT_MAP_JSON).context("loading seat_map.json"))
}

#[must_use]
pub fn flight_offers() -> Vec<FlightOffer> {
    or_log_default(offers_from_json(FLIGHTS_JSON).context("loading flights.json"))
}

fn or_log_default<T: Default>(result: anyhow::Result<T>) -> T {
    result.unwrap_or_else(|err| {
        log::error!("{err:#}");
        T::default()
    })
}
