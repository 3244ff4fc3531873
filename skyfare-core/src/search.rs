//! Flight search, flight offers, cabin classes and the trip summary read
//! back on later pages.
use crate::constants::{MISSING_ENDPOINTS_MESSAGE, SUMMARY_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{}", MISSING_ENDPOINTS_MESSAGE)]
    MissingEndpoints,
}

/// Origin and destination as typed on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
}

impl FlightSearch {
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    /// Trimmed endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingEndpoints`] when either side is blank.
    pub fn endpoints(&self) -> Result<(&str, &str), SearchError> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        if origin.is_empty() || destination.is_empty() {
            Err(SearchError::MissingEndpoints)
        } else {
            Ok((origin, destination))
        }
    }
}

/// One bookable flight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub route: String,
    pub price: String,
    #[serde(default)]
    pub departs: String,
    #[serde(default)]
    pub duration: String,
}

/// Parse the static flight list.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn offers_from_json(json: &str) -> Result<Vec<FlightOffer>, serde_json::Error> {
    serde_json::from_str(json)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [Self; 3] = [Self::Economy, Self::Business, Self::First];

    /// Label shown on the class card and stored in the session.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First Class",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Economy => "Comfortable seating and complimentary snacks.",
            Self::Business => "Lie-flat seats, lounge access and priority boarding.",
            Self::First => "Private suites with chef-curated dining.",
        }
    }
}

/// Trip details stored by the search and booking pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripSummary {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub flight: Option<String>,
    pub price: Option<String>,
    pub cabin: Option<String>,
}

fn or_placeholder(field: Option<&str>) -> &str {
    field.unwrap_or(SUMMARY_PLACEHOLDER)
}

impl TripSummary {
    /// `"Origin → Destination"`, or `"-"` unless both ends are known.
    #[must_use]
    pub fn route_label(&self) -> String {
        match (self.origin.as_deref(), self.destination.as_deref()) {
            (Some(from), Some(to)) => format!("{from} → {to}"),
            _ => SUMMARY_PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub fn flight_label(&self) -> &str {
        or_placeholder(self.flight.as_deref())
    }

    #[must_use]
    pub fn price_label(&self) -> &str {
        or_placeholder(self.price.as_deref())
    }

    #[must_use]
    pub fn cabin_label(&self) -> &str {
        or_placeholder(self.cabin.as_deref())
    }
}
