//! Seat identifiers and the cabin seat map.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_ROWS: u8 = 99;

static SEAT_ID_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^([1-9][0-9]?)([A-K])$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdError {
    #[error("invalid seat id `{0}`: expected a row number followed by a column letter")]
    Malformed(String),
}

/// Row number followed by a column letter, e.g. `12A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId(String);

impl SeatId {
    /// Build an id from its row and column parts.
    ///
    /// # Errors
    ///
    /// Returns [`SeatIdError::Malformed`] when the row is outside `1..=99`
    /// or the column is not one of `A`–`K`.
    pub fn from_parts(row: u8, column: char) -> Result<Self, SeatIdError> {
        format!("{row}{column}").parse()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn row(&self) -> u8 {
        self.0
            .trim_end_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn column(&self) -> char {
        self.0.chars().last().unwrap_or_default()
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = SEAT_ID_RE.as_ref().is_some_and(|re| re.is_match(s));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(SeatIdError::Malformed(s.to_string()))
        }
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.0
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Available,
    Reserved,
    Selected,
}

impl SeatStatus {
    /// CSS class suffix used by the seat grid.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Selected => "selected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
}

impl Seat {
    /// Reserved seats never react to clicks.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.status != SeatStatus::Reserved
    }
}

/// Static cabin layout as shipped with the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    pub rows: u8,
    pub columns: Vec<char>,
    #[serde(default)]
    pub aisle_after: Option<char>,
    #[serde(default)]
    pub reserved: Vec<SeatId>,
}

#[derive(Debug, Error)]
pub enum SeatMapError {
    #[error("layout must have between 1 and {MAX_ROWS} rows and at least one column")]
    Empty,
    #[error("invalid column `{0}`")]
    InvalidColumn(char),
    #[error("column `{0}` appears more than once")]
    DuplicateColumn(char),
    #[error("aisle column `{0}` is not part of the layout")]
    UnknownAisle(char),
    #[error("reserved seat `{0}` is not part of the layout")]
    UnknownReserved(SeatId),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Grid of seats in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    columns: Vec<char>,
    aisle_after: Option<char>,
    seats: Vec<Seat>,
}

impl SeatMap {
    /// Build the map from a static layout.
    ///
    /// # Errors
    ///
    /// Returns an error when the layout is empty, has invalid or duplicate
    /// columns, or reserves a seat outside the grid.
    pub fn from_layout(layout: &SeatLayout) -> Result<Self, SeatMapError> {
        if layout.rows == 0 || layout.rows > MAX_ROWS || layout.columns.is_empty() {
            return Err(SeatMapError::Empty);
        }
        let mut seen = HashSet::new();
        for &column in &layout.columns {
            if !('A'..='K').contains(&column) {
                return Err(SeatMapError::InvalidColumn(column));
            }
            if !seen.insert(column) {
                return Err(SeatMapError::DuplicateColumn(column));
            }
        }
        if let Some(aisle) = layout.aisle_after
            && !seen.contains(&aisle)
        {
            return Err(SeatMapError::UnknownAisle(aisle));
        }

        let reserved: HashSet<&SeatId> = layout.reserved.iter().collect();
        let mut seats = Vec::with_capacity(usize::from(layout.rows) * layout.columns.len());
        for row in 1..=layout.rows {
            for &column in &layout.columns {
                let id = SeatId::from_parts(row, column)
                    .map_err(|_| SeatMapError::InvalidColumn(column))?;
                let status = if reserved.contains(&id) {
                    SeatStatus::Reserved
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat { id, status });
            }
        }

        if let Some(unknown) = layout
            .reserved
            .iter()
            .find(|id| !seats.iter().any(|seat| &seat.id == *id))
        {
            return Err(SeatMapError::UnknownReserved(unknown.clone()));
        }

        Ok(Self {
            columns: layout.columns.clone(),
            aisle_after: layout.aisle_after,
            seats,
        })
    }

    /// Parse a JSON layout and build the map.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the layout is invalid.
    pub fn from_json(json: &str) -> Result<Self, SeatMapError> {
        let layout: SeatLayout = serde_json::from_str(json)?;
        Self::from_layout(&layout)
    }

    #[must_use]
    pub fn columns(&self) -> &[char] {
        &self.columns
    }

    /// Index of the column after which the aisle gap is drawn.
    #[must_use]
    pub fn aisle_index(&self) -> Option<usize> {
        let aisle = self.aisle_after?;
        self.columns.iter().position(|&c| c == aisle)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(self.columns.len().max(1))
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.iter().find(|seat| &seat.id == id)
    }

    #[must_use]
    pub fn status_of(&self, id: &SeatId) -> Option<SeatStatus> {
        self.seat(id).map(|seat| seat.status)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn count(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|seat| seat.status == status).count()
    }

    /// Flip a clickable seat between available and selected.
    /// Returns the new status, or `None` when the seat is unknown or reserved.
    pub(crate) fn flip(&mut self, id: &SeatId) -> Option<SeatStatus> {
        let seat = self
            .seats
            .iter_mut()
            .find(|seat| &seat.id == id && seat.is_clickable())?;
        seat.status = match seat.status {
            SeatStatus::Selected => SeatStatus::Available,
            _ => SeatStatus::Selected,
        };
        Some(seat.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SeatLayout {
        SeatLayout {
            rows: 3,
            columns: vec!['A', 'B', 'C', 'D'],
            aisle_after: Some('B'),
            reserved: vec!["1B".parse().unwrap(), "3D".parse().unwrap()],
        }
    }

    #[test]
    fn seat_id_accepts_row_and_column() {
        let id: SeatId = "12A".parse().unwrap();
        assert_eq!(id.row(), 12);
        assert_eq!(id.column(), 'A');
        assert_eq!(id.to_string(), "12A");
        assert_eq!(SeatId::from_parts(5, 'F').unwrap().as_str(), "5F");
    }

    #[test]
    fn seat_id_rejects_malformed_values() {
        for bad in ["", "A1", "0A", "100A", "12", "12Z", "12a", " 1A"] {
            assert!(bad.parse::<SeatId>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn seat_id_deserialization_validates() {
        let ids: Vec<SeatId> = serde_json::from_str(r#"["12A","14C"]"#).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(serde_json::from_str::<Vec<SeatId>>(r#"["12A","nope"]"#).is_err());
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["12A","14C"]"#);
    }

    #[test]
    fn map_marks_reserved_seats() {
        let map = SeatMap::from_layout(&layout()).unwrap();
        assert_eq!(map.len(), 12);
        assert_eq!(map.count(SeatStatus::Reserved), 2);
        assert_eq!(
            map.status_of(&"1B".parse().unwrap()),
            Some(SeatStatus::Reserved)
        );
        assert_eq!(map.aisle_index(), Some(1));
        let rows: Vec<_> = map.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0].id.as_str(), "3A");
    }

    #[test]
    fn map_rejects_invalid_layouts() {
        let mut bad = layout();
        bad.rows = 0;
        assert!(matches!(
            SeatMap::from_layout(&bad),
            Err(SeatMapError::Empty)
        ));

        let mut bad = layout();
        bad.columns.push('A');
        assert!(matches!(
            SeatMap::from_layout(&bad),
            Err(SeatMapError::DuplicateColumn('A'))
        ));

        let mut bad = layout();
        bad.reserved.push("9A".parse().unwrap());
        assert!(matches!(
            SeatMap::from_layout(&bad),
            Err(SeatMapError::UnknownReserved(_))
        ));

        let mut bad = layout();
        bad.aisle_after = Some('F');
        assert!(matches!(
            SeatMap::from_layout(&bad),
            Err(SeatMapError::UnknownAisle('F'))
        ));
    }

    #[test]
    fn flip_ignores_reserved_and_unknown_seats() {
        let mut map = SeatMap::from_layout(&layout()).unwrap();
        assert_eq!(map.flip(&"1B".parse().unwrap()), None);
        assert_eq!(map.flip(&"9A".parse().unwrap()), None);
        let id = "2C".parse().unwrap();
        assert_eq!(map.flip(&id), Some(SeatStatus::Selected));
        assert_eq!(map.flip(&id), Some(SeatStatus::Available));
    }

    #[test]
    fn from_json_reads_layout() {
        let map = SeatMap::from_json(
            r#"{"rows":2,"columns":["A","B"],"reserved":["2B"]}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.aisle_index(), None);
        assert!(SeatMap::from_json("{").is_err());
    }
}
