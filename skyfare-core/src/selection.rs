//! Ordered seat selection and its human-readable rendering.
use crate::constants::{SEAT_LIST_PLACEHOLDER, SEAT_SEPARATOR};
use crate::seat::SeatId;
use serde::{Deserialize, Serialize};

/// Render seat ids as `"1A, 1B"`, or `placeholder` when there are none.
#[must_use]
pub fn render_seat_list(seats: &[SeatId], placeholder: &str) -> String {
    if seats.is_empty() {
        return placeholder.to_string();
    }
    seats
        .iter()
        .map(SeatId::as_str)
        .collect::<Vec<_>>()
        .join(SEAT_SEPARATOR)
}

/// Insertion-ordered set of selected seat ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SeatId>", into = "Vec<SeatId>")]
pub struct Selection {
    seats: Vec<SeatId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, append it otherwise.
    /// Returns `true` when the seat ends up selected.
    pub fn toggle(&mut self, id: SeatId) -> bool {
        if let Some(pos) = self.seats.iter().position(|seat| seat == &id) {
            self.seats.remove(pos);
            false
        } else {
            self.seats.push(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.contains(id)
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
    pub fn as_slice(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatId> {
        self.seats.iter()
    }

    /// Listing for the seat page, `"None"` when empty.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(SEAT_LIST_PLACEHOLDER)
    }

    #[must_use]
    pub fn render_with(&self, placeholder: &str) -> String {
        render_seat_list(&self.seats, placeholder)
    }
}

impl FromIterator<SeatId> for Selection {
    fn from_iter<I: IntoIterator<Item = SeatId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            if !selection.contains(&id) {
                selection.seats.push(id);
            }
        }
        selection
    }
}

impl From<Vec<SeatId>> for Selection {
    fn from(seats: Vec<SeatId>) -> Self {
        seats.into_iter().collect()
    }
}

impl From<Selection> for Vec<SeatId> {
    fn from(selection: Selection) -> Self {
        selection.seats
    }
}
