//! Seat-selection view state: the seat map and the selection it drives.
use crate::seat::{SeatId, SeatMap, SeatStatus};
use crate::selection::Selection;

/// What a click on the seat grid did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    Deselected,
    /// Reserved or unknown seat; nothing changed.
    Ignored,
}

impl ClickOutcome {
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the seat map and selection of one seat-selection view.
///
/// All status changes go through [`SeatPicker::click`], so a seat is
/// `Selected` exactly when its id is in the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatPicker {
    map: SeatMap,
    selection: Selection,
}

impl SeatPicker {
    #[must_use]
    pub fn new(map: SeatMap) -> Self {
        Self {
            map,
            selection: Selection::new(),
        }
    }

    pub fn click(&mut self, id: &SeatId) -> ClickOutcome {
        match self.map.flip(id) {
            None => ClickOutcome::Ignored,
            Some(status) => {
                let selected = self.selection.toggle(id.clone());
                debug_assert_eq!(selected, status == SeatStatus::Selected);
                if selected {
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Deselected
                }
            }
        }
    }

    #[must_use]
    pub fn map(&self) -> &SeatMap {
        &self.map
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
