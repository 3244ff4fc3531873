//! Checkout hand-off from the seat page and the payment page bootstrap.
use crate::constants::{EMPTY_SELECTION_MESSAGE, SELECTED_SEATS_KEY, SUMMARY_PLACEHOLDER};
use crate::seat::SeatId;
use crate::selection::{Selection, render_seat_list};
use crate::view::{PageNavigator, View};
use crate::{BoxedError, SessionStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("{}", EMPTY_SELECTION_MESSAGE)]
    EmptySelection,
    #[error("failed to encode selection: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to store selection: {0}")]
    Storage(#[source] BoxedError),
}

impl CheckoutError {
    /// Whether the user can fix this by changing their selection.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}

/// Write the selection under [`SELECTED_SEATS_KEY`] and navigate to payment.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptySelection`] without touching the store when
/// nothing is selected, or a storage error when the write fails. Navigation
/// only happens after a successful write.
pub fn proceed<S, N>(selection: &Selection, store: &S, navigator: &N) -> Result<(), CheckoutError>
where
    S: SessionStore + ?Sized,
    N: PageNavigator + ?Sized,
{
    if selection.is_empty() {
        return Err(CheckoutError::EmptySelection);
    }
    let record = serde_json::to_string(selection)?;
    store
        .set_item(SELECTED_SEATS_KEY, &record)
        .map_err(|err| CheckoutError::Storage(Box::new(err)))?;
    log::info!("handing off {} seat(s) to payment", selection.len());
    navigator.navigate(View::Payment);
    Ok(())
}

/// Read-only copy of the selection handed to the payment page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    seats: Vec<SeatId>,
}

impl PersistedSelection {
    #[must_use]
    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Order summary listing, `"-"` when empty.
    #[must_use]
    pub fn render(&self) -> String {
        render_seat_list(&self.seats, SUMMARY_PLACEHOLDER)
    }

    #[must_use]
    pub fn render_with(&self, placeholder: &str) -> String {
        render_seat_list(&self.seats, placeholder)
    }
}

impl From<Vec<SeatId>> for PersistedSelection {
    fn from(seats: Vec<SeatId>) -> Self {
        Self { seats }
    }
}

/// Read the handed-off selection. Missing or corrupt records yield an
/// empty selection.
pub fn load_selection<S: SessionStore + ?Sized>(store: &S) -> PersistedSelection {
    let raw = match store.get_item(SELECTED_SEATS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return PersistedSelection::default(),
        Err(err) => {
            log::warn!("could not read `{SELECTED_SEATS_KEY}`: {err}");
            return PersistedSelection::default();
        }
    };
    match serde_json::from_str::<Selection>(&raw) {
        Ok(selection) => PersistedSelection::from(Vec::from(selection)),
        Err(err) => {
            log::warn!("ignoring unparsable `{SELECTED_SEATS_KEY}` record: {err}");
            PersistedSelection::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySessionStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<View>>,
    }

    impl PageNavigator for RecordingNavigator {
        fn navigate(&self, view: View) {
            self.visits.borrow_mut().push(view);
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    struct FullStore;

    impl SessionStore for FullStore {
        type Error = QuotaExceeded;

        fn get_item(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(QuotaExceeded)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err(QuotaExceeded)
        }

        fn remove_item(&self, _key: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn selection(ids: &[&str]) -> Selection {
        ids.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn empty_selection_blocks_hand_off() {
        let store = MemorySessionStore::new();
        let nav = RecordingNavigator::default();
        let err = proceed(&Selection::new(), &store, &nav).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "Please select at least one seat");
        assert!(store.is_empty());
        assert!(nav.visits.borrow().is_empty());
    }

    #[test]
    fn hand_off_writes_ordered_record_then_navigates() {
        let store = MemorySessionStore::new();
        let nav = RecordingNavigator::default();
        proceed(&selection(&["14C", "12A"]), &store, &nav).unwrap();
        assert_eq!(
            store.get_item(SELECTED_SEATS_KEY).unwrap().as_deref(),
            Some(r#"["14C","12A"]"#)
        );
        assert_eq!(*nav.visits.borrow(), vec![View::Payment]);
    }

    #[test]
    fn failed_write_does_not_navigate() {
        let nav = RecordingNavigator::default();
        let err = proceed(&selection(&["1A"]), &FullStore, &nav).unwrap_err();
        assert!(matches!(err, CheckoutError::Storage(_)));
        assert!(!err.is_user_error());
        assert!(nav.visits.borrow().is_empty());
    }

    #[test]
    fn load_degrades_to_empty() {
        let store = MemorySessionStore::new();
        assert_eq!(load_selection(&store).render(), "-");

        store.set_item(SELECTED_SEATS_KEY, "not json").unwrap();
        assert!(load_selection(&store).is_empty());

        store.set_item(SELECTED_SEATS_KEY, r#"["12A","??"]"#).unwrap();
        assert!(load_selection(&store).is_empty());

        assert!(load_selection(&FullStore).is_empty());
    }

    #[test]
    fn load_reads_handed_off_seats() {
        let store = MemorySessionStore::new();
        store.set_item(SELECTED_SEATS_KEY, r#"["12A","14C"]"#).unwrap();
        let loaded = load_selection(&store);
        assert_eq!(loaded.render(), "12A, 14C");
        assert_eq!(loaded.render_with("None"), "12A, 14C");
    }

    #[test]
    fn load_collapses_repeated_seats() {
        let store = MemorySessionStore::new();
        store.set_item(SELECTED_SEATS_KEY, r#"["1A","1A"]"#).unwrap();
        let loaded = load_selection(&store);
        assert_eq!(loaded.render(), "1A");
        assert_eq!(loaded.seats().len(), 1);
    }
}
