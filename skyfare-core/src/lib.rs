//! Skyfare Booking Core
//!
//! Platform-agnostic model for the Skyfare seat-selection and checkout flow.
//! This crate holds the seat map, selection tracking, the session hand-off
//! between pages and the simulated payment, without any browser dependency.

pub mod checkout;
pub mod config;
pub mod constants;
pub mod memory;
pub mod payment;
pub mod picker;
pub mod search;
pub mod seat;
pub mod selection;
pub mod task;
pub mod view;

// Re-export commonly used types
pub use checkout::{CheckoutError, PersistedSelection, load_selection, proceed};
pub use config::{ConfigError, FlowConfig};
pub use memory::MemorySessionStore;
pub use payment::{
    BookingReference, CardForm, PaymentError, PaymentMethod, PaymentOrder, PaymentProcessor,
    PaymentReceipt, SimulatedPaymentProcessor, format_card_number, format_cvv, format_expiry,
};
pub use picker::{ClickOutcome, SeatPicker};
pub use search::{CabinClass, FlightOffer, FlightSearch, SearchError, TripSummary};
pub use seat::{Seat, SeatId, SeatIdError, SeatLayout, SeatMap, SeatMapError, SeatStatus};
pub use selection::{Selection, render_seat_list};
pub use task::{CancelHandle, Delay, Task, TaskError};
pub use view::{PageNavigator, View};

use constants::{
    BOOKING_RECEIPT_KEY, FLIGHT_PRICE_KEY, SEARCH_FROM_KEY, SEARCH_TO_KEY, SELECTED_CLASS_KEY,
    SELECTED_FLIGHT_KEY,
};
use thiserror::Error;

/// Storage error erased at the flow boundary.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Per-tab key/value storage that survives page loads within one session.
/// Platform-specific implementations should provide this
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be accessed.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a value
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be accessed.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("session storage error: {0}")]
    Storage(#[source] BoxedError),
}

/// Page-to-page hand-offs of the booking site over one session store.
pub struct BookingFlow<S, N>
where
    S: SessionStore,
    N: PageNavigator,
{
    store: S,
    navigator: N,
}

impl<S, N> BookingFlow<S, N>
where
    S: SessionStore,
    N: PageNavigator,
{
    pub const fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn navigate(&self, view: View) {
        self.navigator.navigate(view);
    }

    /// Store the search endpoints and open the flight list.
    ///
    /// # Errors
    ///
    /// Returns an error when an endpoint is blank or the store rejects a write.
    pub fn submit_search(&self, search: &FlightSearch) -> Result<(), FlowError> {
        let (origin, destination) = search.endpoints()?;
        self.write(SEARCH_FROM_KEY, origin)?;
        self.write(SEARCH_TO_KEY, destination)?;
        log::info!("searching flights {origin} -> {destination}");
        self.navigator.navigate(View::Booking);
        Ok(())
    }

    /// Store the booked flight and open the seat map.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write.
    pub fn choose_flight(&self, offer: &FlightOffer) -> Result<(), FlowError> {
        self.write(SELECTED_FLIGHT_KEY, &offer.route)?;
        self.write(FLIGHT_PRICE_KEY, &offer.price)?;
        log::info!("booked flight {}", offer.id);
        self.navigator.navigate(View::Seats);
        Ok(())
    }

    /// Store the cabin class. The caller decides when to move on.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn choose_class(&self, class: CabinClass) -> Result<(), FlowError> {
        self.write(SELECTED_CLASS_KEY, class.label())
    }

    /// Hand the selection off to the payment page.
    ///
    /// # Errors
    ///
    /// See [`checkout::proceed`].
    pub fn proceed(&self, selection: &Selection) -> Result<(), CheckoutError> {
        checkout::proceed(selection, &self.store, &self.navigator)
    }

    #[must_use]
    pub fn load_selection(&self) -> PersistedSelection {
        checkout::load_selection(&self.store)
    }

    #[must_use]
    pub fn load_trip(&self) -> TripSummary {
        TripSummary {
            origin: self.read(SEARCH_FROM_KEY),
            destination: self.read(SEARCH_TO_KEY),
            flight: self.read(SELECTED_FLIGHT_KEY),
            price: self.read(FLIGHT_PRICE_KEY),
            cabin: self.read(SELECTED_CLASS_KEY),
        }
    }

    /// Store the receipt and open the ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be encoded or stored.
    pub fn complete_payment(&self, receipt: &PaymentReceipt) -> Result<(), FlowError> {
        let record = serde_json::to_string(receipt)?;
        self.write(BOOKING_RECEIPT_KEY, &record)?;
        log::info!("payment approved, booking {}", receipt.reference);
        self.navigator.navigate(View::Ticket);
        Ok(())
    }

    #[must_use]
    pub fn load_receipt(&self) -> Option<PaymentReceipt> {
        let raw = self.read(BOOKING_RECEIPT_KEY)?;
        serde_json::from_str(&raw)
            .map_err(|err| log::warn!("ignoring unparsable `{BOOKING_RECEIPT_KEY}`: {err}"))
            .ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), FlowError> {
        self.store
            .set_item(key, value)
            .map_err(|err| FlowError::Storage(Box::new(err)))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store
            .get_item(key)
            .map_err(|err| log::warn!("could not read `{key}`: {err}"))
            .ok()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        visits: Rc<RefCell<Vec<View>>>,
    }

    impl PageNavigator for RecordingNavigator {
        fn navigate(&self, view: View) {
            self.visits.borrow_mut().push(view);
        }
    }

    fn flow() -> (
        BookingFlow<MemorySessionStore, RecordingNavigator>,
        RecordingNavigator,
    ) {
        let nav = RecordingNavigator::default();
        (
            BookingFlow::new(MemorySessionStore::new(), nav.clone()),
            nav,
        )
    }

    #[test]
    fn search_requires_both_endpoints() {
        let (flow, nav) = flow();
        let search = FlightSearch {
            origin: "JFK".into(),
            destination: String::new(),
        };
        assert!(matches!(
            flow.submit_search(&search),
            Err(FlowError::Search(SearchError::MissingEndpoints))
        ));
        assert!(flow.store().is_empty());
        assert!(nav.visits.borrow().is_empty());
    }

    #[test]
    fn valid_search_navigates_without_waiting() {
        let (flow, nav) = flow();
        flow.submit_search(&FlightSearch {
            origin: "JFK".into(),
            destination: "LHR".into(),
        })
        .unwrap();
        assert_eq!(*nav.visits.borrow(), vec![View::Booking]);
        assert_eq!(
            flow.store().get_item(SEARCH_TO_KEY).unwrap().as_deref(),
            Some("LHR")
        );
    }

    #[test]
    fn search_flight_and_class_feed_trip_summary() {
        let (flow, nav) = flow();
        flow.submit_search(&FlightSearch {
            origin: " JFK".into(),
            destination: "LHR".into(),
        })
        .unwrap();
        flow.choose_flight(&FlightOffer {
            id: "sk101".into(),
            route: "New York → London".into(),
            price: "$849".into(),
            departs: String::new(),
            duration: String::new(),
        })
        .unwrap();
        flow.choose_class(CabinClass::Business).unwrap();

        let trip = flow.load_trip();
        assert_eq!(trip.origin.as_deref(), Some("JFK"));
        assert_eq!(trip.destination.as_deref(), Some("LHR"));
        assert_eq!(trip.flight.as_deref(), Some("New York → London"));
        assert_eq!(trip.price.as_deref(), Some("$849"));
        assert_eq!(trip.cabin.as_deref(), Some("Business"));
        assert_eq!(*nav.visits.borrow(), vec![View::Booking, View::Seats]);
    }

    #[test]
    fn receipt_round_trips_through_store() {
        let (flow, nav) = flow();
        assert!(flow.load_receipt().is_none());
        let receipt = PaymentReceipt {
            reference: BookingReference::from_seed(1),
            seats: vec!["3C".parse().unwrap()],
            method: PaymentMethod::Card,
            card_last4: Some("4242".into()),
        };
        flow.complete_payment(&receipt).unwrap();
        assert_eq!(flow.load_receipt(), Some(receipt));
        assert_eq!(*nav.visits.borrow(), vec![View::Ticket]);
    }

    #[test]
    fn corrupt_receipt_reads_as_missing() {
        let (flow, _nav) = flow();
        flow.store()
            .set_item(constants::BOOKING_RECEIPT_KEY, "{")
            .unwrap();
        assert!(flow.load_receipt().is_none());
    }
}
