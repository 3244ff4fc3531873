use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use skyfare_core::constants::{BOOKING_RECEIPT_KEY, SELECTED_SEATS_KEY};
use skyfare_core::{
    BookingFlow, CheckoutError, ClickOutcome, Delay, MemorySessionStore, PageNavigator,
    PaymentMethod, PaymentOrder, PaymentProcessor, SeatId, SeatMap, SeatPicker, SeatStatus,
    Selection, SessionStore, SimulatedPaymentProcessor, Task, TaskError, View,
};
use std::cell::RefCell;
use std::collections::HashMap;
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

struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        futures::future::ready(()).boxed_local()
    }
}

/// Never fires, so tasks built on it only finish when cancelled.
struct StalledDelay;

impl Delay for StalledDelay {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        futures::future::pending().boxed_local()
    }
}

fn load_seat_map() -> SeatMap {
    SeatMap::from_json(include_str!("../../skyfare-web/static/data/seat_map.json")).unwrap()
}

fn id(s: &str) -> SeatId {
    s.parse().unwrap()
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
fn toggle_sequences_keep_odd_counts() {
    let pool: Vec<SeatId> = ["1A", "1B", "2C", "3D", "4E", "5F", "12A", "14C"]
        .into_iter()
        .map(id)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EA7);

    for _ in 0..200 {
        let len = (rng.next_u32() % 40) as usize;
        let mut selection = Selection::new();
        let mut counts: HashMap<&SeatId, usize> = HashMap::new();
        let mut last_selected_at: HashMap<&SeatId, usize> = HashMap::new();

        for step in 0..len {
            let seat = &pool[rng.next_u32() as usize % pool.len()];
            let selected = selection.toggle(seat.clone());
            *counts.entry(seat).or_default() += 1;
            if selected {
                last_selected_at.insert(seat, step);
            }
        }

        let mut expected: Vec<&SeatId> = counts
            .iter()
            .filter(|(_, n)| *n % 2 == 1)
            .map(|(seat, _)| *seat)
            .collect();
        expected.sort_by_key(|seat| last_selected_at[seat]);
        let actual: Vec<&SeatId> = selection.iter().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn selecting_three_seats_lists_them_in_click_order() {
    let mut picker = SeatPicker::new(load_seat_map());
    for seat in ["1A", "1B", "5F"] {
        assert_eq!(picker.click(&id(seat)), ClickOutcome::Selected);
    }
    assert_eq!(picker.selection().render(), "1A, 1B, 5F");
    assert_eq!(
        picker.map().status_of(&id("5F")),
        Some(SeatStatus::Selected)
    );
}

#[test]
fn select_then_deselect_blocks_checkout() {
    let (flow, nav) = flow();
    let mut picker = SeatPicker::new(load_seat_map());
    picker.click(&id("3B"));
    picker.click(&id("3B"));
    assert!(picker.selection().is_empty());
    assert_eq!(picker.selection().render(), "None");

    let err = flow.proceed(picker.selection()).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptySelection));
    assert_eq!(err.to_string(), "Please select at least one seat");
    assert!(flow.store().get_item(SELECTED_SEATS_KEY).unwrap().is_none());
    assert!(nav.visits.borrow().is_empty());
}

#[test]
fn reserved_seats_in_static_layout_ignore_clicks() {
    let map = load_seat_map();
    let reserved: Vec<SeatId> = map
        .seats()
        .filter(|seat| seat.status == SeatStatus::Reserved)
        .map(|seat| seat.id.clone())
        .collect();
    assert!(!reserved.is_empty());

    let mut picker = SeatPicker::new(map);
    for seat in &reserved {
        assert_eq!(picker.click(seat), ClickOutcome::Ignored);
    }
    assert!(picker.selection().is_empty());
}

#[test]
fn hand_off_round_trips_to_payment_view() {
    let (seat_flow, nav) = flow();
    let selection: Selection = ["12A", "14C"].into_iter().map(id).collect();
    seat_flow.proceed(&selection).unwrap();
    assert_eq!(*nav.visits.borrow(), vec![View::Payment]);

    // The payment page is a separate load sharing only the session store.
    let payment_flow = BookingFlow::new(seat_flow.store().clone(), RecordingNavigator::default());
    assert_eq!(payment_flow.load_selection().render(), "12A, 14C");
}

#[test]
fn payment_view_without_record_shows_placeholder() {
    let (flow, _nav) = flow();
    assert_eq!(flow.load_selection().render(), "-");
    flow.store()
        .set_item(SELECTED_SEATS_KEY, r#"{"seats":1}"#)
        .unwrap();
    assert_eq!(flow.load_selection().render(), "-");
}

#[test]
fn payment_completes_and_opens_ticket() {
    let (flow, nav) = flow();
    flow.proceed(&["7D"].into_iter().map(id).collect())
        .unwrap();
    let seats = flow.load_selection();

    let processor = SimulatedPaymentProcessor::new(NoDelay, 2000);
    let task = processor.submit(PaymentOrder {
        seats: seats.seats().to_vec(),
        method: PaymentMethod::Card,
        card_last4: Some("1881".into()),
        reference_seed: 99,
    });
    let receipt = block_on(task).unwrap().unwrap();
    flow.complete_payment(&receipt).unwrap();

    assert!(flow.store().get_item(BOOKING_RECEIPT_KEY).unwrap().is_some());
    assert_eq!(flow.load_receipt().unwrap().seats, vec![id("7D")]);
    assert_eq!(*nav.visits.borrow(), vec![View::Payment, View::Ticket]);
}

#[test]
fn cancelled_payment_never_resolves_a_receipt() {
    let processor = SimulatedPaymentProcessor::new(StalledDelay, 2000);
    let task = processor.submit(PaymentOrder {
        seats: vec![id("1A")],
        method: PaymentMethod::GooglePay,
        card_last4: None,
        reference_seed: 1,
    });
    task.cancel_handle().cancel();
    assert!(matches!(block_on(task), Err(TaskError::Cancelled)));
}

#[test]
fn delayed_task_yields_value() {
    let task = Task::after(&NoDelay, 500, View::Seats);
    assert_eq!(block_on(task), Ok(View::Seats));
}
