use crate::components::alert::Alert;
use crate::components::busy_button::BusyButton;
use crate::components::seat_map::SeatGrid;
use crate::components::selection_summary::SelectionSummary;
use crate::flow::browser_flow;
use skyfare_core::constants::SEAT_LIST_PLACEHOLDER;
use skyfare_core::{CheckoutError, SeatId, SeatPicker, SeatStatus};
use yew::prelude::*;

fn checkout_error_message(err: &CheckoutError) -> AttrValue {
    if err.is_user_error() {
        AttrValue::from(err.to_string())
    } else {
        log::error!("seat hand-off failed: {err}");
        AttrValue::from("We could not save your seats. Please try again.")
    }
}

/// Seat map with the running selection and the hand-off to payment.
#[function_component(SeatsPage)]
pub fn seats_page() -> Html {
    let picker = use_state(|| SeatPicker::new(crate::config::seat_map()));
    let warning = use_state(|| None::<AttrValue>);

    let on_toggle = {
        let picker = picker.clone();
        let warning = warning.clone();
        Callback::from(move |id: SeatId| {
            let mut next = (*picker).clone();
            if next.click(&id).changed() {
                picker.set(next);
                warning.set(None);
            }
        })
    };

    let on_proceed = {
        let picker = picker.clone();
        let warning = warning.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = browser_flow().proceed(picker.selection()) {
                warning.set(Some(checkout_error_message(&err)));
            }
        })
    };

    let selection = picker.selection();
    let available = picker.map().count(SeatStatus::Available);

    html! {
        <section id="seats" class="page seat-selection">
            <h1>{ "Choose Your Seats" }</h1>
            <ul class="seat-legend">
                <li><span class="seat available"></span>{ "Available" }</li>
                <li><span class="seat selected"></span>{ "Selected" }</li>
                <li><span class="seat reserved"></span>{ "Reserved" }</li>
            </ul>
            <SeatGrid map={picker.map().clone()} on_toggle={on_toggle} />
            <div class="seat-sidebar glass-card">
                <SelectionSummary
                    seats={selection.as_slice().to_vec()}
                    placeholder={SEAT_LIST_PLACEHOLDER}
                    id="selected-seats-list"
                    label={AttrValue::from("Selected seats: ")}
                />
                <p class="seat-count">{ format!("{} selected · {available} still open", selection.len()) }</p>
                <Alert message={(*warning).clone()} />
                <BusyButton
                    id={AttrValue::from("proceed-payment")}
                    label="Proceed to Payment"
                    onclick={on_proceed}
                />
            </div>
        </section>
    }
}
