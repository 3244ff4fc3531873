use crate::components::alert::{Alert, AlertKind};
use crate::components::busy_button::BusyButton;
use crate::components::selection_summary::SelectionSummary;
use crate::flow::{TimerDelay, browser_flow};
use crate::hooks::{replace_task, use_task_slot};
use skyfare_core::constants::{
    DOWNLOAD_COMPLETE_MESSAGE, DOWNLOADING_LABEL, SUMMARY_PLACEHOLDER,
};
use skyfare_core::{PaymentReceipt, Task, TripSummary};
use yew::platform::spawn_local;
use yew::prelude::*;

fn reference_text(receipt: Option<&PaymentReceipt>) -> String {
    receipt.map_or_else(
        || SUMMARY_PLACEHOLDER.to_string(),
        |r| r.reference.to_string(),
    )
}

/// Boarding pass for the completed booking.
#[function_component(TicketPage)]
pub fn ticket_page() -> Html {
    let receipt = use_state(|| None::<PaymentReceipt>);
    let trip = use_state(TripSummary::default);
    let downloading = use_state(|| false);
    let notice = use_state(|| None::<AttrValue>);
    let slot = use_task_slot();

    {
        let receipt = receipt.clone();
        let trip = trip.clone();
        use_effect_with((), move |()| {
            let flow = browser_flow();
            receipt.set(flow.load_receipt());
            trip.set(flow.load_trip());
            || {}
        });
    }

    let on_download = {
        let downloading = downloading.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            if *downloading {
                return;
            }
            downloading.set(true);
            notice.set(None);
            let ms = crate::config::flow_config().download_latency_ms;
            let task = Task::after(&TimerDelay, ms, ());
            replace_task(&slot, task.cancel_handle());
            let downloading = downloading.clone();
            let notice = notice.clone();
            spawn_local(async move {
                if task.await.is_ok() {
                    downloading.set(false);
                    notice.set(Some(AttrValue::Static(DOWNLOAD_COMPLETE_MESSAGE)));
                }
            });
        })
    };

    let on_print = Callback::from(|_: MouseEvent| {
        if let Err(err) = crate::dom::print() {
            log::error!("print failed: {}", crate::dom::js_error_message(&err));
        }
    });

    let seats = receipt
        .as_ref()
        .map(|r| r.seats.clone())
        .unwrap_or_default();
    let paid_with = receipt.as_ref().map_or_else(
        || SUMMARY_PLACEHOLDER.to_string(),
        |r| match &r.card_last4 {
            Some(last4) => format!("{} ending {last4}", r.method.label()),
            None => r.method.label().to_string(),
        },
    );

    html! {
        <section id="ticket" class="page ticket">
            <h1>{ "Your Ticket" }</h1>
            <article class="boarding-pass glass-card">
                <p class="booking-reference">
                    { "Booking reference: " }
                    <strong id="booking-reference">{ reference_text(receipt.as_ref()) }</strong>
                </p>
                <dl>
                    <dt>{ "Route" }</dt>
                    <dd>{ trip.route_label() }</dd>
                    <dt>{ "Flight" }</dt>
                    <dd>{ trip.flight_label().to_string() }</dd>
                    <dt>{ "Class" }</dt>
                    <dd>{ trip.cabin_label().to_string() }</dd>
                    <dt>{ "Seats" }</dt>
                    <dd>
                        <SelectionSummary
                            {seats}
                            placeholder={SUMMARY_PLACEHOLDER}
                            id="ticket-seats"
                        />
                    </dd>
                    <dt>{ "Paid with" }</dt>
                    <dd>{ paid_with }</dd>
                </dl>
            </article>
            <Alert message={(*notice).clone()} kind={AlertKind::Success} />
            <div class="ticket-actions">
                <BusyButton
                    id={AttrValue::from("download-ticket")}
                    label="Download Ticket"
                    busy_label={DOWNLOADING_LABEL}
                    busy={*downloading}
                    onclick={on_download}
                />
                <button type="button" class="neon-button secondary" onclick={on_print}>
                    <span>{ "Print" }</span>
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfare_core::{BookingReference, PaymentMethod};

    #[test]
    fn reference_falls_back_to_placeholder() {
        assert_eq!(reference_text(None), "-");
        let receipt = PaymentReceipt {
            reference: BookingReference::from_seed(7),
            seats: Vec::new(),
            method: PaymentMethod::PayPal,
            card_last4: None,
        };
        assert_eq!(reference_text(Some(&receipt)).len(), 6);
    }
}
