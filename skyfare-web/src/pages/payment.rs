use crate::components::alert::Alert;
use crate::components::busy_button::BusyButton;
use crate::components::card_form::CardFormView;
use crate::components::order_summary::OrderSummary;
use crate::flow::{browser_flow, payment_processor, reference_seed};
use crate::hooks::{replace_task, use_task_slot};
use skyfare_core::{
    CardForm, PaymentError, PaymentMethod, PaymentOrder, PaymentProcessor, PersistedSelection,
    TaskError, TripSummary,
};
use yew::platform::spawn_local;
use yew::prelude::*;

fn decline_message(err: &PaymentError) -> AttrValue {
    match err {
        PaymentError::Declined { reason } => {
            AttrValue::from(format!("Payment was declined: {reason}"))
        }
    }
}

/// Payment details and order summary for the seats carried over from the seat map.
#[function_component(PaymentPage)]
pub fn payment_page() -> Html {
    let selection = use_state(PersistedSelection::default);
    let trip = use_state(TripSummary::default);
    let method = use_state(PaymentMethod::default);
    let form = use_state(CardForm::default);
    let processing = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);
    let slot = use_task_slot();

    {
        let selection = selection.clone();
        let trip = trip.clone();
        use_effect_with((), move |()| {
            let flow = browser_flow();
            selection.set(flow.load_selection());
            trip.set(flow.load_trip());
            || {}
        });
    }

    let update_form = |apply: fn(&mut CardForm, &str)| {
        let form = form.clone();
        Callback::from(move |raw: String| {
            let mut next = (*form).clone();
            apply(&mut next, &raw);
            form.set(next);
        })
    };
    let on_holder = update_form(|f, raw| f.holder = raw.to_string());
    let on_number = update_form(CardForm::set_number);
    let on_expiry = update_form(CardForm::set_expiry);
    let on_cvv = update_form(CardForm::set_cvv);

    let on_method = {
        let method = method.clone();
        Callback::from(move |m: PaymentMethod| method.set(m))
    };

    let on_pay = {
        let selection = selection.clone();
        let method = method.clone();
        let form = form.clone();
        let processing = processing.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *processing {
                return;
            }
            let card_last4 = if *method == PaymentMethod::Card {
                form.last4()
            } else {
                None
            };
            let order = PaymentOrder {
                seats: selection.seats().to_vec(),
                method: *method,
                card_last4,
                reference_seed: reference_seed(),
            };
            processing.set(true);
            error.set(None);

            let task = payment_processor().submit(order);
            replace_task(&slot, task.cancel_handle());
            let processing = processing.clone();
            let error = error.clone();
            spawn_local(async move {
                match task.await {
                    Ok(Ok(receipt)) => {
                        log::info!("payment approved, reference {}", receipt.reference);
                        if let Err(err) = browser_flow().complete_payment(&receipt) {
                            log::error!("could not store receipt: {err}");
                            processing.set(false);
                            error.set(Some(AttrValue::from(
                                "Payment went through but the ticket could not be saved.",
                            )));
                        }
                    }
                    Ok(Err(err)) => {
                        log::warn!("{err}");
                        processing.set(false);
                        error.set(Some(decline_message(&err)));
                    }
                    Err(TaskError::Cancelled) => log::debug!("payment cancelled"),
                }
            });
        })
    };

    html! {
        <section id="payment" class="page payment">
            <h1>{ "Payment" }</h1>
            <div class="payment-layout">
                <CardFormView
                    form={(*form).clone()}
                    method={*method}
                    {on_method}
                    {on_holder}
                    {on_number}
                    {on_expiry}
                    {on_cvv}
                />
                <OrderSummary trip={(*trip).clone()} seats={selection.seats().to_vec()}>
                    <Alert message={(*error).clone()} />
                    <BusyButton
                        id={AttrValue::from("pay-now")}
                        label="Pay Now"
                        busy={*processing}
                        onclick={on_pay}
                    />
                </OrderSummary>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_reason_is_shown() {
        let err = PaymentError::Declined {
            reason: "insufficient funds".into(),
        };
        assert_eq!(
            decline_message(&err).as_str(),
            "Payment was declined: insufficient funds"
        );
    }
}
