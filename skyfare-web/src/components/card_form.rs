use skyfare_core::{CardForm, PaymentMethod};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub form: CardForm,
    pub method: PaymentMethod,
    pub on_method: Callback<PaymentMethod>,
    pub on_holder: Callback<String>,
    pub on_number: Callback<String>,
    pub on_expiry: Callback<String>,
    pub on_cvv: Callback<String>,
}

fn input_value(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        cb.emit(input.value());
    })
}

/// Payment method picker and card entry with live preview.
#[function_component(CardFormView)]
pub fn card_form_view(p: &Props) -> Html {
    let options = PaymentMethod::ALL.iter().map(|&method| {
        let onclick = {
            let on_method = p.on_method.clone();
            Callback::from(move |_: MouseEvent| on_method.emit(method))
        };
        let active = method == p.method;
        html! {
            <button
                type="button"
                class={classes!("payment-option", active.then_some("active"))}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { method.label() }
            </button>
        }
    });

    html! {
        <section class="payment-form glass-card">
            <h3>{ "Payment Method" }</h3>
            <div class="payment-options" role="group">{ for options }</div>
            if p.method == PaymentMethod::Card {
                <>
                <div class="card-preview" aria-hidden="true">
                    <span class="card-number">{ p.form.preview().to_string() }</span>
                    <span class="card-holder">{ p.form.holder.clone() }</span>
                </div>
                <form class="card-input-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label>
                        { "Cardholder Name" }
                        <input class="glow-input" type="text" placeholder="Full name"
                            value={p.form.holder.clone()} oninput={input_value(&p.on_holder)} />
                    </label>
                    <label>
                        { "Card Number" }
                        <input class="glow-input" type="text" inputmode="numeric" placeholder="1234 5678 9012 3456"
                            value={p.form.number().to_string()} oninput={input_value(&p.on_number)} />
                    </label>
                    <div class="card-row">
                        <label>
                            { "Expiry" }
                            <input class="glow-input" type="text" inputmode="numeric" placeholder="MM/YY"
                                value={p.form.expiry().to_string()} oninput={input_value(&p.on_expiry)} />
                        </label>
                        <label>
                            { "CVV" }
                            <input class="glow-input" type="password" inputmode="numeric" placeholder="123"
                                value={p.form.cvv().to_string()} oninput={input_value(&p.on_cvv)} />
                        </label>
                    </div>
                </form>
                </>
            } else {
                <p class="payment-redirect">
                    { format!("You will confirm with {} after pressing pay.", p.method.label()) }
                </p>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(method: PaymentMethod, form: CardForm) -> Props {
        Props {
            form,
            method,
            on_method: Callback::noop(),
            on_holder: Callback::noop(),
            on_number: Callback::noop(),
            on_expiry: Callback::noop(),
            on_cvv: Callback::noop(),
        }
    }

    #[test]
    fn card_method_shows_preview_placeholder() {
        let html = block_on(
            LocalServerRenderer::<CardFormView>::with_props(props(
                PaymentMethod::Card,
                CardForm::default(),
            ))
            .render(),
        );
        assert!(html.contains("**** **** **** 1234"));
        assert!(html.contains("payment-option active"));
        assert!(html.contains("MM/YY"));
    }

    #[test]
    fn preview_follows_formatted_number() {
        let mut form = CardForm::default();
        form.set_number("4242424242424242");
        let html = block_on(
            LocalServerRenderer::<CardFormView>::with_props(props(PaymentMethod::Card, form))
                .render(),
        );
        assert!(html.contains("4242 4242 4242 4242"));
    }

    #[test]
    fn wallet_methods_hide_card_inputs() {
        let html = block_on(
            LocalServerRenderer::<CardFormView>::with_props(props(
                PaymentMethod::PayPal,
                CardForm::default(),
            ))
            .render(),
        );
        assert!(!html.contains("card-input-form"));
        assert!(html.contains("You will confirm with PayPal"));
    }
}
