use skyfare_core::{SeatId, render_seat_list};
use yew::prelude::*;

/// Comma-separated seat listing, or the placeholder when empty.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seats: Vec<SeatId>,
    pub placeholder: AttrValue,
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(SelectionSummary)]
pub fn selection_summary(p: &Props) -> Html {
    let text = render_seat_list(&p.seats, &p.placeholder);
    html! {
        <p class="selection-summary" aria-live="polite">
            if let Some(label) = p.label.clone() {
                <span class="summary-label">{ label }</span>
            }
            <span id={p.id.clone()}>{ text }</span>
        </p>
    }
}
