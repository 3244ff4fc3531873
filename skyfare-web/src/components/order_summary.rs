use skyfare_core::constants::SUMMARY_PLACEHOLDER;
use skyfare_core::{SeatId, TripSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub trip: TripSummary,
    pub seats: Vec<SeatId>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(OrderSummary)]
pub fn order_summary(p: &Props) -> Html {
    let row = |label: &'static str, value: String| {
        html! {
            <div class="summary-row">
                <dt>{ label }</dt>
                <dd>{ value }</dd>
            </div>
        }
    };
    html! {
        <aside class="order-summary glass-card">
            <h3>{ "Order Summary" }</h3>
            <dl>
                { row("Route", p.trip.route_label()) }
                { row("Flight", p.trip.flight_label().to_string()) }
                { row("Class", p.trip.cabin_label().to_string()) }
                <div class="summary-row">
                    <dt>{ "Seats" }</dt>
                    <dd>
                        <crate::components::selection_summary::SelectionSummary
                            seats={p.seats.clone()}
                            placeholder={SUMMARY_PLACEHOLDER}
                            id="summary-seats"
                        />
                    </dd>
                </div>
                { row("Total", p.trip.price_label().to_string()) }
            </dl>
            { for p.children.iter() }
        </aside>
    }
}
