use skyfare_core::{Seat, SeatId, SeatMap, SeatStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SeatGridProps {
    pub map: SeatMap,
    pub on_toggle: Callback<SeatId>,
}

fn seat_cell(seat: &Seat, on_toggle: &Callback<SeatId>) -> Html {
    let onclick = {
        let on_toggle = on_toggle.clone();
        let id = seat.id.clone();
        let clickable = seat.is_clickable();
        Callback::from(move |_: MouseEvent| {
            if clickable {
                on_toggle.emit(id.clone());
            }
        })
    };
    let status = seat.status;
    html! {
        <button
            type="button"
            class={classes!("seat", status.class_name())}
            data-seat={seat.id.to_string()}
            disabled={status == SeatStatus::Reserved}
            aria-pressed={(status == SeatStatus::Selected).to_string()}
            aria-label={format!("Seat {}, {}", seat.id, status.class_name())}
            {onclick}
        >
            { seat.id.to_string() }
        </button>
    }
}

/// Cabin grid; rows in order with an aisle gap after the configured column.
#[function_component(SeatGrid)]
pub fn seat_grid(props: &SeatGridProps) -> Html {
    let aisle = props.map.aisle_index();
    let header = props.map.columns().iter().enumerate().map(|(idx, column)| {
        html! {
            <>
                <span class="seat-column-label">{ column.to_string() }</span>
                if aisle == Some(idx) {
                    <span class="seat-aisle" aria-hidden="true"></span>
                }
            </>
        }
    });
    let rows = props.map.rows().map(|row| {
        let row_number = row.first().map(|seat| seat.id.row()).unwrap_or_default();
        html! {
            <div class="seat-row" key={row_number.to_string()}>
                <span class="seat-row-label">{ row_number }</span>
                { for row.iter().enumerate().map(|(idx, seat)| html! {
                    <>
                        { seat_cell(seat, &props.on_toggle) }
                        if aisle == Some(idx) {
                            <span class="seat-aisle" aria-hidden="true"></span>
                        }
                    </>
                }) }
            </div>
        }
    });

    html! {
        <div class="seat-map" role="group" aria-label="Seat map">
            <div class="seat-row seat-header">
                <span class="seat-row-label"></span>
                { for header }
            </div>
            { for rows }
        </div>
    }
}
