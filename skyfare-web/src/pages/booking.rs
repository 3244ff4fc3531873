use crate::components::alert::Alert;
use crate::flow::{TimerDelay, browser_flow};
use crate::hooks::{replace_task, use_task_slot};
use skyfare_core::{CabinClass, FlightOffer, Task, View};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FlightCardProps {
    pub offer: FlightOffer,
    pub on_book: Callback<FlightOffer>,
}

#[function_component(FlightCard)]
pub fn flight_card(p: &FlightCardProps) -> Html {
    let onclick = {
        let on_book = p.on_book.clone();
        let offer = p.offer.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(offer.clone()))
    };
    html! {
        <article class="flight-card glass-card" data-flight={p.offer.id.clone()}>
            <h3 class="flight-route">{ p.offer.route.clone() }</h3>
            <p class="flight-meta">{ format!("{} · {}", p.offer.departs, p.offer.duration) }</p>
            <p class="flight-price">{ p.offer.price.clone() }</p>
            <button type="button" class="neon-button" {onclick}><span>{ "Book Now" }</span></button>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClassCardProps {
    pub cabin: CabinClass,
    pub selected: bool,
    pub on_select: Callback<CabinClass>,
}

#[function_component(ClassCard)]
pub fn class_card(p: &ClassCardProps) -> Html {
    let onclick = {
        let on_select = p.on_select.clone();
        let cabin = p.cabin;
        Callback::from(move |_: MouseEvent| on_select.emit(cabin))
    };
    html! {
        <article class={classes!("class-card", "glass-card", p.selected.then_some("selected"))}>
            <h3>{ p.cabin.label() }</h3>
            <p>{ p.cabin.blurb() }</p>
            <button type="button" class="neon-button" {onclick}><span>{ "Select" }</span></button>
        </article>
    }
}

/// Flight results and cabin class choice; both lead to the seat map.
#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let offers = use_state(crate::config::flight_offers);
    let selected_class = use_state(|| None::<CabinClass>);
    let warning = use_state(|| None::<AttrValue>);
    let slot = use_task_slot();

    let on_book = {
        let warning = warning.clone();
        Callback::from(move |offer: FlightOffer| {
            if let Err(err) = browser_flow().choose_flight(&offer) {
                log::error!("could not store flight {}: {err}", offer.id);
                warning.set(Some(AttrValue::from(
                    "We could not save your flight. Please try again.",
                )));
            }
        })
    };

    let on_select_class = {
        let selected_class = selected_class.clone();
        let warning = warning.clone();
        Callback::from(move |class: CabinClass| {
            if let Err(err) = browser_flow().choose_class(class) {
                log::error!("could not store cabin class: {err}");
                warning.set(Some(AttrValue::from(
                    "We could not save your cabin class. Please try again.",
                )));
                return;
            }
            selected_class.set(Some(class));
            let delay_ms = crate::config::flow_config().class_redirect_ms;
            let task = Task::after(&TimerDelay, delay_ms, View::Seats);
            replace_task(&slot, task.cancel_handle());
            spawn_local(async move {
                if let Ok(view) = task.await {
                    browser_flow().navigate(view);
                }
            });
        })
    };

    html! {
        <section id="booking" class="page">
            <h1>{ "Available Flights" }</h1>
            <Alert message={(*warning).clone()} />
            <div class="flight-list">
                { for offers.iter().map(|offer| html! {
                    <FlightCard key={offer.id.clone()} offer={offer.clone()} on_book={on_book.clone()} />
                }) }
            </div>
            <h2>{ "Choose Your Class" }</h2>
            <div class="class-list">
                { for CabinClass::ALL.iter().map(|&cabin| html! {
                    <ClassCard
                        key={cabin.label()}
                        {cabin}
                        selected={*selected_class == Some(cabin)}
                        on_select={on_select_class.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
