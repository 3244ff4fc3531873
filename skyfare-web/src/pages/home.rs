use crate::components::alert::Alert;
use crate::flow::browser_flow;
use skyfare_core::{FlightSearch, FlowError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn search_error_message(err: &FlowError) -> AttrValue {
    match err {
        FlowError::Search(err) => AttrValue::from(err.to_string()),
        other => {
            log::error!("search hand-off failed: {other}");
            AttrValue::from("We could not save your search. Please try again.")
        }
    }
}

/// Landing page with the origin/destination search form.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let search = use_state(FlightSearch::default);
    let warning = use_state(|| None::<AttrValue>);

    let on_origin = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*search).clone();
            next.origin = input.value();
            search.set(next);
        })
    };
    let on_destination = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*search).clone();
            next.destination = input.value();
            search.set(next);
        })
    };
    let on_swap = {
        let search = search.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*search).clone();
            next.swap();
            search.set(next);
        })
    };
    let on_submit = {
        let search = search.clone();
        let warning = warning.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match browser_flow().submit_search(&search) {
                Ok(()) => warning.set(None),
                Err(err) => warning.set(Some(search_error_message(&err))),
            }
        })
    };

    html! {
        <section id="home" class="page hero">
            <div class="hero-copy">
                <h1>{ "Fly beyond the ordinary" }</h1>
                <p>{ "Search routes, pick your seat and board in style." }</p>
            </div>
            <form class="search-form glass-card" onsubmit={on_submit}>
                <label>
                    { "From" }
                    <input class="glow-input" type="text" placeholder="Origin Airport"
                        value={search.origin.clone()} oninput={on_origin} />
                </label>
                <button type="button" class="swap-icon" aria-label="Swap origin and destination" onclick={on_swap}>
                    { "⇄" }
                </button>
                <label>
                    { "To" }
                    <input class="glow-input" type="text" placeholder="Destination Airport"
                        value={search.destination.clone()} oninput={on_destination} />
                </label>
                <button type="submit" class="neon-button search-btn"><span>{ "Search Flights" }</span></button>
            </form>
            <Alert message={(*warning).clone()} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfare_core::SearchError;

    #[test]
    fn search_errors_surface_their_message() {
        let msg = search_error_message(&FlowError::Search(SearchError::MissingEndpoints));
        assert_eq!(msg.as_str(), "Please fill in origin and destination");
    }
}
