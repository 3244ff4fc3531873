use crate::paths::view_href;
use skyfare_core::View;
use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "This gate does not exist. Head back to the departures board." }</p>
            <a class="neon-button" href={view_href(View::Home)}>{ "Back to home" }</a>
        </section>
    }
}
