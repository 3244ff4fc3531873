use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    booking::BookingPage, home::HomePage, not_found::NotFound, payment::PaymentPage,
    seats::SeatsPage, ticket::TicketPage,
};
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Page shell for a recognised route.
#[must_use]
pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Booking => html! { <BookingPage /> },
        Route::Seats => html! { <SeatsPage /> },
        Route::Payment => html! { <PaymentPage /> },
        Route::Ticket => html! { <TicketPage /> },
        Route::NotFound => html! { <NotFound /> },
    };
    html! {
        <>
            <Header current={route} />
            <main id="main" role="main">{ page }</main>
            <Footer />
        </>
    }
}
