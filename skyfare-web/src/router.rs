use skyfare_core::{PageNavigator, View};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/booking")]
    Booking,
    #[at("/seats")]
    Seats,
    #[at("/payment")]
    Payment,
    #[at("/ticket")]
    Ticket,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: View) -> Self {
        match view {
            View::Home => Self::Home,
            View::Booking => Self::Booking,
            View::Seats => Self::Seats,
            View::Payment => Self::Payment,
            View::Ticket => Self::Ticket,
        }
    }

    #[must_use]
    pub const fn to_view(&self) -> Option<View> {
        match self {
            Self::Home => Some(View::Home),
            Self::Booking => Some(View::Booking),
            Self::Seats => Some(View::Seats),
            Self::Payment => Some(View::Payment),
            Self::Ticket => Some(View::Ticket),
            Self::NotFound => None,
        }
    }
}

/// Full-document navigation, so every view starts from a fresh page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn navigate(&self, view: View) {
        let href = crate::paths::view_href(view);
        if let Err(err) = crate::dom::assign_location(&href) {
            log::error!(
                "navigation to {href} failed: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
}
