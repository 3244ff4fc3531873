//! Logical page identifiers and the navigation seam.

/// A distinct page load in the booking site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Booking,
    Seats,
    Payment,
    Ticket,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Booking,
        Self::Seats,
        Self::Payment,
        Self::Ticket,
    ];

    /// Root-anchored path of the view, before any deployment prefix.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Booking => "/booking",
            Self::Seats => "/seats",
            Self::Payment => "/payment",
            Self::Ticket => "/ticket",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Booking => "Flights",
            Self::Seats => "Seats",
            Self::Payment => "Payment",
            Self::Ticket => "Ticket",
        }
    }
}

/// Performs a full navigation to another view.
///
/// Navigation is one-way; implementations log failures instead of
/// returning them because nothing upstream can roll back a hand-off.
pub trait PageNavigator {
    fn navigate(&self, view: View);
}
