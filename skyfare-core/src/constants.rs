//! Session keys, placeholders and user-facing messages shared by every view.

/// Session key holding the JSON array of selected seat ids.
pub const SELECTED_SEATS_KEY: &str = "selectedSeats";
/// Session key holding the origin airport entered on the search form.
pub const SEARCH_FROM_KEY: &str = "searchFrom";
/// Session key holding the destination airport entered on the search form.
pub const SEARCH_TO_KEY: &str = "searchTo";
/// Session key holding the route text of the booked flight.
pub const SELECTED_FLIGHT_KEY: &str = "selectedFlight";
/// Session key holding the price text of the booked flight.
pub const FLIGHT_PRICE_KEY: &str = "flightPrice";
/// Session key holding the chosen cabin class label.
pub const SELECTED_CLASS_KEY: &str = "selectedClass";
/// Session key holding the JSON payment receipt.
pub const BOOKING_RECEIPT_KEY: &str = "bookingReceipt";

/// Placeholder for the seat page's selected-seats list.
pub const SEAT_LIST_PLACEHOLDER: &str = "None";
/// Placeholder for order summary fields.
pub const SUMMARY_PLACEHOLDER: &str = "-";
/// Card preview shown until a number is typed.
pub const CARD_PREVIEW_PLACEHOLDER: &str = "**** **** **** 1234";

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one seat";
pub const MISSING_ENDPOINTS_MESSAGE: &str = "Please fill in origin and destination";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const DOWNLOADING_LABEL: &str = "Downloading...";
pub const DOWNLOAD_COMPLETE_MESSAGE: &str = "Ticket downloaded successfully!";

/// Separator between seat ids in rendered listings.
pub const SEAT_SEPARATOR: &str = ", ";
