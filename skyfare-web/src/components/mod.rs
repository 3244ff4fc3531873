pub mod alert;
pub mod busy_button;
pub mod card_form;
pub mod footer;
pub mod header;
pub mod order_summary;
pub mod seat_map;
pub mod selection_summary;
