pub mod booking;
pub mod home;
pub mod not_found;
pub mod payment;
pub mod seats;
pub mod ticket;
