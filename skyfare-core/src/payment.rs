//! Payment form formatting and the simulated payment processor.
use crate::constants::CARD_PREVIEW_PLACEHOLDER;
use crate::seat::SeatId;
use crate::task::{Delay, Task};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Format a card number in groups of four, ignoring any whitespace typed.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let compact: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep digits only and insert the `MM/YY` slash once two digits exist.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{year}", &digits[..2])
    } else {
        digits
    }
}

/// Keep at most three digits.
#[must_use]
pub fn format_cvv(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(3).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
    GooglePay,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Card, Self::PayPal, Self::GooglePay];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit Card",
            Self::PayPal => "PayPal",
            Self::GooglePay => "Google Pay",
        }
    }
}

/// Card fields as typed, already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub holder: String,
    number: String,
    expiry: String,
    cvv: String,
}

impl CardForm {
    pub fn set_number(&mut self, raw: &str) {
        self.number = format_card_number(raw);
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = format_expiry(raw);
    }

    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = format_cvv(raw);
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Number shown on the card preview.
    #[must_use]
    pub fn preview(&self) -> &str {
        if self.number.is_empty() {
            CARD_PREVIEW_PLACEHOLDER
        } else {
            &self.number
        }
    }

    #[must_use]
    pub fn last4(&self) -> Option<String> {
        let compact: Vec<char> = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        (compact.len() >= 4).then(|| compact[compact.len() - 4..].iter().collect())
    }
}

const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REFERENCE_LEN: usize = 6;

/// Six-character booking reference printed on the ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let code = (0..REFERENCE_LEN)
            .map(|_| {
                let idx = rng.next_u32() as usize % REFERENCE_ALPHABET.len();
                char::from(REFERENCE_ALPHABET[idx])
            })
            .collect();
        Self(code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOrder {
    pub seats: Vec<SeatId>,
    pub method: PaymentMethod,
    pub card_last4: Option<String>,
    /// Seeds the booking reference.
    pub reference_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: BookingReference,
    pub seats: Vec<SeatId>,
    pub method: PaymentMethod,
    #[serde(default)]
    pub card_last4: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("payment declined: {reason}")]
    Declined { reason: String },
}

/// Submits an order and resolves with a receipt.
pub trait PaymentProcessor {
    fn submit(&self, order: PaymentOrder) -> Task<Result<PaymentReceipt, PaymentError>>;
}

/// Waits a fixed latency, then always approves.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentProcessor<D> {
    delay: D,
    latency_ms: u32,
}

impl<D: Delay> SimulatedPaymentProcessor<D> {
    pub const fn new(delay: D, latency_ms: u32) -> Self {
        Self { delay, latency_ms }
    }
}

impl<D: Delay> PaymentProcessor for SimulatedPaymentProcessor<D> {
    fn submit(&self, order: PaymentOrder) -> Task<Result<PaymentReceipt, PaymentError>> {
        let receipt = PaymentReceipt {
            reference: BookingReference::from_seed(order.reference_seed),
            seats: order.seats,
            method: order.method,
            card_last4: order.card_last4,
        };
        log::info!(
            "processing {} payment for {} seat(s)",
            receipt.method.label(),
            receipt.seats.len()
        );
        Task::after(&self.delay, self.latency_ms, Ok(receipt))
    }
}
