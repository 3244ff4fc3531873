//! Browser implementations of the booking flow seams.
use crate::router::BrowserNavigator;
use crate::storage::BrowserSessionStore;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use skyfare_core::{BookingFlow, Delay, SimulatedPaymentProcessor};

pub type BrowserFlow = BookingFlow<BrowserSessionStore, BrowserNavigator>;

#[must_use]
pub const fn browser_flow() -> BrowserFlow {
    BookingFlow::new(BrowserSessionStore, BrowserNavigator)
}

/// `setTimeout`-backed delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let ms = i32::try_from(ms).unwrap_or(i32::MAX);
        async move {
            if let Err(err) = crate::dom::sleep_ms(ms).await {
                log::error!("timer failed: {}", crate::dom::js_error_message(&err));
            }
        }
        .boxed_local()
    }
}

#[must_use]
pub fn payment_processor() -> SimulatedPaymentProcessor<TimerDelay> {
    SimulatedPaymentProcessor::new(TimerDelay, crate::config::flow_config().payment_latency_ms)
}

/// Seed for booking references, taken from the wall clock.
#[must_use]
pub fn reference_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now() as u64;
    now
}
