//! Cancellable, awaitable units of work.
//!
//! Simulated latency is expressed as a [`Task`] built on a [`Delay`], so a
//! real asynchronous backend can replace the simulation behind the same
//! future type.
use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task was cancelled")]
    Cancelled,
}

/// Timer seam. The web crate backs this with a browser timeout.
pub trait Delay {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Cancels the [`Task`] it was taken from.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// A unit of work resolving to `Ok(T)`, or `Err(TaskError::Cancelled)`
/// once its [`CancelHandle`] fires.
pub struct Task<T> {
    inner: Abortable<LocalBoxFuture<'static, T>>,
    handle: CancelHandle,
}

impl<T: 'static> Task<T> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            inner: Abortable::new(future.boxed_local(), registration),
            handle: CancelHandle(handle),
        }
    }

    /// Resolve to `value` after `ms` milliseconds on `delay`.
    pub fn after<D: Delay + ?Sized>(delay: &D, ms: u32, value: T) -> Self {
        let sleep = delay.sleep(ms);
        Self::new(async move {
            sleep.await;
            value
        })
    }

    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }
}

impl<T> Future for Task<T> {
    type Output = Result<T, TaskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner)
            .poll(cx)
            .map(|result| result.map_err(|_| TaskError::Cancelled))
    }
}
