//! Awaitable spin completion
//!
//! A thin wrapper over a `futures` oneshot. The wheel keeps the sender for
//! the running spin; dropping it (cancel, rejection) resolves the waiting
//! side with `None`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;

use super::state::SpinResult;

/// Resolves with the landed segment, or `None` if the spin was rejected or
/// cancelled
#[derive(Debug)]
#[must_use = "a spin completion does nothing unless awaited"]
pub struct SpinCompletion {
    rx: oneshot::Receiver<SpinResult>,
}

impl SpinCompletion {
    /// Sender half for the wheel, receiver half for the caller
    pub(crate) fn channel() -> (oneshot::Sender<SpinResult>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    /// Completion for a spin that never started
    pub(crate) fn rejected() -> Self {
        let (_, completion) = Self::channel();
        completion
    }
}

impl Future for SpinCompletion {
    type Output = Option<SpinResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(Result::ok)
    }
}
