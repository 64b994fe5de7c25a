//! Timer scheduler backing the notification services.
//!
//! Alerts can be created from any component, including ones that unmount
//! right after (a page navigating away on error). Timers therefore do not run
//! in the caller's scope: they are queued to a single driver task spawned once
//! at the application root, which sleeps on all pending timers concurrently.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::domain::services::{TimerHandle, TimerScheduler};

struct PendingTimer {
    after: Duration,
    on_fire: Box<dyn FnOnce()>,
    cancelled: Rc<Cell<bool>>,
}

impl PendingTimer {
    fn wait(self) -> LocalBoxFuture<'static, ()> {
        async move {
            sleep(self.after).await;
            if !self.cancelled.get() {
                (self.on_fire)();
            }
        }
        .boxed_local()
    }
}

struct QueuedTimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for QueuedTimerHandle {
    fn cancel(self: Box<Self>) {
        self.cancelled.set(true);
    }
}

/// Scheduler handing timers over to [`run_timers`]
#[derive(Clone)]
pub struct QueuedTimerScheduler {
    tx: UnboundedSender<PendingTimer>,
}

impl QueuedTimerScheduler {
    /// Create the scheduler and the receiving end to pass to [`run_timers`]
    pub fn new() -> (Self, TimerQueue) {
        let (tx, rx) = unbounded();
        (Self { tx }, TimerQueue { rx })
    }
}

impl TimerScheduler for QueuedTimerScheduler {
    fn schedule(&self, after: Duration, on_fire: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        let cancelled = Rc::new(Cell::new(false));
        let timer = PendingTimer {
            after,
            on_fire,
            cancelled: cancelled.clone(),
        };

        if self.tx.unbounded_send(timer).is_err() {
            // Driver is gone (app shutting down); the alert simply never expires
            tracing::warn!("Timer driver stopped, notification will not auto-expire");
        }
        Box::new(QueuedTimerHandle { cancelled })
    }
}

/// Receiving side of a [`QueuedTimerScheduler`]
pub struct TimerQueue {
    rx: UnboundedReceiver<PendingTimer>,
}

/// Drive every queued timer until all schedulers are dropped and pending timers
/// have elapsed
pub async fn run_timers(queue: TimerQueue) {
    let mut rx = queue.rx;
    let mut pending = FuturesUnordered::new();

    loop {
        futures::select! {
            timer = rx.next() => match timer {
                Some(timer) => pending.push(timer.wait()),
                None => break,
            },
            _ = pending.select_next_some() => {},
        }
    }

    while pending.next().await.is_some() {}
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
