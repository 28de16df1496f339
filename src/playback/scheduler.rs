//! Auto-advance timer
//!
//! An explicit timer capability: `start(interval, tick)` arms a recurring
//! timer, `stop` cancels it, and arming always cancels the previous timer
//! first, so at most one timer ever drives a session. The timer is a plain
//! thread that sleeps for the interval and checks its cancel flag before
//! each tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Recurring timer with at most one live instance per value.
pub struct Scheduler {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            cancel: Arc::new(AtomicBool::new(true)),
            handle: None,
        }
    }

    /// Arm a recurring timer invoking `tick` every `interval`.
    ///
    /// Any previously armed timer is cancelled first. Ticks run on a single
    /// thread and never overlap.
    pub fn start<F>(&mut self, interval: Duration, tick: F)
    where
        F: Fn() + Send + 'static,
    {
        self.stop();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let handle = thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Acquire) {
                break;
            }
            tick();
        });
        self.cancel = cancel;
        self.handle = Some(handle);
    }

    /// Cancel the pending timer, if any.
    ///
    /// The thread is detached rather than joined: stop can be called from
    /// inside a tick (auto-stop at the last step), where joining would be
    /// a self-deadlock. A tick that already passed its cancel check may
    /// still finish; the session guards its tick on the playing flag, so a
    /// late tick is a no-op.
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Release);
        self.handle = None;
    }

    /// Whether a timer is currently armed.
    pub fn is_armed(&self) -> bool {
        !self.cancel.load(Ordering::Acquire)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
