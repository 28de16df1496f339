//! Owning playback session
//!
//! [`Session`] wires the reducer, the persistence store and the
//! auto-advance timer together: every dispatched action produces a new
//! state value, the persisted subset is written when it changed, and
//! playing/paused transitions arm or cancel the timer. Cloning a session
//! is cheap and shares the same underlying state, which is how the timer
//! thread reaches back in to advance the cursor.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Error;
use crate::playback::scheduler::Scheduler;
use crate::playback::{delay_for_speed, reduce, Action, SessionState};
use crate::registry::Algorithm;
use crate::storage::{PersistedState, StateStore};

struct SessionInner {
    state: Mutex<SessionState>,
    scheduler: Mutex<Scheduler>,
    store: Arc<dyn StateStore>,
}

/// One viewer's playback session.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Create a session: defaults overlaid field-wise with whatever the
    /// store has persisted, with the initial trace generated for the
    /// restored algorithm and data.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let mut state = SessionState::new();
        if let Some(saved) = store.load() {
            if let Some(data) = saved.data {
                state.data = data;
            }
            if let Some(speed) = saved.speed {
                state.speed = speed;
            }
            if let Some(algorithm) = saved.algorithm {
                state.algorithm = algorithm;
            }
            if let Some(target) = saved.target {
                state.target = Some(target);
            }
        }
        state.trace = Some(state.algorithm.generate(&state.data, state.target));

        Session {
            inner: Arc::new(SessionInner {
                state: Mutex::new(state),
                scheduler: Mutex::new(Scheduler::new()),
                store,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.state.lock().clone()
    }

    /// Apply one action: thread the state through the reducer, persist the
    /// `data`/`speed`/`algorithm`/`target` subset when it changed, and arm
    /// or cancel the auto-advance timer on playing transitions.
    pub fn dispatch(&self, action: Action) {
        let (persist, was_playing, now_playing, speed_changed, record, speed);
        {
            let mut state = self.inner.state.lock();
            let next = reduce(&state, action);
            persist = next.data != state.data
                || next.speed != state.speed
                || next.algorithm != state.algorithm
                || next.target != state.target;
            was_playing = state.is_playing;
            now_playing = next.is_playing;
            speed_changed = next.speed != state.speed;
            *state = next;
            record = PersistedState {
                data: Some(state.data.clone()),
                speed: Some(state.speed),
                algorithm: Some(state.algorithm),
                target: state.target,
            };
            speed = state.speed;
        }

        if persist {
            self.inner.store.save(&record);
        }

        match (was_playing, now_playing) {
            (false, true) => self.arm_timer(speed),
            (true, false) => self.inner.scheduler.lock().stop(),
            // A speed change mid-play re-arms with the new period.
            (true, true) if speed_changed => self.arm_timer(speed),
            _ => {}
        }
    }

    /// Select an algorithm by its registry key.
    ///
    /// Does not regenerate the trace; call [`Session::regenerate`] when the
    /// new trace should be built.
    pub fn set_algorithm(&self, key: &str) -> Result<(), Error> {
        let algorithm =
            Algorithm::resolve(key).ok_or_else(|| Error::UnknownAlgorithm(key.to_string()))?;
        self.dispatch(Action::SetAlgorithm(algorithm));
        Ok(())
    }

    /// Parse and set a search target from raw user input.
    ///
    /// Non-numeric input is rejected before any dispatch; state is left
    /// unchanged.
    pub fn set_target_input(&self, raw: &str) -> Result<(), Error> {
        let target = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidTarget(raw.to_string()))?;
        self.dispatch(Action::SetTarget(target));
        Ok(())
    }

    /// Generate a fresh trace for the current algorithm, data and target,
    /// and install it (rewinding the cursor).
    pub fn regenerate(&self) {
        let (algorithm, data, target) = {
            let state = self.inner.state.lock();
            (state.algorithm, state.data.clone(), state.target)
        };
        let trace = algorithm.generate(&data, target);
        self.dispatch(Action::GenerateVisualization(trace));
    }

    fn arm_timer(&self, speed: u32) {
        let weak = Arc::downgrade(&self.inner);
        self.inner
            .scheduler
            .lock()
            .start(delay_for_speed(speed), move || {
                if let Some(inner) = weak.upgrade() {
                    Session { inner }.tick();
                }
            });
    }

    /// One timer tick: advance the cursor if still playing.
    ///
    /// The playing check and the advance happen under one lock, so a tick
    /// racing a pause cannot move the cursor. Auto-stop at the last step
    /// cancels the timer from here, on the timer's own thread.
    fn tick(&self) {
        let auto_stopped = {
            let mut state = self.inner.state.lock();
            if !state.is_playing {
                return;
            }
            let next = reduce(&state, Action::NextStep);
            let auto_stopped = !next.is_playing;
            *state = next;
            auto_stopped
        };
        if auto_stopped {
            self.inner.scheduler.lock().stop();
        }
    }
}
