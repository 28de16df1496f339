//! Playback state machine
//!
//! Session state is an explicit value transformed by discrete [`Action`]s
//! through the pure [`reduce`] function; nothing mutates state in place, so
//! transitions can be tested by plain equality. Two orthogonal pieces make
//! up the machine: a bounded cursor into the active trace's steps, and a
//! playing/paused mode. Playing is self-terminating: advancing past the
//! last step drops back to paused without external input.
//!
//! [`session::Session`] owns a state value, threads it through the
//! reducer, persists the relevant subset on change, and drives the
//! [`scheduler::Scheduler`] timer in response to mode transitions.

pub mod scheduler;
pub mod session;

use std::time::Duration;

use crate::random::generate_random_array;
use crate::registry::Algorithm;
use crate::trace::Trace;

/// Default playback speed (domain 1–10).
pub const DEFAULT_SPEED: u32 = 5;
/// Bounds and length of the initial random data set.
pub const DEFAULT_DATA_MIN: i32 = 5;
pub const DEFAULT_DATA_MAX: i32 = 95;
pub const DEFAULT_DATA_LENGTH: usize = 15;

/// The whole of one viewing session's state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Cursor into the active trace's steps; always within
    /// `[0, trace.last_index()]` while a trace is present.
    pub current_step: usize,
    /// Whether the auto-advance timer is driving the cursor
    pub is_playing: bool,
    /// Playback speed, intended domain 1–10
    pub speed: u32,
    /// The selected algorithm
    pub algorithm: Algorithm,
    /// The working input array
    pub data: Vec<i32>,
    /// Search target, if one has been set
    pub target: Option<i32>,
    /// The active trace; `None` until the first generation
    pub trace: Option<Trace>,
}

impl SessionState {
    /// Fresh session defaults: paused at step zero, bubble sort over a new
    /// random array.
    pub fn new() -> Self {
        SessionState {
            current_step: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
            algorithm: Algorithm::BubbleSort,
            data: generate_random_array(DEFAULT_DATA_MIN, DEFAULT_DATA_MAX, DEFAULT_DATA_LENGTH),
            target: None,
            trace: None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete actions the reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select an algorithm. Does not regenerate the trace; regeneration is
    /// an explicit caller-driven step (resolve, generate, then dispatch
    /// [`Action::GenerateVisualization`]).
    SetAlgorithm(Algorithm),
    /// Replace the working data verbatim
    SetData(Vec<i32>),
    /// Replace the working data with a fresh random array and rewind
    GenerateRandomData { min: i32, max: i32, length: usize },
    /// Install a newly generated trace and rewind
    GenerateVisualization(Trace),
    /// Set the search target
    SetTarget(i32),
    /// Advance the cursor; at the last step, stop playback instead
    NextStep,
    /// Move the cursor back one step; no-op at step zero
    PrevStep,
    /// Scrub the cursor to an absolute position (clamped to the trace)
    SetCurrentStep(usize),
    SetIsPlaying(bool),
    SetSpeed(u32),
    /// Rewind to step zero and pause
    Reset,
}

/// Produce the successor state for one action.
///
/// Pure: the old state is never modified, and equal inputs give equal
/// outputs (actions carrying randomness draw it before reaching here,
/// except `GenerateRandomData`, which owns the draw by design).
pub fn reduce(state: &SessionState, action: Action) -> SessionState {
    let mut next = state.clone();
    match action {
        Action::SetAlgorithm(algorithm) => next.algorithm = algorithm,
        Action::SetData(data) => next.data = data,
        Action::GenerateRandomData { min, max, length } => {
            next.data = generate_random_array(min, max, length);
            next.current_step = 0;
        }
        Action::GenerateVisualization(trace) => {
            next.trace = Some(trace);
            next.current_step = 0;
        }
        Action::SetTarget(target) => next.target = Some(target),
        Action::NextStep => match &next.trace {
            Some(trace) if next.current_step < trace.last_index() => {
                next.current_step += 1;
            }
            // At the end (or with no trace): auto-stop, cursor unchanged.
            _ => next.is_playing = false,
        },
        Action::PrevStep => next.current_step = next.current_step.saturating_sub(1),
        Action::SetCurrentStep(step) => {
            let last = next.trace.as_ref().map(Trace::last_index).unwrap_or(0);
            next.current_step = step.min(last);
        }
        Action::SetIsPlaying(playing) => next.is_playing = playing,
        Action::SetSpeed(speed) => next.speed = speed,
        Action::Reset => {
            next.current_step = 0;
            next.is_playing = false;
        }
    }
    next
}

/// Timer period for a playback speed: `1100 - speed * 100` milliseconds,
/// so the intended domain 1–10 maps to 1000ms down to 100ms.
///
/// Out-of-domain speeds are not validated (callers should clamp); speeds
/// of 11 and above saturate to a zero delay.
pub fn delay_for_speed(speed: u32) -> Duration {
    Duration::from_millis(1100u64.saturating_sub(u64::from(speed) * 100))
}
