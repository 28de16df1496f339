//! # Introduction
//!
//! algostep runs classic sorting and searching algorithms through
//! instrumented implementations that record every comparison, swap and
//! visit as an inspectable step, then lets a playback state machine walk
//! the recorded steps forward, backward, or on a timer.
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Algorithm → Trace (steps + metadata) → Session cursor → Consumer
//! ```
//!
//! 1. [`random`] — bounded-range random input generation.
//! 2. [`registry`] — the closed [`registry::Algorithm`] enum resolving
//!    string keys to trace generators, plus the static metadata
//!    [`registry::catalog`].
//! 3. [`algorithms`] — pure trace generators for six comparison sorts and
//!    two searches; they never mutate their input.
//! 4. [`trace`] — the [`trace::Trace`] / [`trace::Step`] data model.
//! 5. [`playback`] — reducer-driven session state with a cursor over the
//!    trace, timer-based auto-advance, and best-effort persistence via
//!    [`storage`].
//!
//! Rendering is out of scope: the crate produces data for a presentation
//! layer to consume.
//!
//! ## Quick start
//!
//! ```
//! use algostep::playback::session::Session;
//! use algostep::playback::Action;
//! use algostep::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let session = Session::new(Arc::new(MemoryStore::new()));
//! session.set_algorithm("quickSort").unwrap();
//! session.regenerate();
//! session.dispatch(Action::NextStep);
//! assert_eq!(session.state().current_step, 1);
//! ```

pub mod algorithms;
pub mod error;
pub mod playback;
pub mod random;
pub mod registry;
pub mod storage;
pub mod trace;

pub use error::Error;
