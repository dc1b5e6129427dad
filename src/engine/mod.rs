// src/engine/mod.rs

//! Launch-then-wait engine.
//!
//! - [`launcher`] starts exactly one pipeline execution.
//! - [`core`] is the pure poll state machine (no IO, no clock).
//! - [`poller`] is the async shell that sleeps, queries status and feeds
//!   the answers into the core.
//! - [`clock`] abstracts sleeping and elapsed time so tests never wait.

pub mod clock;
pub mod core;
pub mod launcher;
pub mod poller;

pub use clock::{Clock, TokioClock};
pub use core::{PollState, PollStep, TerminalReport};
pub use launcher::launch;
pub use poller::Poller;
