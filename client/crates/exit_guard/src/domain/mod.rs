//! Domain Layer
//!
//! Pure press-counting state machine, free of timers and I/O.

pub mod press_counter;

pub use press_counter::{GuardState, PressCounter, PressOutcome};
