//! Press Counter
//!
//! Counts back presses inside one confirmation window.
//!
//! ## States
//! - **Idle** (count 0): the next press opens a window
//! - **Armed** (count 1): the next press exits
//!
//! Each window gets a sequence number so a reset scheduled for an older
//! window can be told apart from one for the current window.

use derive_more::Display;

/// Observable guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GuardState {
    #[display("idle")]
    Idle,
    #[display("armed")]
    Armed,
}

/// What a press did to the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// First press; a new window was opened
    Armed { window: u64 },
    /// Second (or later) press inside the window
    Exit { presses: u32 },
}

/// Back-press counter
#[derive(Debug, Clone, Default)]
pub struct PressCounter {
    count: u32,
    window: u64,
}

impl PressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one back press
    pub fn register_press(&mut self) -> PressOutcome {
        self.count = self.count.saturating_add(1);
        if self.count == 1 {
            self.window = self.window.wrapping_add(1);
            PressOutcome::Armed {
                window: self.window,
            }
        } else {
            PressOutcome::Exit {
                presses: self.count,
            }
        }
    }

    /// Back to idle unconditionally
    ///
    /// ## Returns
    /// `true` if the counter was not already idle
    pub fn reset(&mut self) -> bool {
        let was_armed = self.count != 0;
        self.count = 0;
        was_armed
    }

    /// Back to idle only if `window` is still the current window
    pub fn expire(&mut self, window: u64) -> bool {
        if window != self.window {
            return false;
        }
        self.reset()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    pub fn state(&self) -> GuardState {
        if self.count == 0 {
            GuardState::Idle
        } else {
            GuardState::Armed
        }
    }
}
