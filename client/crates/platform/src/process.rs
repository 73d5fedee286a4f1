//! Process termination port

/// Ends the running application
pub trait ProcessTerminator: Send + Sync {
    fn terminate(&self);
}

/// Exits the current process with a fixed status code
#[derive(Debug, Clone, Copy)]
pub struct ProcessExit {
    code: i32,
}

impl ProcessExit {
    pub fn new(code: i32) -> Self {
        Self { code }
    }
}

impl Default for ProcessExit {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ProcessTerminator for ProcessExit {
    fn terminate(&self) {
        tracing::info!(code = self.code, "Terminating process");
        std::process::exit(self.code);
    }
}
