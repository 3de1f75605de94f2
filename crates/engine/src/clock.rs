/// Accumulates elapsed time and releases one gravity step per drop interval.
///
/// The interval is passed on every call instead of stored, so a level-up
/// takes effect on the very next step.
#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    pending_ms: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
    }

    /// Consume one interval if enough time has accumulated.
    pub fn try_fire(&mut self, interval_ms: u32) -> bool {
        let interval_ms = interval_ms.max(1);
        if self.pending_ms >= interval_ms {
            self.pending_ms -= interval_ms;
            true
        } else {
            false
        }
    }

    /// Time accumulated toward the next step.
    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    pub fn reset(&mut self) {
        self.pending_ms = 0;
    }
}
