//! Explicitly owned counters.
//!
//! Both counters only ever move forward; callers keep them in their own
//! state (component hooks, a `DurationApplier`) rather than in a global.

/// Number of times a duration has been applied to a style target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyCounter {
    count: u64,
}

impl ApplyCounter {
    pub const fn new() -> Self {
        ApplyCounter { count: 0 }
    }

    pub fn get(&self) -> u64 {
        self.count
    }

    /// Bump the count and return the new value.
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

/// Click counter for UI buttons; `increment` returns the running total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickCounter {
    count: u32,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}
