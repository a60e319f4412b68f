//! Counter widget state and its render predicates.

/// Message shown while the counter sits at zero.
pub const ZERO_MESSAGE: &str = "Counter is at zero!";

/// Value from which the milestone message is shown.
pub const MILESTONE: i64 = 10;

/// State of a single counter.
///
/// `value` only ever moves by `step` or snaps back to `initial_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
    pub initial_value: i64,
    pub step: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl CounterState {
    pub fn new(initial_value: i64, step: i64) -> Self {
        Self {
            value: initial_value,
            initial_value,
            step,
        }
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(self.step);
    }

    /// Subtract one step. Does nothing while the decrement control is disabled.
    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.value = self.value.wrapping_sub(self.step);
        }
    }

    pub fn reset(&mut self) {
        self.value = self.initial_value;
    }

    /// Whether the decrement control is enabled.
    pub fn can_decrement(&self) -> bool {
        self.value > 0
    }

    pub fn zero_message(&self) -> Option<&'static str> {
        (self.value == 0).then_some(ZERO_MESSAGE)
    }

    pub fn milestone_message(&self) -> Option<String> {
        (self.value >= MILESTONE).then(|| format!("Great! You've reached {}!", self.value))
    }
}
