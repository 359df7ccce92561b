//! Owner lifecycle state.

/// Lifecycle of the owner loop.
///
/// State transitions:
/// - Running -> Running (Increment/Decrement/Get dequeued)
/// - Running -> Stopped (Quit dequeued, or every client handle dropped)
///
/// Stopped is terminal; there is no restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerState {
    /// Accepting and processing requests.
    Running,

    /// The loop has exited and the request channel is closed.
    Stopped,
}

impl OwnerState {
    /// Is this a terminal state (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(self, OwnerState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_is_the_only_terminal_state() {
        assert!(!OwnerState::Running.is_terminal());
        assert!(OwnerState::Stopped.is_terminal());
    }
}
