//! Episode states and per-step outcomes.

use std::fmt;

/// Lifecycle of a search episode.
///
/// ```text
///   Ready ──start_search──▶ Searching ──step()──▶ Finished
///     ▲                        │
///     │                        └──────step()──▶ Failed
///     └── reset / initialize
/// ```
///
/// `start_search` may be called from any state; blocked endpoints move
/// straight to `Failed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// No episode in progress.
    #[default]
    Ready,
    /// Frontier non-empty, goal not yet closed.
    Searching,
    /// Goal reached; a path is available.
    Finished,
    /// No path exists or an endpoint was blocked.
    Failed,
}

impl SearchState {
    /// Whether the episode has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ready => "ready",
            Self::Searching => "searching",
            Self::Finished => "finished",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Why an episode ended in [`SearchState::Failed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Start cell is off the grid or blocked.
    StartBlocked,
    /// Goal cell is off the grid or blocked.
    GoalBlocked,
    /// The frontier emptied before reaching the goal.
    NoPath,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartBlocked => write!(f, "start cell is not walkable"),
            Self::GoalBlocked => write!(f, "goal cell is not walkable"),
            Self::NoPath => write!(f, "no path to goal"),
        }
    }
}

/// What a single `step()` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A node was closed and its neighbours examined.
    Expanded {
        /// Newly created nodes.
        discovered: u8,
    },
    /// The popped entry was stale; nothing changed. Step again.
    Skipped,
    /// The goal was closed and the path built.
    Finished,
    /// The frontier was empty; the episode failed.
    Exhausted,
    /// Not searching; the call was a no-op.
    Idle,
}

impl StepOutcome {
    /// Whether this step ended the episode.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!SearchState::Ready.is_terminal());
        assert!(!SearchState::Searching.is_terminal());
        assert!(SearchState::Finished.is_terminal());
        assert!(SearchState::Failed.is_terminal());
        assert_eq!(SearchState::default(), SearchState::Ready);
    }

    #[test]
    fn terminal_outcomes() {
        assert!(StepOutcome::Finished.is_terminal());
        assert!(StepOutcome::Exhausted.is_terminal());
        assert!(!StepOutcome::Skipped.is_terminal());
        assert!(!StepOutcome::Idle.is_terminal());
        assert!(!StepOutcome::Expanded { discovered: 3 }.is_terminal());
    }

    #[test]
    fn display() {
        assert_eq!(SearchState::Searching.to_string(), "searching");
        assert_eq!(FailureReason::NoPath.to_string(), "no path to goal");
    }
}
