/// The outcome of branch resolution: what the flow should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Move to the next screen in order (or to index 0 on entry).
    Advance,

    /// Jump to an explicit screen index.
    SkipTo(usize),

    /// Fire the open-url terminal action and stop traversal.
    OpenUrl(String),

    /// Fire the rating-prompt terminal action and stop traversal.
    RatingPrompt,

    /// No further screens; the flow is complete.
    Complete,
}

/// A flow-ending action other than normal completion.
///
/// The engine records that a terminal action fired; executing it (opening
/// the URL, presenting the store review prompt) is the host's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    /// Open an external URL.
    OpenUrl(String),

    /// Prompt for an app-store rating.
    RatingPrompt,
}

/// Traversal state of one survey flow.
///
/// Replaces the sentinel indices of older SDKs (-1 for not started, -2 for
/// terminal) with an explicit tagged state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// `start()` has not been called yet.
    #[default]
    NotStarted,

    /// The screen at this index is active.
    OnScreen(usize),

    /// A terminal action fired; only termination remains.
    TerminalActionFired(TerminalAction),

    /// All screens were visited (or the flow was dismissed).
    Completed,
}

impl FlowState {
    /// Whether the flow is on an active screen.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::OnScreen(_))
    }

    /// Whether the flow has finished, by completion or terminal action.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::TerminalActionFired(_))
    }

    /// The active screen index, if any.
    pub fn screen_index(&self) -> Option<usize> {
        match self {
            Self::OnScreen(index) => Some(*index),
            _ => None,
        }
    }
}
