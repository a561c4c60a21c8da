/// Error type for survey flow state transitions.
///
/// These are caller errors: the flow refuses the operation and its state is
/// left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// `submit_answer` was called before `start`.
    #[error("survey flow not started")]
    NotStarted,

    /// `start` was called on a flow that already ran.
    #[error("survey flow already started")]
    AlreadyStarted,

    /// `submit_answer` was called after the flow finished.
    #[error("survey flow already finished")]
    Finished,
}

/// Error type for driving a whole survey through a presenter.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// A flow transition was rejected.
    #[error(transparent)]
    Flow(#[from] FlowError),

    /// Presenter-specific failure (UI framework crash, closed channel, etc.)
    #[error("presenter error: {0}")]
    Presenter(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a presenter error from any error type.
    pub fn presenter(err: impl Into<anyhow::Error>) -> Self {
        Self::Presenter(err.into())
    }
}
