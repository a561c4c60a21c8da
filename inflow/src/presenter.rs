//! The presentation seam, plus a scripted presenter for testing flows
//! without user interaction.
//!
//! # Example
//!
//! ```rust
//! use inflow::{InputKind, Screen, ScreenInput, SurveyFlow, TestPresenter};
//!
//! let screens = vec![
//!     Screen::new("scr_rate", ScreenInput::new(InputKind::FiveStar)),
//!     Screen::new("scr_end", ScreenInput::new(InputKind::ThankYou)),
//! ];
//!
//! let mut presenter = TestPresenter::new()
//!     .with_selection(4)
//!     .with_acknowledgement();
//!
//! let outcome = SurveyFlow::new(screens).run(&mut presenter).unwrap();
//! assert_eq!(outcome.answers[0].answer_value.as_deref(), Some("4"));
//! ```

use std::collections::VecDeque;

use inflow_types::{RawAnswer, Screen};

/// What the presentation layer reported for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// The user answered the screen.
    Answered(RawAnswer),

    /// The user dismissed the survey (swipe-down, close button).
    Dismissed,
}

/// Trait for presentation implementations that render survey screens.
///
/// A presenter receives one [`Screen`] descriptor at a time - enough to
/// render it - and reports the raw answer, or that the user dismissed the
/// survey. How the screen is shown (and any animation pacing between
/// screens) is entirely the presenter's concern.
pub trait SurveyPresenter {
    /// The error type for this presenter.
    type Error: Into<anyhow::Error>;

    /// Show one screen and wait for the user's response.
    fn present(&mut self, screen: &Screen) -> Result<PresenterEvent, Self::Error>;
}

/// A presenter that replays pre-configured responses.
///
/// Useful for exercising flows in tests: queue one event per screen the
/// flow will visit, in order.
#[derive(Debug, Clone, Default)]
pub struct TestPresenter {
    script: VecDeque<PresenterEvent>,
    presented: Vec<String>,
}

/// Error type for [`TestPresenter`].
#[derive(Debug, thiserror::Error)]
pub enum TestPresenterError {
    #[error("no scripted response left for screen: {0}")]
    ScriptExhausted(String),
}

impl TestPresenter {
    /// Create a presenter with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw answer.
    pub fn with_answer(mut self, raw: impl Into<RawAnswer>) -> Self {
        self.script.push_back(PresenterEvent::Answered(raw.into()));
        self
    }

    /// Queue a rating-scale selection.
    pub fn with_selection(self, index: usize) -> Self {
        self.with_answer(RawAnswer::Selection(index))
    }

    /// Queue a single-choice answer.
    pub fn with_choice(self, option: impl Into<String>, other: Option<&str>) -> Self {
        self.with_answer(RawAnswer::Choice {
            option: option.into(),
            other: other.map(str::to_string),
        })
    }

    /// Queue a multi-choice answer.
    pub fn with_checklist<I, S>(self, options: I, other: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(RawAnswer::Checklist {
            options: options.into_iter().map(Into::into).collect(),
            other: other.map(str::to_string),
        })
    }

    /// Queue free-text input.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_answer(RawAnswer::Text(text.into()))
    }

    /// Queue an acknowledgement (for thank-you screens).
    pub fn with_acknowledgement(self) -> Self {
        self.with_answer(RawAnswer::Acknowledged)
    }

    /// Queue a dismissal.
    pub fn with_dismissal(mut self) -> Self {
        self.script.push_back(PresenterEvent::Dismissed);
        self
    }

    /// Ids of the screens presented so far, in order.
    pub fn presented(&self) -> &[String] {
        &self.presented
    }
}

impl SurveyPresenter for TestPresenter {
    type Error = TestPresenterError;

    fn present(&mut self, screen: &Screen) -> Result<PresenterEvent, Self::Error> {
        self.presented.push(screen.id.clone());
        self.script
            .pop_front()
            .ok_or_else(|| TestPresenterError::ScriptExhausted(screen.id.clone()))
    }
}
