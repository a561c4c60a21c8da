//! The survey flow controller: a state machine over screens, answers, and
//! terminal-action memory.

use inflow_types::{
    Answer, FlowError, FlowState, NextAction, RawAnswer, Screen, SurveyError, TerminalAction,
};

use crate::presenter::{PresenterEvent, SurveyPresenter};
use crate::recorder::Recorded;
use crate::{branch, recorder};

/// What the caller should do after a flow transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStep {
    /// Present the screen at this index next.
    Present(usize),

    /// The flow finished; no further submissions are accepted.
    Finished(FlowOutcome),
}

/// The final result of one survey flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowOutcome {
    /// Accumulated answers, one per completed screen in presentation order.
    /// Screens bypassed via skip rules produce no answer.
    pub answers: Vec<Answer>,

    /// The terminal action that ended the flow, for the host to execute.
    pub terminal_action: Option<TerminalAction>,

    /// Set when the only usable input was empty follow-up text; the host
    /// should skip network submission.
    pub empty_text_only: bool,

    /// Set when the presenter dismissed the survey mid-flow.
    pub dismissed: bool,
}

impl FlowOutcome {
    /// Whether the accumulated answers are worth submitting to the backend.
    pub fn should_submit(&self) -> bool {
        !self.empty_text_only && !self.answers.is_empty()
    }
}

/// One survey traversal: owns the screen list, the current position, and
/// the accumulated answers.
///
/// Collaborators are injected per instance; independent flows share no
/// state. Transitions are synchronous - `submit_answer` returns the applied
/// step directly, leaving animation pacing to the presentation layer.
#[derive(Debug, Clone)]
pub struct SurveyFlow {
    screens: Vec<Screen>,
    state: FlowState,
    answers: Vec<Answer>,
    empty_text_only: bool,
    dismissed: bool,
}

impl SurveyFlow {
    /// Create a flow over the given screens. Call [`start`](Self::start) to
    /// obtain the first screen.
    pub fn new(screens: Vec<Screen>) -> Self {
        Self {
            screens,
            state: FlowState::NotStarted,
            answers: Vec::new(),
            empty_text_only: false,
            dismissed: false,
        }
    }

    /// The flow's screens.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// The current traversal state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// The screen currently awaiting an answer, if any.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.state.screen_index().and_then(|i| self.screens.get(i))
    }

    /// The answers accumulated so far.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Begin the flow: `NotStarted` moves to the first screen, or straight
    /// to `Completed` when there are no screens.
    pub fn start(&mut self) -> Result<FlowStep, FlowError> {
        if self.state != FlowState::NotStarted {
            return Err(FlowError::AlreadyStarted);
        }
        Ok(self.goto(0))
    }

    /// Submit the raw answer for the current screen and transition.
    ///
    /// Builds and appends the normalized [`Answer`], resolves the next
    /// action from the screen's branching rules, and applies it. Errors if
    /// the flow has not started or already finished; the state is left
    /// unchanged in that case.
    pub fn submit_answer(&mut self, raw: RawAnswer) -> Result<FlowStep, FlowError> {
        let index = match self.state {
            FlowState::OnScreen(index) => index,
            FlowState::NotStarted => return Err(FlowError::NotStarted),
            FlowState::TerminalActionFired(_) | FlowState::Completed => {
                return Err(FlowError::Finished);
            }
        };

        let token = match recorder::record(&self.screens[index], raw, &self.screens) {
            Recorded::Answer { answer, token } => {
                self.answers.push(answer);
                Some(token)
            }
            Recorded::EmptyText {
                token,
                signal_empty_only,
            } => {
                if signal_empty_only {
                    log::debug!("empty follow-up text on a single-question survey");
                    self.empty_text_only = true;
                }
                Some(token)
            }
            Recorded::Nothing => None,
        };

        let action = branch::resolve(Some(index), &self.screens, token.as_deref());
        Ok(self.apply(index, action))
    }

    /// End the flow early, keeping whatever answers were accumulated.
    ///
    /// Safe to call in any state; a finished flow is left as-is.
    pub fn dismiss(&mut self) -> FlowOutcome {
        if !self.state.is_finished() {
            self.dismissed = true;
            self.state = FlowState::Completed;
        }
        self.outcome()
    }

    /// Drive the whole flow through a presenter.
    ///
    /// Each active screen is handed to the presenter, the returned raw
    /// answer is submitted, and the loop continues until the flow finishes
    /// or the presenter dismisses it.
    pub fn run<P: SurveyPresenter>(mut self, presenter: &mut P) -> Result<FlowOutcome, SurveyError> {
        let mut step = self.start()?;
        loop {
            match step {
                FlowStep::Finished(outcome) => return Ok(outcome),
                FlowStep::Present(index) => {
                    let event = presenter
                        .present(&self.screens[index])
                        .map_err(SurveyError::presenter)?;
                    step = match event {
                        PresenterEvent::Answered(raw) => self.submit_answer(raw)?,
                        PresenterEvent::Dismissed => return Ok(self.dismiss()),
                    };
                }
            }
        }
    }

    fn apply(&mut self, current: usize, action: NextAction) -> FlowStep {
        match action {
            NextAction::Advance => self.goto(current + 1),
            NextAction::SkipTo(target) => self.goto(target),
            NextAction::OpenUrl(url) => self.finish_terminal(TerminalAction::OpenUrl(url)),
            NextAction::RatingPrompt => self.finish_terminal(TerminalAction::RatingPrompt),
            NextAction::Complete => self.finish(),
        }
    }

    /// Move to `target`, completing the flow when it is out of bounds.
    fn goto(&mut self, target: usize) -> FlowStep {
        if target < self.screens.len() {
            self.state = FlowState::OnScreen(target);
            FlowStep::Present(target)
        } else {
            self.finish()
        }
    }

    fn finish(&mut self) -> FlowStep {
        log::debug!("survey flow completed with {} answer(s)", self.answers.len());
        self.state = FlowState::Completed;
        FlowStep::Finished(self.outcome())
    }

    fn finish_terminal(&mut self, action: TerminalAction) -> FlowStep {
        log::debug!("survey flow ended by terminal action: {action:?}");
        self.state = FlowState::TerminalActionFired(action);
        FlowStep::Finished(self.outcome())
    }

    fn outcome(&self) -> FlowOutcome {
        let terminal_action = match &self.state {
            FlowState::TerminalActionFired(action) => Some(action.clone()),
            _ => None,
        };
        FlowOutcome {
            answers: self.answers.clone(),
            terminal_action,
            empty_text_only: self.empty_text_only,
            dismissed: self.dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflow_types::{ActionDescriptor, BranchRule, InputKind, ScreenInput};

    fn screen(id: &str, kind: InputKind) -> Screen {
        Screen::new(id, ScreenInput::new(kind))
    }

    fn rating_flow() -> SurveyFlow {
        SurveyFlow::new(vec![
            screen("scr_rate", InputKind::FiveStar),
            screen("scr_end", InputKind::ThankYou),
        ])
    }

    #[test]
    fn empty_screen_list_completes_immediately() {
        let mut flow = SurveyFlow::new(Vec::new());
        let FlowStep::Finished(outcome) = flow.start().unwrap() else {
            panic!("expected immediate completion");
        };
        assert!(outcome.answers.is_empty());
        assert_eq!(flow.state(), &FlowState::Completed);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut flow = rating_flow();
        flow.start().unwrap();
        assert!(matches!(flow.start(), Err(FlowError::AlreadyStarted)));
    }

    #[test]
    fn submit_before_start_is_rejected() {
        let mut flow = rating_flow();
        assert!(matches!(
            flow.submit_answer(RawAnswer::Selection(1)),
            Err(FlowError::NotStarted)
        ));
    }

    #[test]
    fn plain_flow_visits_screens_in_order() {
        let mut flow = rating_flow();
        assert_eq!(flow.start().unwrap(), FlowStep::Present(0));
        assert_eq!(
            flow.submit_answer(RawAnswer::Selection(3)).unwrap(),
            FlowStep::Present(1)
        );
        let FlowStep::Finished(outcome) = flow.submit_answer(RawAnswer::Acknowledged).unwrap()
        else {
            panic!("expected completion after the thank-you screen");
        };
        assert_eq!(outcome.answers, vec![Answer::new("scr_rate", Some("3".to_string()), None)]);
        assert!(outcome.terminal_action.is_none());
    }

    #[test]
    fn skip_rule_bypasses_intermediate_screens() {
        let mut flow = SurveyFlow::new(vec![
            screen("scr_a", InputKind::Mcq)
                .with_rule(BranchRule::new("opt_1", ActionDescriptor::skip_to(2))),
            screen("scr_b", InputKind::Text),
            screen("scr_c", InputKind::ThankYou),
        ]);
        flow.start().unwrap();
        assert_eq!(
            flow.submit_answer(RawAnswer::choice("opt_1")).unwrap(),
            FlowStep::Present(2)
        );
        // The bypassed screen produced no answer.
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn out_of_bounds_skip_completes_the_flow() {
        let mut flow = SurveyFlow::new(vec![
            screen("scr_a", InputKind::Mcq)
                .with_rule(BranchRule::new("opt_1", ActionDescriptor::skip_to(9))),
            screen("scr_b", InputKind::Text),
        ]);
        flow.start().unwrap();
        let FlowStep::Finished(outcome) = flow.submit_answer(RawAnswer::choice("opt_1")).unwrap()
        else {
            panic!("expected completion");
        };
        assert_eq!(outcome.answers.len(), 1);
        assert_eq!(flow.state(), &FlowState::Completed);
    }

    #[test]
    fn terminal_action_stops_traversal_and_is_remembered() {
        let mut flow = SurveyFlow::new(vec![
            screen("scr_a", InputKind::Nps)
                .with_rule(BranchRule::new("10", ActionDescriptor::rating())),
            screen("scr_b", InputKind::Text),
        ]);
        flow.start().unwrap();
        let FlowStep::Finished(outcome) = flow.submit_answer(RawAnswer::Selection(10)).unwrap()
        else {
            panic!("expected terminal action");
        };
        assert_eq!(outcome.terminal_action, Some(TerminalAction::RatingPrompt));
        assert_eq!(
            flow.state(),
            &FlowState::TerminalActionFired(TerminalAction::RatingPrompt)
        );
    }

    #[test]
    fn submission_after_terminal_action_is_rejected_unchanged() {
        let mut flow = SurveyFlow::new(vec![
            screen("scr_a", InputKind::Nps)
                .with_rule(BranchRule::new("0", ActionDescriptor::open_url("https://example.com"))),
        ]);
        flow.start().unwrap();
        flow.submit_answer(RawAnswer::Selection(0)).unwrap();
        let before = flow.state().clone();
        assert!(matches!(
            flow.submit_answer(RawAnswer::Selection(1)),
            Err(FlowError::Finished)
        ));
        assert_eq!(flow.state(), &before);
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn dismissal_keeps_accumulated_answers() {
        let mut flow = SurveyFlow::new(vec![
            screen("scr_a", InputKind::FiveStar),
            screen("scr_b", InputKind::Text),
            screen("scr_c", InputKind::ThankYou),
        ]);
        flow.start().unwrap();
        flow.submit_answer(RawAnswer::Selection(4)).unwrap();
        let outcome = flow.dismiss();
        assert!(outcome.dismissed);
        assert_eq!(outcome.answers.len(), 1);
        assert_eq!(flow.state(), &FlowState::Completed);
    }

    #[test]
    fn empty_text_single_question_survey_suppresses_submission() {
        let mut flow = SurveyFlow::new(vec![screen("scr_a", InputKind::Text)]);
        flow.start().unwrap();
        let FlowStep::Finished(outcome) = flow.submit_answer(RawAnswer::from("   ")).unwrap()
        else {
            panic!("expected completion");
        };
        assert!(outcome.answers.is_empty());
        assert!(outcome.empty_text_only);
        assert!(!outcome.should_submit());
    }
}
