//! Branch resolution: a pure function from (position, screens, previous
//! answer) to the next flow action.

use inflow_types::{
    ACTION_OPEN_URL, ACTION_RATING, ACTION_SKIP_TO, NextAction, Screen,
};

/// Compute the next action for a flow.
///
/// `position` is `None` before the flow has started; the entry transition
/// always advances to index 0 regardless of `previous_answer`. Otherwise
/// the current screen's branching rules are scanned in order for the first
/// rule whose `response_value` equals the previous answer token:
///
/// - `open-url` with a URL resolves to [`NextAction::OpenUrl`]
/// - `rating` resolves to [`NextAction::RatingPrompt`]
/// - `skipTo` with a target resolves to [`NextAction::SkipTo`]
/// - malformed rules (missing URL/target, unrecognized kind) fall through
///   to advancing
///
/// With no matching rule the flow advances; when no screen follows, the
/// result is [`NextAction::Complete`]. Every input has a defined output -
/// this function performs no I/O and cannot fail.
pub fn resolve(
    position: Option<usize>,
    screens: &[Screen],
    previous_answer: Option<&str>,
) -> NextAction {
    let Some(current) = position else {
        // Entry transition: always show the first screen.
        return NextAction::Advance;
    };

    if let (Some(screen), Some(answer)) = (screens.get(current), previous_answer)
        && let Some(rule) = screen.rules.iter().find(|r| r.response_value == answer)
    {
        match rule.action.action.as_str() {
            ACTION_OPEN_URL => match &rule.action.url {
                Some(url) => return NextAction::OpenUrl(url.clone()),
                None => log::debug!(
                    "screen {}: open-url rule for {:?} has no url, advancing",
                    screen.id,
                    answer
                ),
            },
            ACTION_RATING => return NextAction::RatingPrompt,
            ACTION_SKIP_TO => match rule.action.skip_to {
                Some(target) => return NextAction::SkipTo(target),
                None => log::debug!(
                    "screen {}: skipTo rule for {:?} has no target, advancing",
                    screen.id,
                    answer
                ),
            },
            other => log::debug!(
                "screen {}: unrecognized rule action {:?}, advancing",
                screen.id,
                other
            ),
        }
    }

    if current + 1 < screens.len() {
        NextAction::Advance
    } else {
        NextAction::Complete
    }
}
