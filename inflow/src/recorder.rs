//! Answer recording: normalizes one raw presentation value into an
//! [`Answer`] and the token fed back into branch resolution.

use inflow_types::{Answer, RawAnswer, Screen};

/// Result of normalizing one raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// An answer to append, plus the previous-answer token for the resolver.
    Answer { answer: Answer, token: String },

    /// Trimmed-empty follow-up text: nothing to append. `signal_empty_only`
    /// is set when the survey has no other content to submit (the single
    /// free-text question case), letting the host skip network submission.
    EmptyText {
        token: String,
        signal_empty_only: bool,
    },

    /// The screen collects nothing (thank-you pages).
    Nothing,
}

/// Normalize `raw` into an answer record for `screen`.
///
/// Dispatch follows the raw value's shape:
///
/// | raw value | `answer_value` | `answer_index` | token |
/// |---|---|---|---|
/// | `Selection(i)` | `i` stringified | - | `i` stringified |
/// | `Choice` | "other" text | option id | option id |
/// | `Checklist` | "other" text | ids joined with `,` | joined ids |
/// | `Text` | trimmed text | - | untrimmed text |
///
/// `screens` is the flow's full screen list, consulted only for the
/// empty-text rule: empty input on the sole screen of a survey, or on a
/// survey of at most two screens ending in a thank-you page, signals that
/// nothing worth submitting was collected.
pub fn record(screen: &Screen, raw: RawAnswer, screens: &[Screen]) -> Recorded {
    match raw {
        RawAnswer::Selection(index) => {
            let value = index.to_string();
            Recorded::Answer {
                answer: Answer::new(&screen.id, Some(value.clone()), None),
                token: value,
            }
        }
        RawAnswer::Choice { option, other } => Recorded::Answer {
            answer: Answer::new(&screen.id, other, Some(option.clone())),
            token: option,
        },
        RawAnswer::Checklist { options, other } => {
            let joined = options.join(",");
            Recorded::Answer {
                answer: Answer::new(&screen.id, other, Some(joined.clone())),
                token: joined,
            }
        }
        RawAnswer::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Recorded::EmptyText {
                    signal_empty_only: text_is_only_content(screens),
                    token: text,
                }
            } else {
                Recorded::Answer {
                    answer: Answer::new(&screen.id, Some(trimmed.to_string()), None),
                    token: text,
                }
            }
        }
        RawAnswer::Acknowledged => Recorded::Nothing,
    }
}

/// The narrow empty-text condition: the survey is a single screen, or at
/// most two screens where the last is a thank-you page.
fn text_is_only_content(screens: &[Screen]) -> bool {
    match screens.len() {
        1 => true,
        2 => screens.last().is_some_and(Screen::is_thank_you),
        _ => false,
    }
}
