use serde::{Deserialize, Serialize};

/// One normalized user response, appended to the flow's answer sequence.
///
/// Exactly one of `answer_value` / `answer_index` is primary per input kind:
/// rating and follow-up screens fill `answer_value`, MCQ and checkbox
/// screens fill `answer_index` (with optional "other" free text in
/// `answer_value`). Both may be empty for skipped screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The screen this answer belongs to.
    pub screen_id: String,

    /// Free-text or stringified numeric answer value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_value: Option<String>,

    /// Chosen option id (MCQ), comma-joined ids (checkbox), or rating index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<String>,
}

impl Answer {
    /// Create an answer record.
    pub fn new(
        screen_id: impl Into<String>,
        answer_value: Option<String>,
        answer_index: Option<String>,
    ) -> Self {
        Self {
            screen_id: screen_id.into(),
            answer_value,
            answer_index,
        }
    }
}

/// The raw value the presentation layer emits for one completed screen.
///
/// The variant shape follows the screen's input kind; the answer recorder
/// normalizes it into an [`Answer`] and the token fed back into branch
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    /// Selected index on a rating-style scale (stars, emoji, numeric, NPS).
    Selection(usize),

    /// Single chosen option id, with optional "other" free text.
    Choice {
        option: String,
        other: Option<String>,
    },

    /// Chosen option ids of a multi-choice screen, with optional "other"
    /// free text.
    Checklist {
        options: Vec<String>,
        other: Option<String>,
    },

    /// Free-text follow-up input, exactly as entered.
    Text(String),

    /// The screen was shown but collects nothing (thank-you pages).
    Acknowledged,
}

impl RawAnswer {
    /// A single choice with no "other" text.
    pub fn choice(option: impl Into<String>) -> Self {
        Self::Choice {
            option: option.into(),
            other: None,
        }
    }

    /// A multi-choice selection with no "other" text.
    pub fn checklist<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Checklist {
            options: options.into_iter().map(Into::into).collect(),
            other: None,
        }
    }
}

impl From<usize> for RawAnswer {
    fn from(index: usize) -> Self {
        Self::Selection(index)
    }
}

impl From<String> for RawAnswer {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawAnswer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_omits_empty_fields_on_the_wire() {
        let answer = Answer::new("scr_1", Some("3".to_string()), None);
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "screen_id": "scr_1", "answer_value": "3" })
        );
    }

    #[test]
    fn raw_answer_conversions() {
        assert_eq!(RawAnswer::from(4), RawAnswer::Selection(4));
        assert_eq!(
            RawAnswer::from("hello"),
            RawAnswer::Text("hello".to_string())
        );
    }
}
