use serde::{Deserialize, Serialize};

/// Rule/button action kind for opening an external URL.
pub const ACTION_OPEN_URL: &str = "open-url";

/// Rule/button action kind for prompting an app-store rating.
pub const ACTION_RATING: &str = "rating";

/// Rule/button action kind for jumping to an explicit screen index.
pub const ACTION_SKIP_TO: &str = "skipTo";

/// One page of a survey, as supplied by the backend.
///
/// Screens are immutable once received; a flow owns its screen list for the
/// duration of one presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Backend identifier for this screen.
    #[serde(rename = "_id")]
    pub id: String,

    /// Primary title shown above the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary message shown below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// What to collect on this screen. Absent for purely informational pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ScreenInput>,

    /// Action buttons rendered under the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ScreenButton>>,

    /// Branching rules, matched against the previous answer token in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<BranchRule>,
}

impl Screen {
    /// Create a screen with just an id and an input descriptor.
    pub fn new(id: impl Into<String>, input: ScreenInput) -> Self {
        Self {
            id: id.into(),
            title: None,
            message: None,
            input: Some(input),
            buttons: None,
            rules: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the secondary message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append a branching rule.
    pub fn with_rule(mut self, rule: BranchRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The input kind of this screen, if it has an input descriptor.
    pub fn input_kind(&self) -> Option<&InputKind> {
        self.input.as_ref().map(|input| &input.kind)
    }

    /// Whether this is a terminal thank-you page.
    pub fn is_thank_you(&self) -> bool {
        matches!(self.input_kind(), Some(InputKind::ThankYou))
    }
}

/// The input descriptor of a screen: input kind plus kind-specific config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenInput {
    /// The kind of input to render.
    #[serde(rename = "input_type")]
    pub kind: InputKind,

    /// Placeholder text for free-text inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,

    /// Minimum character count for free-text inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<u32>,

    /// Maximum character count for free-text inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,

    /// Lower bound of a numeric scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_val: Option<i64>,

    /// Upper bound of a numeric scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_val: Option<i64>,

    /// Label shown at the low end of a scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_min_text: Option<String>,

    /// Label shown at the high end of a scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_max_text: Option<String>,

    /// Choice options for MCQ/checkbox inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,

    /// Option id whose selection reveals an "other" free-text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_option_id: Option<String>,
}

impl ScreenInput {
    /// Create an input descriptor of the given kind with no extra config.
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a choice input (MCQ or checkbox) with the given options.
    pub fn with_choices(kind: InputKind, choices: Vec<Choice>) -> Self {
        Self {
            kind,
            choices: Some(choices),
            ..Self::default()
        }
    }
}

/// The kind of input a screen collects.
///
/// The wire tokens are defined by the backend; unrecognized tokens are
/// carried in `Other` so a single new screen type does not fail the whole
/// survey fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputKind {
    /// Free-text follow-up input.
    #[serde(rename = "text")]
    Text,

    /// Generic rating scale.
    #[serde(rename = "rating")]
    Rating,

    /// Five-star rating.
    #[serde(rename = "rating-5-star")]
    FiveStar,

    /// Emoji rating scale.
    #[serde(rename = "rating-emojis")]
    Emoji,

    /// Numerical rating scale.
    #[serde(rename = "rating-numerical")]
    Numerical,

    /// Net promoter score scale (0-10 by default).
    #[serde(rename = "nps")]
    Nps,

    /// Single-choice question.
    #[serde(rename = "mcq")]
    Mcq,

    /// Multi-choice question.
    #[serde(rename = "checkbox")]
    Checkbox,

    /// Terminal thank-you page; collects nothing.
    #[default]
    #[serde(rename = "thank_you")]
    ThankYou,

    /// An input kind this version does not recognize.
    #[serde(untagged)]
    Other(String),
}

/// One selectable option of an MCQ/checkbox input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Backend identifier for this option.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title.
    pub title: String,
}

impl Choice {
    /// Create a choice option.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// An action button rendered on a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenButton {
    /// Button label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// What pressing the button does. Absent for plain submit buttons.
    #[serde(flatten)]
    pub action: Option<ActionDescriptor>,
}

/// A backend-defined action: open a URL, prompt for a rating, or jump to a
/// screen index.
///
/// The `action` token comes straight off the wire; the resolver treats
/// unrecognized tokens (and `skipTo` without a target) as malformed and
/// falls back to advancing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Action kind token, one of [`ACTION_OPEN_URL`], [`ACTION_RATING`],
    /// [`ACTION_SKIP_TO`] - or something newer.
    pub action: String,

    /// Target URL for `open-url` actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Target screen index for `skipTo` actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_to: Option<usize>,
}

impl ActionDescriptor {
    /// An `open-url` action.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self {
            action: ACTION_OPEN_URL.to_string(),
            url: Some(url.into()),
            skip_to: None,
        }
    }

    /// A `rating` prompt action.
    pub fn rating() -> Self {
        Self {
            action: ACTION_RATING.to_string(),
            url: None,
            skip_to: None,
        }
    }

    /// A `skipTo` action targeting the given screen index.
    pub fn skip_to(index: usize) -> Self {
        Self {
            action: ACTION_SKIP_TO.to_string(),
            url: None,
            skip_to: Some(index),
        }
    }
}

/// A branching rule: when the previous answer token equals `response_value`,
/// perform the embedded action instead of advancing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRule {
    /// The answer token this rule matches against.
    pub response_value: String,

    /// The action to perform on a match.
    #[serde(flatten)]
    pub action: ActionDescriptor,
}

impl BranchRule {
    /// Create a rule matching `response_value` to the given action.
    pub fn new(response_value: impl Into<String>, action: ActionDescriptor) -> Self {
        Self {
            response_value: response_value.into(),
            action,
        }
    }
}
