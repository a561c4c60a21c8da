use inflow_types::{InputKind, Screen, ScreenInput};

/// A single free-text question followed by a thank-you page - the shape
/// where empty input suppresses submission entirely.
pub fn feedback_followup() -> Vec<Screen> {
    let mut input = ScreenInput::new(InputKind::Text);
    input.placeholder_text = Some("Write here...".to_string());

    vec![
        Screen::new("scr_feedback", input).with_title("Anything you'd like to share?"),
        Screen::new("scr_end", ScreenInput::new(InputKind::ThankYou))
            .with_title("Thank you!"),
    ]
}
