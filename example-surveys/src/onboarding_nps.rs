use inflow_types::{ActionDescriptor, BranchRule, InputKind, Screen, ScreenInput};

/// A three-screen NPS survey: promoters are routed to a store-rating
/// prompt, everyone else gets a follow-up question.
pub fn onboarding_nps() -> Vec<Screen> {
    let mut scale = ScreenInput::new(InputKind::Nps);
    scale.min_val = Some(0);
    scale.max_val = Some(10);
    scale.rating_min_text = Some("Not likely".to_string());
    scale.rating_max_text = Some("Very likely".to_string());

    let mut followup = ScreenInput::new(InputKind::Text);
    followup.placeholder_text = Some("Tell us more...".to_string());
    followup.min_chars = Some(5);
    followup.max_chars = Some(1000);

    vec![
        Screen::new("scr_nps", scale)
            .with_title("How likely are you to recommend us to a friend?")
            .with_rule(BranchRule::new("10", ActionDescriptor::rating()))
            .with_rule(BranchRule::new("9", ActionDescriptor::rating())),
        Screen::new("scr_why", followup).with_title("What could we do better?"),
        Screen::new("scr_end", ScreenInput::new(InputKind::ThankYou))
            .with_title("Thanks for your feedback!"),
    ]
}
