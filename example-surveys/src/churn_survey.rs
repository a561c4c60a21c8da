use inflow_types::{ActionDescriptor, BranchRule, Choice, InputKind, Screen, ScreenInput};

/// A cancellation survey with branching: picking "too expensive" skips the
/// feature checklist, and "missing features" routes to the roadmap page.
pub fn churn_survey() -> Vec<Screen> {
    let mut reason = ScreenInput::with_choices(
        InputKind::Mcq,
        vec![
            Choice::new("opt_price", "It's too expensive"),
            Choice::new("opt_features", "It's missing features I need"),
            Choice::new("opt_other", "Something else"),
        ],
    );
    reason.other_option_id = Some("opt_other".to_string());

    let features = ScreenInput::with_choices(
        InputKind::Checkbox,
        vec![
            Choice::new("opt_export", "Data export"),
            Choice::new("opt_sso", "Single sign-on"),
            Choice::new("opt_api", "A public API"),
        ],
    );

    vec![
        Screen::new("scr_reason", reason)
            .with_title("Why are you cancelling?")
            .with_rule(BranchRule::new("opt_price", ActionDescriptor::skip_to(2)))
            .with_rule(BranchRule::new(
                "opt_features",
                ActionDescriptor::open_url("https://example.com/roadmap"),
            )),
        Screen::new("scr_features", features).with_title("Which features were missing?"),
        Screen::new("scr_end", ScreenInput::new(InputKind::ThankYou))
            .with_title("Sorry to see you go."),
    ]
}
