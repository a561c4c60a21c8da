//! Sample survey screen lists, as a backend would supply them.
//!
//! Used by integration tests and documentation examples.

pub mod churn_survey;
pub mod feedback_followup;
pub mod onboarding_nps;

pub use churn_survey::churn_survey;
pub use feedback_followup::feedback_followup;
pub use onboarding_nps::onboarding_nps;
