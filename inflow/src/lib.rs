//! # inflow
//!
//! Embeddable micro-survey flow engine. Presentation-agnostic.
//!
//! A host application fetches an ordered list of survey [`Screen`]s from its
//! backend, hands them to a [`SurveyFlow`], and drives the flow one answer
//! at a time (or all at once through a [`SurveyPresenter`]). The engine
//! decides which screen comes next - honoring server-supplied branching
//! rules - collects normalized [`Answer`]s, and reports when the flow
//! completed or a terminal action (open a URL, prompt for an app-store
//! rating) fired.
//!
//! ## Usage
//!
//! ```rust
//! use inflow::{SurveyFlow, TestPresenter};
//!
//! let screens = example_surveys::feedback_followup();
//! let mut presenter = TestPresenter::new()
//!     .with_text("Love the new dashboard!")
//!     .with_acknowledgement();
//!
//! let outcome = SurveyFlow::new(screens).run(&mut presenter).unwrap();
//! assert_eq!(outcome.answers.len(), 1);
//! assert!(outcome.should_submit());
//! ```
//!
//! The analytics side is deliberately small: [`Tracker`] sanitizes event
//! parameters and user traits (dates become epoch seconds, values without a
//! wire representation are dropped) and queues whatever is recorded before a
//! user identity exists on a [`PendingStore`].
//!
//! ## Collaborators
//!
//! The engine performs no I/O of its own. Hosts inject:
//! - a [`BackendClient`] for survey fetch/submit and analytics upload
//! - a [`SurveyPresenter`] that renders one screen and returns the raw answer
//! - a [`PendingStore`] holding analytics items until identity is ready

// Re-export all types from inflow-types
pub use inflow_types::*;

pub mod branch;
pub use branch::resolve;

pub mod recorder;
pub use recorder::{Recorded, record};

pub mod flow;
pub use flow::{FlowOutcome, FlowStep, SurveyFlow};

pub mod sanitize;
pub use sanitize::sanitize;

mod client;
pub use client::{BackendClient, InMemoryPendingStore, PendingItem, PendingStore};

mod tracker;
pub use tracker::Tracker;

// Scripted presenter for testing flows without user interaction
mod presenter;
pub use presenter::{PresenterEvent, SurveyPresenter, TestPresenter, TestPresenterError};
