//! Core types for the inflow crate.
//!
//! This crate provides the foundational types for in-app micro-surveys:
//! - `Screen`, `ScreenInput` and `InputKind` - One survey page and its input descriptor
//! - `BranchRule` and `ActionDescriptor` - Server-supplied branching rules
//! - `Answer` and `RawAnswer` - Normalized answer records and raw presentation values
//! - `NextAction`, `TerminalAction` and `FlowState` - Flow traversal actions and state
//! - `Properties` and `PropertyValue` - Host-supplied event/user parameter maps

mod screen;
pub use screen::{
    ACTION_OPEN_URL, ACTION_RATING, ACTION_SKIP_TO, ActionDescriptor, BranchRule, Choice,
    InputKind, Screen, ScreenButton, ScreenInput,
};

mod answer;
pub use answer::{Answer, RawAnswer};

mod action;
pub use action::{FlowState, NextAction, TerminalAction};

mod properties;
pub use properties::{Properties, PropertyValue};

mod error;
pub use error::{FlowError, SurveyError};
