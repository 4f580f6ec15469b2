//! Controller layer: one state machine per workflow, completion events, and
//! command orchestration.

pub mod classify;
pub mod complaint;
pub mod documents;
pub mod events;
pub mod lifecycle;
pub mod orchestration;
pub mod query;
