//! Bridge between the egui thread and the async backend client.

pub mod commands;
pub mod runtime;
