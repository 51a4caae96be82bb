//! Application layer for the Customer context.

pub mod command_handlers;
pub mod event_handlers;
