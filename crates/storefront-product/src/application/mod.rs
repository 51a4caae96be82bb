pub mod command_handlers;
pub mod event_handlers;
