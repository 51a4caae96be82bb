//! Domain model for the Customer context.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod value_objects;
