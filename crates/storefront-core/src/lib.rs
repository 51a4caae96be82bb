//! Storefront Core — shared domain abstractions.
//!
//! This crate defines the traits and types that every bounded context
//! depends on, including the in-process [`dispatcher::EventDispatcher`]
//! that fans domain events out to their subscribed handlers. It contains
//! no infrastructure code.

pub mod aggregate;
pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
