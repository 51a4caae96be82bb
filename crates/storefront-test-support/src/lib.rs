//! Shared test doubles and utilities for the Storefront example.

mod clock;
mod event;
mod handler;

pub use clock::{FixedClock, fixed_now};
pub use event::TestEvent;
pub use handler::{CallLog, FailingEventHandler, Invocation, RecordingEventHandler};
