//! Storefront — Customer bounded context.
//!
//! Responsible for customer registration, addresses, activation and reward
//! points. Customer creation and address changes are announced as domain
//! events through the shared dispatcher.

pub mod application;
pub mod domain;
