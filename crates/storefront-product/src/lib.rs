//! Storefront — Product bounded context.
//!
//! Responsible for the product catalogue: names and prices.

pub mod application;
pub mod domain;
