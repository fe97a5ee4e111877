//! Cart Rules
//!
//! Cart rule evaluation: predicates over a cart's goods, evaluated in a checkout context.

pub mod cart;
pub mod cli;
pub mod context;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod report;
pub mod rules;
pub mod tax;
