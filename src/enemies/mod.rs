//! Enemies module - patrolling hazards.

mod components;
mod patrol;

pub use components::{Enemy, Heading};
