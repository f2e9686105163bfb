//! Shared DTOs for the doughcalc workspace.
//!
//! # Design constraints
//! - Inputs are plain values; bounding them is the caller's job.
//! - Output rows carry display strings only. Nothing here is re-parsed.
//! - Prefer adding optional fields over changing semantics.

pub mod inputs;
pub mod recipe;

pub use inputs::{Inputs, ParseStarterError, ParseYeastError, Starter, Yeast};
pub use recipe::{Row, Section};
