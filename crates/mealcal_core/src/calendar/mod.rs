//! Month grid layout.
//!
//! # Responsibility
//! - Compute day counts and Monday-first week rows for a (year, month).
//! - Provide the labels a month view needs (month and weekday names).
//!
//! # Invariants
//! - Everything here is pure; same input, same output.

pub mod grid;
