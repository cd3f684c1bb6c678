//! Planner storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the date -> meal plan data access contract.
//! - Own the only mutable state of a planner session.
//!
//! # Invariants
//! - Failed operations never mutate the store.
//! - Store contents never outlive the owning session.

pub mod planner_store;
