//! Flutter-facing bindings for the meal planner core.

pub mod api;
