//! Core use-case services.
//!
//! # Responsibility
//! - Turn store operations into view models and user-facing notices.
//! - Keep CLI/FFI layers decoupled from storage details.

pub mod planner_service;
pub mod session;
