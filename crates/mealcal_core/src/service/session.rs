//! Session-scoped planner instances.
//!
//! # Responsibility
//! - Give every UI session its own independent planner store.
//! - Define the session lifecycle: open creates an empty store, close drops it.
//!
//! # Invariants
//! - Sessions never share plans.
//! - A closed session id is never handed out again (v4 UUIDs).

use crate::service::planner_service::PlannerService;
use crate::store::planner_store::PlannerStore;
use log::info;
use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for one planner session.
pub type SessionId = Uuid;

/// Planner service bound to an in-memory store.
pub type SessionPlanner = PlannerService<PlannerStore>;

/// Registry of live planner sessions.
#[derive(Default)]
pub struct PlannerSessions {
    sessions: HashMap<SessionId, SessionPlanner>,
}

impl PlannerSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session with an empty store and returns its id.
    pub fn open(&mut self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, PlannerService::new(PlannerStore::new()));
        info!("event=session_open module=session status=ok session={id}");
        id
    }

    /// Closes a session and discards its plans.
    ///
    /// Returns `false` when the id is unknown.
    pub fn close(&mut self, id: SessionId) -> bool {
        let closed = self.sessions.remove(&id).is_some();
        info!(
            "event=session_close module=session status={} session={id}",
            if closed { "ok" } else { "not_found" }
        );
        closed
    }

    pub fn get(&self, id: SessionId) -> Option<&SessionPlanner> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut SessionPlanner> {
        self.sessions.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
