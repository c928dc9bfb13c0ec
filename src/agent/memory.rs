use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{ActivityRecord, Profile, UserSession};

/// In-memory per-user state. The only writer of session data.
///
/// Activity logs are append-only: records are handed out by shared
/// reference and never removed.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, UserSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        info!("🧠 Session store initialized");
        Self::default()
    }

    /// Inserts a fresh session, replacing any existing one with the same id.
    pub fn create_session(&mut self, id: &str, profile: Profile) {
        let session = UserSession {
            id: id.to_string(),
            profile,
            activity_log: Vec::new(),
            preferences: Profile::new(),
            created_at: Utc::now(),
        };

        if self.sessions.insert(id.to_string(), session).is_some() {
            warn!("⚠️  Replaced existing session: {}", id);
        } else {
            info!("Added session: {}", id);
        }
    }

    /// Appends an activity record. Returns `false` (and records nothing) when
    /// `id` has no session.
    pub fn record_activity(&mut self, id: &str, kind: &str, details: Profile) -> bool {
        match self.sessions.get_mut(id) {
            Some(session) => {
                session.activity_log.push(ActivityRecord {
                    id: Uuid::new_v4(),
                    kind: kind.to_string(),
                    details,
                    timestamp: Utc::now(),
                });
                info!("Updated activity for {}: {}", id, kind);
                true
            }
            None => {
                debug!("Dropped '{}' activity for unknown session: {}", kind, id);
                false
            }
        }
    }

    pub fn get_context(&self, id: &str) -> Option<&UserSession> {
        self.sessions.get(id)
    }

    /// Swaps the whole profile; the activity log is untouched.
    pub fn replace_profile(&mut self, id: &str, profile: Profile) -> bool {
        match self.sessions.get_mut(id) {
            Some(session) => {
                session.profile = profile;
                info!("Replaced profile for {}", id);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
