//! # Session Store
//!
//! Keeps one [`Session`] per browser session id. Every operation takes the
//! lock, runs one synchronous closure against a single session and releases
//! it, so requests for the same session are applied one after another.
//!
//! The store holds at most `max_sessions` entries. Opening one more evicts
//! the session that changed least recently, so tabs closed without a
//! `DELETE` do not lock out new visitors.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};
use roomsync_core::{
    errors::{RoomError, RoomResult},
    session::Session,
};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// A live session and when it was opened.
#[derive(Debug)]
pub struct SessionEntry {
    pub session: Session,
    pub created_at: DateTime<Utc>,
    last_active: u64,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    max_sessions: usize,
    clock: AtomicU64,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            clock: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Opens a new session on the home screen, evicting the least recently
    /// changed sessions when the store is full.
    pub async fn create(&self) -> (Uuid, DateTime<Utc>) {
        let mut sessions = self.sessions.write().await;
        while !sessions.is_empty() && sessions.len() >= self.max_sessions {
            let Some(stale) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_active)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&stale);
            info!("Evicted session {} to stay within {} sessions", stale, self.max_sessions);
        }

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        sessions.insert(
            id,
            SessionEntry {
                session: Session::new(),
                created_at,
                last_active: self.tick(),
            },
        );
        (id, created_at)
    }

    pub async fn read<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&SessionEntry) -> RoomResult<T>,
    ) -> RoomResult<T> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(&id).ok_or_else(|| not_found(id))?;
        f(entry)
    }

    pub async fn write<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> RoomResult<T>,
    ) -> RoomResult<T> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_active = self.tick();
        f(&mut entry.session)
    }

    pub async fn remove(&self, id: Uuid) -> RoomResult<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: Uuid) -> RoomError {
    RoomError::NotFound(format!("Session with ID {} not found", id))
}
