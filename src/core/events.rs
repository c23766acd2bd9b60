//! Activity feed for portal mutations
//!
//! Every store mutation (request review actions, ticket lifecycle, user
//! management, catalog updates) appends one entry here, and the dashboard
//! timelines read the most recent entries back. The feed is an append-only
//! in-memory log: the portal's execution model is synchronous UI event
//! handling, so there is no channel or subscription machinery — a mutation
//! records its entry before returning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The area of the portal an activity entry relates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Request,
    Ticket,
    User,
    System,
}

/// One recorded portal action, as the dashboard timeline displays it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Short action label (e.g., "Request approved")
    pub action: String,

    /// Human-readable detail line (e.g., "RQ-2024-001 from Meridian Manufacturing approved")
    pub detail: String,

    /// Display name of the user who performed the action
    pub actor: String,

    /// Which portal area the entry belongs to
    pub kind: ActivityKind,

    /// When the action happened
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(
        action: impl Into<String>,
        detail: impl Into<String>,
        actor: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            detail: detail.into(),
            actor: actor.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only log of portal activity, newest entries served first
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to the feed
    pub fn record(&mut self, entry: ActivityEntry) {
        self.entries.push(entry);
    }

    /// The `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> Vec<ActivityEntry> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// All entries for one portal area, newest first
    pub fn for_kind(&self, kind: ActivityKind) -> Vec<ActivityEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
