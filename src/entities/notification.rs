//! Topbar notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::field::FieldValue;
use crate::{impl_record, wire_enum};

wire_enum!(
    /// Which portal area a notification came from
    NotificationKind {
        Request => "request",
        Ticket => "ticket",
        User => "user",
        System => "system",
    }
);

/// One notification in the topbar bell menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub read: bool,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: title.into(),
            body: body.into(),
            kind,
            read: false,
        }
    }

    /// Flip between read and unread
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
        self.touch();
    }

    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.touch();
        }
    }
}

impl_record!(
    Notification,
    singular: "notification",
    plural: "notifications",
    status: |this| if this.read { "read".to_string() } else { "unread".to_string() },
    display_name: |this| &this.title,
    search: ["title", "body"],
    sort: ["created_at"],
    filter: ["kind", "read"],
    field_value: |this, field| match field {
        "title" => Some(FieldValue::String(this.title.clone())),
        "body" => Some(FieldValue::String(this.body.clone())),
        "kind" => Some(FieldValue::String(this.kind.to_string())),
        "read" => Some(FieldValue::Boolean(this.read)),
        "created_at" => Some(FieldValue::DateTime(this.created_at)),
        _ => None,
    }
);
