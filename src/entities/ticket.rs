//! Support tickets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::EntityError;
use crate::core::field::FieldValue;
use crate::{impl_record, wire_enum};

wire_enum!(
    /// Which desk a ticket lands on
    TicketCategory {
        Billing => "billing",
        Technical => "technical",
        Shipping => "shipping",
        Product => "product",
        Account => "account",
    }
);

wire_enum!(
    /// Ticket lifecycle
    TicketStatus {
        Open => "open",
        InProgress => "in-progress",
        Resolved => "resolved",
        Closed => "closed",
    }
);

wire_enum!(
    /// Ticket urgency
    TicketPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

/// A support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Human-facing reference (e.g., "TK-4201")
    pub reference: String,

    pub subject: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub priority: TicketPriority,

    /// Assigned support agent; `None` renders as "Unassigned"
    pub assignee: Option<String>,

    pub description: String,
}

impl Ticket {
    pub fn new(
        reference: impl Into<String>,
        subject: impl Into<String>,
        category: TicketCategory,
        priority: TicketPriority,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            reference: reference.into(),
            subject: subject.into(),
            category,
            status: TicketStatus::Open,
            priority,
            assignee: None,
            description: description.into(),
        }
    }

    /// Display name of the assignee, "Unassigned" when nobody owns it
    pub fn assignee_name(&self) -> &str {
        self.assignee.as_deref().unwrap_or("Unassigned")
    }

    pub fn assign(&mut self, agent: impl Into<String>) {
        self.assignee = Some(agent.into());
        self.touch();
    }

    /// Open → InProgress
    pub fn start_progress(&mut self) -> Result<(), EntityError> {
        if self.status != TicketStatus::Open {
            return Err(self.transition_error("start progress on"));
        }
        self.status = TicketStatus::InProgress;
        self.touch();
        Ok(())
    }

    /// Open / InProgress → Resolved
    pub fn resolve(&mut self) -> Result<(), EntityError> {
        if !matches!(self.status, TicketStatus::Open | TicketStatus::InProgress) {
            return Err(self.transition_error("resolve"));
        }
        self.status = TicketStatus::Resolved;
        self.touch();
        Ok(())
    }

    /// Open / InProgress / Resolved → Closed
    pub fn close(&mut self) -> Result<(), EntityError> {
        if self.status == TicketStatus::Closed {
            return Err(self.transition_error("close"));
        }
        self.status = TicketStatus::Closed;
        self.touch();
        Ok(())
    }

    /// Resolved / Closed → Open
    pub fn reopen(&mut self) -> Result<(), EntityError> {
        if !matches!(self.status, TicketStatus::Resolved | TicketStatus::Closed) {
            return Err(self.transition_error("reopen"));
        }
        self.status = TicketStatus::Open;
        self.touch();
        Ok(())
    }

    fn transition_error(&self, action: &str) -> EntityError {
        EntityError::InvalidTransition {
            entity_type: Self::resource_name_singular().to_string(),
            id: self.id,
            from: self.status.to_string(),
            action: action.to_string(),
        }
    }
}

impl_record!(
    Ticket,
    singular: "ticket",
    plural: "tickets",
    status: |this| this.status.to_string(),
    display_name: |this| &this.subject,
    search: ["subject", "reference"],
    sort: ["reference", "created_at", "updated_at"],
    filter: ["category", "status", "priority"],
    field_value: |this, field| match field {
        "reference" => Some(FieldValue::String(this.reference.clone())),
        "subject" => Some(FieldValue::String(this.subject.clone())),
        "category" => Some(FieldValue::String(this.category.to_string())),
        "status" => Some(FieldValue::String(this.status.to_string())),
        "priority" => Some(FieldValue::String(this.priority.to_string())),
        "assignee" => Some(FieldValue::String(this.assignee_name().to_string())),
        "created_at" => Some(FieldValue::DateTime(this.created_at)),
        "updated_at" => Some(FieldValue::DateTime(this.updated_at)),
        _ => None,
    }
);
