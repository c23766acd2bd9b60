//! Partner quote requests and their review lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::EntityError;
use crate::core::field::FieldValue;
use crate::{impl_record, wire_enum};

wire_enum!(
    /// Review lifecycle of a quote request
    RequestStatus {
        Draft => "draft",
        Submitted => "submitted",
        InReview => "in-review",
        Approved => "approved",
        Rejected => "rejected",
    }
);

wire_enum!(
    /// Partner-declared urgency of a request
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
);

/// One product line on a quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub sku: String,
    pub qty: i64,
    pub unit_price: f64,

    /// Asked unit price, if the partner wants a discount
    pub requested_price: Option<f64>,

    pub comment: String,
}

impl RequestItem {
    /// Line value at catalog price
    pub fn line_total(&self) -> f64 {
        self.qty as f64 * self.unit_price
    }
}

/// A partner quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Human-facing reference (e.g., "RQ-2024-001")
    pub reference: String,

    pub company: String,
    pub contact: String,
    pub contact_email: String,
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
    pub priority: Priority,
    pub items: Vec<RequestItem>,

    /// Partner-supplied notes
    pub notes: String,

    /// Internal note recorded by the reviewing admin
    pub admin_note: Option<String>,
}

impl QuoteRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: impl Into<String>,
        company: impl Into<String>,
        contact: impl Into<String>,
        contact_email: impl Into<String>,
        status: RequestStatus,
        priority: Priority,
        items: Vec<RequestItem>,
        notes: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            reference: reference.into(),
            company: company.into(),
            contact: contact.into(),
            contact_email: contact_email.into(),
            submitted_at: now,
            status,
            priority,
            items,
            notes: notes.into(),
            admin_note: None,
        }
    }

    /// Total request value at catalog prices
    pub fn total(&self) -> f64 {
        self.items.iter().map(RequestItem::line_total).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the request is sitting in the admin review queue
    pub fn is_reviewable(&self) -> bool {
        matches!(
            self.status,
            RequestStatus::Submitted | RequestStatus::InReview
        )
    }

    /// Draft → Submitted; stamps `submitted_at`
    pub fn submit(&mut self) -> Result<(), EntityError> {
        if self.status != RequestStatus::Draft {
            return Err(self.transition_error("submit"));
        }
        self.status = RequestStatus::Submitted;
        self.submitted_at = Utc::now();
        self.touch();
        Ok(())
    }

    /// Submitted / InReview → Approved
    pub fn approve(&mut self, admin_note: Option<String>) -> Result<(), EntityError> {
        if !self.is_reviewable() {
            return Err(self.transition_error("approve"));
        }
        self.status = RequestStatus::Approved;
        self.set_admin_note(admin_note);
        self.touch();
        Ok(())
    }

    /// Submitted / InReview → Rejected
    pub fn reject(&mut self, admin_note: Option<String>) -> Result<(), EntityError> {
        if !self.is_reviewable() {
            return Err(self.transition_error("reject"));
        }
        self.status = RequestStatus::Rejected;
        self.set_admin_note(admin_note);
        self.touch();
        Ok(())
    }

    /// Submitted / InReview → InReview with changes requested; the admin
    /// note carries what needs to change
    pub fn request_changes(&mut self, admin_note: Option<String>) -> Result<(), EntityError> {
        if !self.is_reviewable() {
            return Err(self.transition_error("request changes on"));
        }
        self.status = RequestStatus::InReview;
        self.set_admin_note(admin_note);
        self.touch();
        Ok(())
    }

    fn set_admin_note(&mut self, note: Option<String>) {
        if let Some(note) = note {
            if !note.trim().is_empty() {
                self.admin_note = Some(note);
            }
        }
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

/// One message on a request's discussion thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestComment {
    pub id: Uuid,

    /// The request the comment belongs to
    pub request_id: Uuid,

    /// Display name of the author
    pub author: String,

    /// Which side of the conversation the author is on
    pub author_role: crate::entities::UserRole,

    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl RequestComment {
    pub fn new(
        request_id: Uuid,
        author: impl Into<String>,
        author_role: crate::entities::UserRole,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            request_id,
            author: author.into(),
            author_role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

impl_record!(
    QuoteRequest,
    singular: "quote-request",
    plural: "quote-requests",
    status: |this| this.status.to_string(),
    display_name: |this| &this.reference,
    search: ["reference", "company"],
    sort: ["reference", "submitted_at", "total"],
    filter: ["status", "priority"],
    field_value: |this, field| match field {
        "reference" => Some(FieldValue::String(this.reference.clone())),
        "company" => Some(FieldValue::String(this.company.clone())),
        "contact" => Some(FieldValue::String(this.contact.clone())),
        "contact_email" => Some(FieldValue::String(this.contact_email.clone())),
        "submitted_at" => Some(FieldValue::DateTime(this.submitted_at)),
        "status" => Some(FieldValue::String(this.status.to_string())),
        "priority" => Some(FieldValue::String(this.priority.to_string())),
        "total" => Some(FieldValue::Float(this.total())),
        "item_count" => Some(FieldValue::Integer(this.item_count() as i64)),
        _ => None,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, sku: &str, qty: i64, unit_price: f64) -> RequestItem {
        RequestItem {
            product_id: Uuid::new_v4(),
            product_name: name.to_string(),
            sku: sku.to_string(),
            qty,
            unit_price,
            requested_price: None,
            comment: String::new(),
        }
    }

    fn draft() -> QuoteRequest {
        QuoteRequest::new(
            "RQ-2024-006",
            "Horizon Fabrication Ltd",
            "Michael Torres",
            "m.torres@horizonfab.com",
            RequestStatus::Draft,
            Priority::Medium,
            vec![
                item("Pneumatic Cylinder 50mm Bore", "PNE-7734", 5, 296.0),
                item("Air Preparation Unit FRL 1/4\"", "PNE-8821", 8, 189.0),
            ],
            "",
        )
    }

    #[test]
    fn test_total_and_item_count() {
        let request = draft();
        assert_eq!(request.item_count(), 2);
        assert!((request.total() - (5.0 * 296.0 + 8.0 * 189.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_submit_from_draft() {
        let mut request = draft();
        request.submit().expect("draft should submit");
        assert_eq!(request.status, RequestStatus::Submitted);

        // Submitting twice is an invalid transition
        let err = request.submit().unwrap_err();
        assert_eq!(err.error_code(), "ENTITY_INVALID_TRANSITION");
    }

    #[test]
    fn test_review_flow() {
        let mut request = draft();
        request.submit().unwrap();

        request
            .request_changes(Some("Confirm delivery dates".to_string()))
            .unwrap();
        assert_eq!(request.status, RequestStatus::InReview);
        assert_eq!(
            request.admin_note.as_deref(),
            Some("Confirm delivery dates")
        );

        request.approve(None).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
    }

    #[test]
    fn test_terminal_states_reject_review_actions() {
        let mut request = draft();
        request.submit().unwrap();
        request.reject(Some("Below cost threshold".to_string())).unwrap();
        assert_eq!(request.status, RequestStatus::Rejected);

        assert!(request.approve(None).is_err());
        assert!(request.reject(None).is_err());
        assert!(request.request_changes(None).is_err());
    }

    #[test]
    fn test_draft_is_not_reviewable() {
        let mut request = draft();
        assert!(!request.is_reviewable());
        assert!(request.approve(None).is_err());
    }

    #[test]
    fn test_blank_admin_note_is_dropped() {
        let mut request = draft();
        request.submit().unwrap();
        request.approve(Some("   ".to_string())).unwrap();
        assert!(request.admin_note.is_none());
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(RequestStatus::InReview.to_string(), "in-review");
        assert_eq!(
            "in-review".parse::<RequestStatus>(),
            Ok(RequestStatus::InReview)
        );
        assert_eq!(Priority::ALL.len(), 4);
    }
}
