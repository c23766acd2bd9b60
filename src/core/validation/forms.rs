//! Typed form payloads and their validation rules
//!
//! Each form mirrors one dialog or page of the portal UI: the new quote
//! request page, the create-ticket dialog, and the invite-user dialog.
//! `validate()` returns the same field-keyed error map the UI renders
//! inline (`company`, `contact_email`, `items`, `item_0`, `item_qty_0`, …).

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::core::error::{FieldError, ValidationError};
use crate::core::validation::{ValidationConfig, filters, validators};

/// One product line on the new-request form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFormItem {
    /// Selected product, if any
    pub product_id: Option<Uuid>,

    /// Requested quantity
    pub qty: i64,

    /// Asked unit price, if the partner wants a discount
    pub requested_price: Option<f64>,

    /// Special pricing notes, delivery requirements...
    pub comment: String,
}

/// The new quote request form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestForm {
    pub company: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Priority wire string ("low", "medium", "high", "urgent")
    pub priority: String,
    pub notes: String,
    pub items: Vec<RequestFormItem>,
}

impl RequestForm {
    fn config() -> ValidationConfig {
        let mut config = ValidationConfig::new("quote-request");
        config.add_filter("company", filters::trim());
        config.add_filter("contact_name", filters::trim());
        config.add_filter("contact_email", filters::trim());
        config.add_filter("contact_email", filters::lowercase());
        config.add_validator("company", validators::required());
        config.add_validator("contact_name", validators::required());
        config.add_validator("contact_email", validators::required());
        config.add_validator("contact_email", validators::email());
        config.add_validator(
            "priority",
            validators::in_list(vec![
                "low".to_string(),
                "medium".to_string(),
                "high".to_string(),
                "urgent".to_string(),
            ]),
        );
        config
    }

    /// Validate the form, returning the inline error map on failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        let payload = json!({
            "company": self.company,
            "contact_name": self.contact_name,
            "contact_email": self.contact_email,
            "priority": self.priority,
        });

        let mut errors = match Self::config().validate_and_filter(payload) {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        };

        if self.items.is_empty() {
            errors.push(FieldError::new("items", "Add at least one product"));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.product_id.is_none() {
                errors.push(FieldError::new(format!("item_{}", i), "Select a product"));
            }
            if item.qty < 1 {
                errors.push(FieldError::new(
                    format!("item_qty_{}", i),
                    "Quantity must be at least 1",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}

/// The create-ticket dialog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketForm {
    pub subject: String,
    /// Category wire string ("billing", "technical", "shipping", "product", "account")
    pub category: String,
    /// Priority wire string ("low", "medium", "high")
    pub priority: String,
    pub description: String,
}

impl TicketForm {
    fn config() -> ValidationConfig {
        let mut config = ValidationConfig::new("ticket");
        config.add_filter("subject", filters::trim());
        config.add_filter("description", filters::trim());
        config.add_validator("subject", validators::required());
        config.add_validator("subject", validators::string_length(3, 120));
        config.add_validator("description", validators::required());
        config.add_validator(
            "category",
            validators::in_list(vec![
                "billing".to_string(),
                "technical".to_string(),
                "shipping".to_string(),
                "product".to_string(),
                "account".to_string(),
            ]),
        );
        config.add_validator(
            "priority",
            validators::in_list(vec![
                "low".to_string(),
                "medium".to_string(),
                "high".to_string(),
            ]),
        );
        config
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let payload = json!({
            "subject": self.subject,
            "category": self.category,
            "priority": self.priority,
            "description": self.description,
        });

        match Self::config().validate_and_filter(payload) {
            Ok(_) => Ok(()),
            Err(errors) => Err(ValidationError::FieldErrors(errors)),
        }
    }
}

/// The invite-user dialog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteForm {
    pub email: String,
    /// Role wire string ("partner", "admin", "viewer")
    pub role: String,
    pub company: String,
}

impl InviteForm {
    fn config() -> ValidationConfig {
        let mut config = ValidationConfig::new("invite");
        config.add_filter("email", filters::trim());
        config.add_filter("email", filters::lowercase());
        config.add_filter("company", filters::trim());
        config.add_validator("email", validators::required());
        config.add_validator("email", validators::email());
        config.add_validator(
            "role",
            validators::in_list(vec![
                "partner".to_string(),
                "admin".to_string(),
                "viewer".to_string(),
            ]),
        );
        config.add_validator("company", validators::required());
        config
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let payload = json!({
            "email": self.email,
            "role": self.role,
            "company": self.company,
        });

        match Self::config().validate_and_filter(payload) {
            Ok(_) => Ok(()),
            Err(errors) => Err(ValidationError::FieldErrors(errors)),
        }
    }
}
