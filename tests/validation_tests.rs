//! Integration tests for form validation: the error maps the portal UI
//! renders inline, and how validation gates store mutations.

use portal::prelude::*;
use uuid::Uuid;

fn fields_of(err: PortalError) -> Vec<String> {
    match err {
        PortalError::Validation(ValidationError::FieldErrors(errors)) => {
            errors.into_iter().map(|e| e.field).collect()
        }
        other => panic!("expected field errors, got {}", other),
    }
}

#[test]
fn test_request_form_error_map_matches_ui_keys() {
    let form = RequestForm {
        company: String::new(),
        contact_name: String::new(),
        contact_email: "missing-at-sign".to_string(),
        contact_phone: String::new(),
        priority: "medium".to_string(),
        notes: String::new(),
        items: vec![
            RequestFormItem {
                product_id: Some(Uuid::new_v4()),
                qty: 1,
                requested_price: None,
                comment: String::new(),
            },
            RequestFormItem {
                product_id: None,
                qty: 0,
                requested_price: None,
                comment: String::new(),
            },
        ],
    };

    let fields = fields_of(form.validate().unwrap_err().into());
    assert!(fields.contains(&"company".to_string()));
    assert!(fields.contains(&"contact_name".to_string()));
    assert!(fields.contains(&"contact_email".to_string()));
    // Item errors are keyed by index, like the form renders them
    assert!(fields.contains(&"item_1".to_string()));
    assert!(fields.contains(&"item_qty_1".to_string()));
    assert!(!fields.contains(&"item_0".to_string()));
    assert!(!fields.contains(&"item_qty_0".to_string()));
}

#[test]
fn test_request_form_requires_at_least_one_item() {
    let form = RequestForm {
        company: "Cobalt Supply Chain".to_string(),
        contact_name: "Lisa Andersen".to_string(),
        contact_email: "l.andersen@cobaltsupply.com".to_string(),
        contact_phone: String::new(),
        priority: "urgent".to_string(),
        notes: String::new(),
        items: Vec::new(),
    };

    let fields = fields_of(form.validate().unwrap_err().into());
    assert_eq!(fields, vec!["items".to_string()]);
}

#[test]
fn test_invalid_priority_is_reported() {
    let mut form = RequestForm {
        company: "Cobalt Supply Chain".to_string(),
        contact_name: "Lisa Andersen".to_string(),
        contact_email: "l.andersen@cobaltsupply.com".to_string(),
        contact_phone: String::new(),
        priority: "critical".to_string(),
        notes: String::new(),
        items: vec![RequestFormItem {
            product_id: Some(Uuid::new_v4()),
            qty: 1,
            requested_price: None,
            comment: String::new(),
        }],
    };

    let fields = fields_of(form.validate().unwrap_err().into());
    assert_eq!(fields, vec!["priority".to_string()]);

    form.priority = "urgent".to_string();
    assert!(form.validate().is_ok());
}

#[test]
fn test_store_surfaces_validation_error_code() {
    let store = PortalStore::seeded();
    let err = store
        .invite_user(
            &InviteForm {
                email: "broken".to_string(),
                role: "partner".to_string(),
                company: String::new(),
            },
            "Maria Santos",
        )
        .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    let fields = fields_of(err);
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"company".to_string()));
}

#[test]
fn test_email_normalization_happens_before_validation() {
    let form = InviteForm {
        email: "  Upper.Case@Example.COM  ".to_string(),
        role: "admin".to_string(),
        company: "Internal".to_string(),
    };
    // Trim + lowercase filters run first, so the padded mixed-case
    // address still validates
    assert!(form.validate().is_ok());
}
