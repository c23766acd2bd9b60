//! Per-form validation configuration
//!
//! A `ValidationConfig` registers filter and validator closures per field,
//! then runs them over a JSON payload: filters first (normalizing input),
//! validators second (collecting errors). Errors come back as a list of
//! [`FieldError`]s keyed by field name — the inline error map a form
//! renders under each input.

use anyhow::Result;
use indexmap::IndexMap;
use serde_json::Value;

use crate::core::error::FieldError;

type Validator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type Filter = Box<dyn Fn(&str, Value) -> Result<Value> + Send + Sync>;

/// Validation and filtering rules for one form
pub struct ValidationConfig {
    form_name: &'static str,
    validators: IndexMap<String, Vec<Validator>>,
    filters: IndexMap<String, Vec<Filter>>,
}

impl ValidationConfig {
    pub fn new(form_name: &'static str) -> Self {
        Self {
            form_name,
            validators: IndexMap::new(),
            filters: IndexMap::new(),
        }
    }

    pub fn form_name(&self) -> &'static str {
        self.form_name
    }

    /// Register a validator for a field. Validators run in registration
    /// order; the first failure per field wins (one inline message per
    /// input).
    pub fn add_validator<F>(&mut self, field: &str, validator: F)
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators
            .entry(field.to_string())
            .or_default()
            .push(Box::new(validator));
    }

    /// Register an input filter for a field. Filters run before any
    /// validator sees the payload.
    pub fn add_filter<F>(&mut self, field: &str, filter: F)
    where
        F: Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.filters
            .entry(field.to_string())
            .or_default()
            .push(Box::new(filter));
    }

    /// Apply filters, then validators, over a JSON object payload.
    ///
    /// Returns the filtered payload on success, or the per-field error map
    /// on failure. Fields absent from the payload validate as `Null`, so a
    /// `required` validator reports them.
    pub fn validate_and_filter(&self, mut payload: Value) -> Result<Value, Vec<FieldError>> {
        for (field, filters) in &self.filters {
            let mut value = payload.get(field).cloned().unwrap_or(Value::Null);
            for filter in filters {
                match filter(field, value) {
                    Ok(filtered) => value = filtered,
                    Err(e) => {
                        return Err(vec![FieldError::new(field.clone(), e.to_string())]);
                    }
                }
            }
            if let Some(obj) = payload.as_object_mut() {
                obj.insert(field.clone(), value);
            }
        }

        let mut errors = Vec::new();
        for (field, validators) in &self.validators {
            let value = payload.get(field).cloned().unwrap_or(Value::Null);
            for validator in validators {
                if let Err(message) = validator(field, &value) {
                    errors.push(FieldError::new(field.clone(), message));
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for ValidationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("form_name", &self.form_name)
            .field("validated_fields", &self.validators.keys().collect::<Vec<_>>())
            .field("filtered_fields", &self.filters.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{filters, validators};
    use serde_json::json;

    fn invite_config() -> ValidationConfig {
        let mut config = ValidationConfig::new("invite");
        config.add_filter("email", filters::trim());
        config.add_filter("email", filters::lowercase());
        config.add_validator("email", validators::required());
        config.add_validator("email", validators::email());
        config.add_validator("company", validators::required());
        config
    }

    #[test]
    fn test_valid_payload_passes_and_is_filtered() {
        let config = invite_config();
        let payload = json!({"email": "  M.Torres@HorizonFab.com ", "company": "Horizon Fabrication Ltd"});

        let result = config.validate_and_filter(payload).expect("should pass");
        assert_eq!(result["email"], json!("m.torres@horizonfab.com"));
    }

    #[test]
    fn test_missing_fields_collect_errors() {
        let config = invite_config();
        let result = config.validate_and_filter(json!({}));

        let errors = result.expect_err("should fail");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "company"]);
    }

    #[test]
    fn test_first_failure_per_field_wins() {
        let config = invite_config();
        let result = config.validate_and_filter(json!({"email": null, "company": "Acme"}));

        let errors = result.expect_err("should fail");
        // required fires, email format never runs for the same field
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert!(errors[0].message.contains("required"));
    }

    #[test]
    fn test_format_failure_after_required_passes() {
        let config = invite_config();
        let result =
            config.validate_and_filter(json!({"email": "not-an-email", "company": "Acme"}));

        let errors = result.expect_err("should fail");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("valid email"));
    }
}
