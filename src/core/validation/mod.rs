//! Validation and filtering system
//!
//! This module provides a declarative approach to validating and filtering
//! form input before it reaches the store. Validators collect a field →
//! message error map, which is exactly what a form renders inline next to
//! each input.

pub mod config;
pub mod filters;
pub mod forms;
pub mod validators;

pub use config::ValidationConfig;
pub use forms::{InviteForm, RequestForm, RequestFormItem, TicketForm};
