//! Typed error handling for the portal domain core
//!
//! This module provides the error type hierarchy that lets callers handle
//! failures specifically rather than dealing with generic `anyhow::Error`
//! values.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Errors related to record lookups and lifecycle
//!   transitions
//! - [`QueryError`]: Caller misuse of the list query engine (unknown sort
//!   or filter keys, zero page size)
//! - [`ValidationError`]: Errors related to form input validation
//! - [`ConfigError`]: Errors related to configuration parsing and
//!   validation
//!
//! # Example
//!
//! ```rust,ignore
//! use portal::prelude::*;
//!
//! match store.approve_request(id, None) {
//!     Ok(request) => println!("approved {}", request.reference),
//!     Err(PortalError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("request {} not found", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the portal domain core
///
/// This enum encompasses all possible errors that can occur within the
/// crate. Each variant contains a more specific error type for that
/// category.
#[derive(Debug)]
pub enum PortalError {
    /// Record lookup and lifecycle errors
    Entity(EntityError),

    /// Query engine misuse
    Query(QueryError),

    /// Form validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Entity(e) => write!(f, "{}", e),
            PortalError::Query(e) => write!(f, "{}", e),
            PortalError::Validation(e) => write!(f, "{}", e),
            PortalError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Entity(e) => Some(e),
            PortalError::Query(e) => Some(e),
            PortalError::Validation(e) => Some(e),
            PortalError::Config(e) => Some(e),
        }
    }
}

impl PortalError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Entity(e) => e.error_code(),
            PortalError::Query(e) => e.error_code(),
            PortalError::Validation(_) => "VALIDATION_ERROR",
            PortalError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug)]
pub enum EntityError {
    /// Record was not found
    NotFound { entity_type: String, id: Uuid },

    /// A lifecycle transition was not allowed from the current status
    InvalidTransition {
        entity_type: String,
        id: Uuid,
        from: String,
        action: String,
    },

    /// Record operation failed
    OperationFailed {
        entity_type: String,
        operation: String,
        message: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            EntityError::InvalidTransition {
                entity_type,
                id,
                from,
                action,
            } => {
                write!(
                    f,
                    "cannot {} {} '{}' while it is {}",
                    action, entity_type, id, from
                )
            }
            EntityError::OperationFailed {
                entity_type,
                operation,
                message,
            } => {
                write!(f, "failed to {} {}: {}", operation, entity_type, message)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::InvalidTransition { .. } => "ENTITY_INVALID_TRANSITION",
            EntityError::OperationFailed { .. } => "ENTITY_OPERATION_FAILED",
        }
    }
}

impl From<EntityError> for PortalError {
    fn from(err: EntityError) -> Self {
        PortalError::Entity(err)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Caller misuse of the list query engine.
///
/// Every query operation is total over its valid domain (page numbers are
/// clamped, the "All" sentinel clears a filter), so these only surface
/// when a caller reaches for a key outside the record type's closed sets.
#[derive(Debug)]
pub enum QueryError {
    /// The field is not in the record type's sortable/filterable set
    UnknownField {
        resource: &'static str,
        field: String,
        allowed: &'static [&'static str],
    },

    /// Page size must be at least 1
    InvalidPageSize { requested: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownField {
                resource,
                field,
                allowed,
            } => {
                write!(
                    f,
                    "'{}' is not a valid key for {} (allowed: {:?})",
                    field, resource, allowed
                )
            }
            QueryError::InvalidPageSize { requested } => {
                write!(f, "page size must be at least 1 (requested: {})", requested)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownField { .. } => "QUERY_UNKNOWN_FIELD",
            QueryError::InvalidPageSize { .. } => "QUERY_INVALID_PAGE_SIZE",
        }
    }
}

impl From<QueryError> for PortalError {
    fn from(err: QueryError) -> Self {
        PortalError::Query(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to form input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors, keyed the way the form renders
    /// its inline messages
    FieldErrors(Vec<FieldError>),

    /// Invalid JSON payload
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PortalError {
    fn from(err: ValidationError) -> Self {
        PortalError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PortalError {
    fn from(err: ConfigError) -> Self {
        PortalError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for PortalError {
    fn from(err: serde_yaml::Error) -> Self {
        PortalError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

// =============================================================================
// Tests
// =============================================================================
