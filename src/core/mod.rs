//! Core module containing fundamental traits and types for the portal

pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod validation;

pub use entity::{Entity, Record};
pub use error::{PortalError, PortalResult};
pub use events::{ActivityEntry, ActivityFeed, ActivityKind};
pub use field::{FieldFormat, FieldValue};
pub use validation::ValidationConfig;
