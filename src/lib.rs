//! # Portal-RS
//!
//! The in-memory domain core of a B2B partner portal: typed record
//! collections (products, quote requests, tickets, users) and a reusable
//! query engine that turns a collection plus the current search / filter /
//! sort / page / selection state into the view a list screen renders.
//!
//! ## Features
//!
//! - **Entity/Record Architecture**: Base entity metadata plus dynamic
//!   field access, with macro-based implementation
//! - **List Query Engine**: Free-text search, field-equality filters,
//!   stable sorting, clamped pagination, and id-keyed selection over an
//!   immutable collection snapshot
//! - **Type-Safe Keys**: Sort and filter keys are closed sets per record
//!   type; misuse is a typed error at the call site, never a crash
//! - **In-Memory Store**: Seeded demo collections with the portal's
//!   review/ticket/user mutations and an activity feed
//! - **Form Validation**: Declarative field validators collecting an
//!   inline error map
//! - **Configuration-Based**: Per-view list defaults via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portal::prelude::*;
//!
//! let store = PortalStore::seeded();
//! let mut engine = ListQueryEngine::new(store.products()?, 8)?;
//!
//! engine.set_search_text("hyd");
//! engine.set_filter("category", FilterChoice::value("Hydraulics"))?;
//! engine.set_sort("unit_price")?;
//!
//! let view = engine.view();
//! println!("{} of {} products", view.page_items.len(), view.total_matched);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod metrics;
pub mod query;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, Record},
        error::{
            ConfigError, EntityError, FieldError, PortalError, PortalResult, QueryError,
            ValidationError,
        },
        events::{ActivityEntry, ActivityFeed, ActivityKind},
        field::{FieldFormat, FieldValue},
        validation::{InviteForm, RequestForm, RequestFormItem, TicketForm, ValidationConfig},
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Query Engine ===
    pub use crate::query::{
        FilterChoice, ListQuery, ListQueryEngine, PageInfo, SortDirection, ViewResult,
    };

    // === Entities ===
    pub use crate::entities::{
        Notification, NotificationKind, Priority, Product, ProductStatus, QuoteRequest,
        RequestComment, RequestItem, RequestStatus, StockStatus, Ticket, TicketCategory,
        TicketPriority, TicketStatus, User, UserRole, UserStatus,
    };

    // === Store ===
    pub use crate::store::PortalStore;

    // === Config ===
    pub use crate::config::{PortalConfig, ViewConfig};

    // === Metrics ===
    pub use crate::metrics::DashboardMetrics;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
