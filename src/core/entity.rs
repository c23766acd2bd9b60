//! Entity traits defining the core abstraction for all record types

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::field::FieldValue;

/// Base trait for all entities in the portal.
///
/// This trait provides the fundamental metadata needed for any entity type.
/// All entities have:
/// - id: Unique identifier
/// - type: Entity type name (e.g., "product", "quote-request")
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
/// - status: Current status of the entity, as its kebab-case wire string
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used by list views (e.g., "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the entity type name
    fn entity_type(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the entity status as its wire string (e.g., "in-review")
    fn status(&self) -> String;
}

/// Trait for records a list view can query.
///
/// Records extend the base Entity with a human-readable name, dynamic
/// field access, and the three closed key sets the query engine is
/// allowed to touch. Keeping the sets closed per record type makes an
/// invalid sort or filter key a call-site error instead of a runtime
/// surprise deep inside a recompute.
pub trait Record: Entity {
    /// Get the name of this record
    fn name(&self) -> &str;

    /// Fields matched by free-text search (e.g., name + SKU)
    fn searchable_fields() -> &'static [&'static str];

    /// Fields a list view may sort by
    fn sortable_fields() -> &'static [&'static str];

    /// Fields a list view may filter on
    fn filterable_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        name: String,
        code: String,
    }

    impl Entity for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn resource_name_singular() -> &'static str {
            "test_record"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn entity_type(&self) -> &str {
            "test_record"
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }

        fn status(&self) -> String {
            "active".to_string()
        }
    }

    impl Record for TestRecord {
        fn name(&self) -> &str {
            &self.name
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name", "code"]
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn filterable_fields() -> &'static [&'static str] {
            &["code"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::String(self.name.clone())),
                "code" => Some(FieldValue::String(self.code.clone())),
                _ => None,
            }
        }
    }

    #[test]
    fn test_record_field_access() {
        let now = Utc::now();
        let record = TestRecord {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: "Relay Module".to_string(),
            code: "ELC-1".to_string(),
        };

        assert_eq!(record.name(), "Relay Module");
        assert_eq!(
            record.field_value("code"),
            Some(FieldValue::String("ELC-1".to_string()))
        );
        assert_eq!(record.field_value("unknown"), None);
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(TestRecord::resource_name(), "test_records");
        assert_eq!(TestRecord::resource_name_singular(), "test_record");
        assert_eq!(TestRecord::searchable_fields(), &["name", "code"]);
        assert_eq!(TestRecord::sortable_fields(), &["name"]);
        assert_eq!(TestRecord::filterable_fields(), &["code"]);
    }
}
