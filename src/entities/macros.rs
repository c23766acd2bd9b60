//! Macros for reducing boilerplate when defining record types
//!
//! These macros generate the repetitive trait implementations needed for
//! each record variant: the kebab-case wire enums the original data model
//! uses for statuses, and the `Entity`/`Record` plumbing every list view
//! relies on.

/// Define a closed status enum with its kebab-case wire strings.
///
/// Generates serde renames, `as_str`, `Display`, `FromStr`, and an `ALL`
/// constant listing every variant (filter dropdowns iterate it).
///
/// # Example
/// ```rust,ignore
/// wire_enum!(
///     /// Review lifecycle of a quote request
///     RequestStatus {
///         Draft => "draft",
///         Submitted => "submitted",
///         InReview => "in-review",
///         Approved => "approved",
///         Rejected => "rejected",
///     }
/// );
///
/// assert_eq!(RequestStatus::InReview.as_str(), "in-review");
/// assert_eq!("approved".parse::<RequestStatus>(), Ok(RequestStatus::Approved));
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[ $( Self::$variant ),+ ];

            /// The kebab-case wire string for this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(format!(
                        "unknown {} value: '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }
    };
}

/// Implement `Entity` and `Record` for a record struct.
///
/// The struct must carry `id: Uuid`, `created_at: DateTime<Utc>`, and
/// `updated_at: DateTime<Utc>` fields; everything else is supplied by the
/// invocation: the singular/plural resource names, how to render the
/// status and display name, the three closed key sets the query engine
/// may use, and the dynamic field mapping.
///
/// # Example
/// ```rust,ignore
/// impl_record!(
///     Product,
///     singular: "product",
///     plural: "products",
///     status: |this| this.status.to_string(),
///     display_name: |this| &this.name,
///     search: ["name", "sku"],
///     sort: ["name", "unit_price", "stock"],
///     filter: ["category", "brand", "stock_status", "status"],
///     field_value: |this, field| match field {
///         "name" => Some(FieldValue::String(this.name.clone())),
///         "sku" => Some(FieldValue::String(this.sku.clone())),
///         _ => None,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        singular: $singular:literal,
        plural: $plural:literal,
        status: |$sthis:ident| $status_body:expr,
        display_name: |$nthis:ident| $name_body:expr,
        search: [ $( $search_field:literal ),* $(,)? ],
        sort: [ $( $sort_field:literal ),* $(,)? ],
        filter: [ $( $filter_field:literal ),* $(,)? ],
        field_value: |$fthis:ident, $ffield:ident| $field_body:expr
        $(,)?
    ) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn entity_type(&self) -> &str {
                $singular
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }

            fn status(&self) -> String {
                let $sthis = self;
                $status_body
            }
        }

        impl $crate::core::entity::Record for $type {
            fn name(&self) -> &str {
                let $nthis = self;
                $name_body
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn sortable_fields() -> &'static [&'static str] {
                &[ $( $sort_field ),* ]
            }

            fn filterable_fields() -> &'static [&'static str] {
                &[ $( $filter_field ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                let $fthis = self;
                let $ffield = field;
                $field_body
            }
        }

        impl $type {
            /// Update the updated_at timestamp to now
            pub fn touch(&mut self) {
                self.updated_at = ::chrono::Utc::now();
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::entity::{Entity, Record};
    use crate::core::field::FieldValue;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    wire_enum!(
        /// Test lifecycle
        Phase {
            Queued => "queued",
            Running => "running",
            DoneOk => "done-ok",
        }
    );

    #[derive(Clone, Debug)]
    struct Job {
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        label: String,
        phase: Phase,
        attempts: i64,
    }

    impl_record!(
        Job,
        singular: "job",
        plural: "jobs",
        status: |this| this.phase.to_string(),
        display_name: |this| &this.label,
        search: ["label"],
        sort: ["label", "attempts"],
        filter: ["phase"],
        field_value: |this, field| match field {
            "label" => Some(FieldValue::String(this.label.clone())),
            "phase" => Some(FieldValue::String(this.phase.to_string())),
            "attempts" => Some(FieldValue::Integer(this.attempts)),
            _ => None,
        }
    );

    fn job() -> Job {
        let now = Utc::now();
        Job {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            label: "rebuild index".to_string(),
            phase: Phase::Running,
            attempts: 2,
        }
    }

    #[test]
    fn test_wire_enum_round_trip() {
        assert_eq!(Phase::DoneOk.as_str(), "done-ok");
        assert_eq!("done-ok".parse::<Phase>(), Ok(Phase::DoneOk));
        assert!("finished".parse::<Phase>().is_err());
        assert_eq!(Phase::ALL.len(), 3);
    }

    #[test]
    fn test_wire_enum_serde_uses_wire_strings() {
        let json = serde_json::to_string(&Phase::DoneOk).expect("serialize should succeed");
        assert_eq!(json, "\"done-ok\"");
        let restored: Phase = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(restored, Phase::DoneOk);
    }

    #[test]
    fn test_impl_record_entity_plumbing() {
        let job = job();
        assert_eq!(Job::resource_name(), "jobs");
        assert_eq!(Job::resource_name_singular(), "job");
        assert_eq!(job.entity_type(), "job");
        assert_eq!(job.status(), "running");
        assert_eq!(job.name(), "rebuild index");
    }

    #[test]
    fn test_impl_record_field_access() {
        let job = job();
        assert_eq!(
            job.field_value("attempts"),
            Some(FieldValue::Integer(2))
        );
        assert_eq!(
            job.field_value("phase"),
            Some(FieldValue::String("running".to_string()))
        );
        assert_eq!(job.field_value("nope"), None);
        assert_eq!(Job::filterable_fields(), &["phase"]);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut job = job();
        let before = job.updated_at();
        job.touch();
        assert!(job.updated_at() >= before);
    }
}
