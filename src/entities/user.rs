//! Portal user accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::EntityError;
use crate::core::field::FieldValue;
use crate::{impl_record, wire_enum};

wire_enum!(
    /// What a user can see and do in the portal
    UserRole {
        Partner => "partner",
        Admin => "admin",
        Viewer => "viewer",
    }
);

wire_enum!(
    /// Account state
    UserStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
);

/// A portal user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub name: String,
    pub email: String,
    pub company: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_active: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        role: UserRole,
        status: UserStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.into(),
            email: email.into(),
            company: company.into(),
            role,
            status,
            last_active: now,
        }
    }

    /// A freshly invited account: pending until the invite is accepted
    pub fn invited(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self::new(name, email, company, role, UserStatus::Pending)
    }

    /// Initials for the avatar fallback (e.g., "Sarah Chen" → "SC")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Pending → Active
    pub fn activate(&mut self) -> Result<(), EntityError> {
        if self.status != UserStatus::Pending {
            return Err(self.transition_error("activate"));
        }
        self.status = UserStatus::Active;
        self.touch();
        Ok(())
    }

    /// Active / Pending → Inactive
    pub fn disable(&mut self) -> Result<(), EntityError> {
        if self.status == UserStatus::Inactive {
            return Err(self.transition_error("disable"));
        }
        self.status = UserStatus::Inactive;
        self.touch();
        Ok(())
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.touch();
    }

    /// Stamp the account as just seen
    pub fn mark_active_now(&mut self) {
        self.last_active = Utc::now();
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

impl_record!(
    User,
    singular: "user",
    plural: "users",
    status: |this| this.status.to_string(),
    display_name: |this| &this.name,
    search: ["name", "email", "company"],
    sort: ["name", "company", "last_active"],
    filter: ["role", "status"],
    field_value: |this, field| match field {
        "name" => Some(FieldValue::String(this.name.clone())),
        "email" => Some(FieldValue::String(this.email.clone())),
        "company" => Some(FieldValue::String(this.company.clone())),
        "role" => Some(FieldValue::String(this.role.to_string())),
        "status" => Some(FieldValue::String(this.status.to_string())),
        "last_active" => Some(FieldValue::DateTime(this.last_active)),
        _ => None,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invited_user_is_pending() {
        let user = User::invited(
            "Michael Torres",
            "m.torres@horizonfab.com",
            "Horizon Fabrication Ltd",
            UserRole::Partner,
        );
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.role, UserRole::Partner);
    }

    #[test]
    fn test_activate_then_disable() {
        let mut user = User::invited("A", "a@x.com", "X", UserRole::Viewer);
        user.activate().unwrap();
        assert_eq!(user.status, UserStatus::Active);

        // Active accounts can't activate again
        assert!(user.activate().is_err());

        user.disable().unwrap();
        assert_eq!(user.status, UserStatus::Inactive);
        assert!(user.disable().is_err());
    }

    #[test]
    fn test_initials() {
        let user = User::new(
            "Sarah Chen",
            "s.chen@meridianmfg.com",
            "Meridian Manufacturing",
            UserRole::Partner,
            UserStatus::Active,
        );
        assert_eq!(user.initials(), "SC");

        let single = User::new("Cher", "c@x.com", "X", UserRole::Viewer, UserStatus::Active);
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_set_role() {
        let mut user = User::new("A", "a@x.com", "X", UserRole::Viewer, UserStatus::Active);
        user.set_role(UserRole::Admin);
        assert_eq!(user.role, UserRole::Admin);
    }
}
