//! Session identity types and validation rules.

use serde::{Deserialize, Serialize};
use staffly_core::{AppError, AppResult};

use crate::role::{self, RoleValue};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one
    /// `@`, local part and domain are non-empty, domain contains at least
    /// one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// The authenticated session user.
///
/// `base_role` is immutable for the lifetime of a session; `current_role`
/// may only move within `{base_role} ∪ switch_targets(base_role)` and
/// defaults back to the base role on login and on rehydration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    name: String,
    email: EmailAddress,
    base_role: RoleValue,
    current_role: RoleValue,
    roles: Vec<RoleValue>,
}

impl Identity {
    /// Creates a session identity with `current_role = base_role`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: EmailAddress,
        base_role: RoleValue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
            base_role,
            current_role: base_role,
            roles: display_roles(base_role),
        }
    }

    /// Returns the stable user id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role assigned at login.
    #[must_use]
    pub fn base_role(&self) -> RoleValue {
        self.base_role
    }

    /// Returns the role presently active.
    #[must_use]
    pub fn current_role(&self) -> RoleValue {
        self.current_role
    }

    /// Returns the ordered display set: the base role plus its switch
    /// targets, in catalog order.
    #[must_use]
    pub fn roles(&self) -> &[RoleValue] {
        self.roles.as_slice()
    }

    /// Adopts `target` as the current role when the switch matrix permits
    /// it.
    ///
    /// Returns whether the identity now carries `target`; an impermissible
    /// target leaves the identity unchanged. Switching to the already
    /// current role succeeds as a no-op.
    pub fn switch_current_role(&mut self, target: RoleValue) -> bool {
        if !role::can_switch(self.base_role, target) {
            return false;
        }

        self.current_role = target;
        true
    }

    /// Restores the invariants after rehydration from durable storage.
    ///
    /// The current role falls back to the base role and the display set is
    /// rebuilt from the catalog, so a stale or hand-edited snapshot cannot
    /// resurrect an impermissible role.
    pub fn normalize_rehydrated(&mut self) {
        self.current_role = self.base_role;
        self.roles = display_roles(self.base_role);
    }
}

fn display_roles(base: RoleValue) -> Vec<RoleValue> {
    let mut roles = vec![base];
    roles.extend_from_slice(role::switch_targets(base));
    roles.sort_by_key(|value| {
        RoleValue::all()
            .iter()
            .position(|entry| entry == value)
            .unwrap_or(usize::MAX)
    });
    roles
}
