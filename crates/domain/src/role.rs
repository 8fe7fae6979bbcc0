//! Role catalog and the role-switch permission matrix.
//!
//! The catalog is fixed and ordered; `RoleValue` is the stable identity used
//! in comparisons and persistence. The switch matrix is total over the
//! catalog and never lists a role as a target of itself: switching back to
//! the base role is implicit, not a permission grant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use staffly_core::AppError;

/// Stable role identity used in comparisons and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleValue {
    /// Full administrative access.
    Admin,
    /// Department-level management.
    Manager,
    /// Team coordination within a department.
    TeamLead,
    /// Regular staff member.
    Employee,
}

impl RoleValue {
    /// Returns the stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::TeamLead => "teamlead",
            Self::Employee => "employee",
        }
    }

    /// Returns all role values in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RoleValue] = &[
            RoleValue::Admin,
            RoleValue::Manager,
            RoleValue::TeamLead,
            RoleValue::Employee,
        ];

        ALL
    }

    /// Returns whether this is the lowest-privilege role in the catalog.
    ///
    /// The role switcher is only shown to users whose base role is above
    /// this level.
    #[must_use]
    pub fn is_lowest_privilege(&self) -> bool {
        matches!(self, Self::Employee)
    }
}

impl FromStr for RoleValue {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "teamlead" => Ok(Self::TeamLead),
            "employee" => Ok(Self::Employee),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

/// One catalog entry: a role with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    value: RoleValue,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

impl Role {
    /// Returns the stable role identity.
    #[must_use]
    pub fn value(&self) -> RoleValue {
        self.value
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the description shown in the role switcher.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the icon reference for this role.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Resolves a role value to its catalog entry.
    #[must_use]
    pub fn lookup(value: RoleValue) -> &'static Role {
        match value {
            RoleValue::Admin => &CATALOG[0],
            RoleValue::Manager => &CATALOG[1],
            RoleValue::TeamLead => &CATALOG[2],
            RoleValue::Employee => &CATALOG[3],
        }
    }
}

/// The fixed, ordered role catalog.
static CATALOG: [Role; 4] = [
    Role {
        value: RoleValue::Admin,
        name: "Administrator",
        description: "Full access to every collection and portal setting",
        icon: "shield",
    },
    Role {
        value: RoleValue::Manager,
        name: "Manager",
        description: "Manages departments, projects and reimbursements",
        icon: "briefcase",
    },
    Role {
        value: RoleValue::TeamLead,
        name: "Team Lead",
        description: "Coordinates tasks and applicants for one team",
        icon: "users",
    },
    Role {
        value: RoleValue::Employee,
        name: "Employee",
        description: "Views own profile, tasks and reimbursements",
        icon: "user",
    },
];

/// Returns the role catalog in its fixed order.
#[must_use]
pub fn catalog() -> &'static [Role] {
    &CATALOG
}

/// Returns the roles a base role may switch into, in catalog order.
///
/// Total over the catalog; the base role itself never appears.
#[must_use]
pub fn switch_targets(base: RoleValue) -> &'static [RoleValue] {
    match base {
        RoleValue::Admin => &[RoleValue::Manager, RoleValue::TeamLead, RoleValue::Employee],
        RoleValue::Manager => &[RoleValue::TeamLead, RoleValue::Employee],
        RoleValue::TeamLead => &[RoleValue::Employee],
        RoleValue::Employee => &[],
    }
}

/// Returns whether a session based on `base` may adopt `target`.
///
/// A role may always adopt its own base role.
#[must_use]
pub fn can_switch(base: RoleValue, target: RoleValue) -> bool {
    base == target || switch_targets(base).contains(&target)
}

/// Resolves the switch targets of a base role to catalog entries.
#[must_use]
pub fn switch_target_roles(base: RoleValue) -> Vec<&'static Role> {
    switch_targets(base).iter().map(|value| Role::lookup(*value)).collect()
}
