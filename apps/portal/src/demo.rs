//! Demo sign-in directory. Identity is mocked: no credentials are checked.

use staffly_core::AppResult;
use staffly_domain::{EmailAddress, Identity, RoleValue};

const DEMO_ADMIN_ID: &str = "b7e03c5a-2d91-48f6-a4b8-61c7d0e9f523";
const DEMO_MANAGER_ID: &str = "4a9d1f82-6b05-4c37-98e2-d5f0a3c8b164";
const DEMO_TEAMLEAD_ID: &str = "e15c8a60-3f74-4d29-b0a6-97e2c4d1f085";
const DEMO_EMPLOYEE_ID: &str = "72f4b0d3-8e16-45a9-c38b-0d6a9e5f2c17";

/// Returns the demo account for a base role.
pub fn account(role: RoleValue) -> AppResult<Identity> {
    let (id, name, email) = match role {
        RoleValue::Admin => (DEMO_ADMIN_ID, "Avery Quinn", "avery.quinn@staffly.test"),
        RoleValue::Manager => (DEMO_MANAGER_ID, "Noor Patel", "noor.patel@staffly.test"),
        RoleValue::TeamLead => (DEMO_TEAMLEAD_ID, "Jordan Lake", "jordan.lake@staffly.test"),
        RoleValue::Employee => (DEMO_EMPLOYEE_ID, "Kim Soto", "kim.soto@staffly.test"),
    };

    Ok(Identity::new(id, name, EmailAddress::new(email)?, role))
}
