//! Domain types and rules for the Staffly portal.

#![forbid(unsafe_code)]

mod applicant;
mod dates;
mod department;
mod identity;
mod job;
mod profile;
mod project;
mod reimbursement;
mod role;
mod task;

pub use applicant::{Applicant, OfferStatus};
pub use department::Department;
pub use identity::{EmailAddress, Identity};
pub use job::{Job, JobStatus};
pub use profile::EmployeeProfile;
pub use project::{Project, ProjectStatus};
pub use reimbursement::{Reimbursement, ReimbursementStatus};
pub use role::{Role, RoleValue, can_switch, catalog, switch_target_roles, switch_targets};
pub use task::{TaskRecord, TaskStatus};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Applicant, Department, Job, Project, Reimbursement, TaskRecord};

    fn assert_seeded(label: &str, ids: Vec<String>) {
        assert!(!ids.is_empty(), "{label} seed set must not be empty");
        let distinct: HashSet<&String> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len(), "{label} seed ids must be unique");
    }

    #[test]
    fn every_seed_set_is_non_empty_with_unique_ids() {
        assert_seeded("job", Job::seed().into_iter().map(|r| r.id).collect());
        assert_seeded(
            "department",
            Department::seed().into_iter().map(|r| r.id).collect(),
        );
        assert_seeded("project", Project::seed().into_iter().map(|r| r.id).collect());
        assert_seeded("task", TaskRecord::seed().into_iter().map(|r| r.id).collect());
        assert_seeded(
            "reimbursement",
            Reimbursement::seed().into_iter().map(|r| r.id).collect(),
        );
        assert_seeded(
            "applicant",
            Applicant::seed().into_iter().map(|r| r.id).collect(),
        );
    }
}
