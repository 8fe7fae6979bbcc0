//! Store instantiations for the six portal collections.

use std::sync::Arc;

use staffly_core::AppResult;
use staffly_domain::{Applicant, Department, Job, Project, Reimbursement, TaskRecord};

use crate::entity_store::{EntityRecord, EntityStore};
use crate::snapshot::SnapshotStore;

impl EntityRecord for Job {
    const STORE_NAME: &'static str = "job-storage";
    const COLLECTION_FIELD: &'static str = "jobs";

    fn seed_collection() -> Vec<Self> {
        Job::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl EntityRecord for Department {
    const STORE_NAME: &'static str = "department-storage";
    const COLLECTION_FIELD: &'static str = "departments";

    fn seed_collection() -> Vec<Self> {
        Department::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl EntityRecord for Project {
    const STORE_NAME: &'static str = "project-storage";
    const COLLECTION_FIELD: &'static str = "projects";

    fn seed_collection() -> Vec<Self> {
        Project::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl EntityRecord for TaskRecord {
    const STORE_NAME: &'static str = "task-storage";
    const COLLECTION_FIELD: &'static str = "tasks";

    fn seed_collection() -> Vec<Self> {
        TaskRecord::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl EntityRecord for Reimbursement {
    const STORE_NAME: &'static str = "reimbursement-storage";
    const COLLECTION_FIELD: &'static str = "reimbursements";

    fn seed_collection() -> Vec<Self> {
        Reimbursement::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl EntityRecord for Applicant {
    const STORE_NAME: &'static str = "applicant-storage";
    const COLLECTION_FIELD: &'static str = "applicants";

    fn seed_collection() -> Vec<Self> {
        Applicant::seed()
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Job posting store.
pub type JobStore = EntityStore<Job>;
/// Department store.
pub type DepartmentStore = EntityStore<Department>;
/// Project store.
pub type ProjectStore = EntityStore<Project>;
/// Task store.
pub type TaskStore = EntityStore<TaskRecord>;
/// Reimbursement store.
pub type ReimbursementStore = EntityStore<Reimbursement>;
/// Applicant store.
pub type ApplicantStore = EntityStore<Applicant>;

impl ApplicantStore {
    /// Applicants whose advisory job reference points at `job_id`.
    ///
    /// The reference is never validated against the job collection.
    pub async fn for_job(&self, job_id: &str) -> Vec<Applicant> {
        self.filter(|applicant| applicant.job_id == job_id).await
    }
}

/// Every entity store of the portal, hydrated against one snapshot store.
pub struct PortalStores {
    /// Job posting store.
    pub jobs: JobStore,
    /// Department store.
    pub departments: DepartmentStore,
    /// Project store.
    pub projects: ProjectStore,
    /// Task store.
    pub tasks: TaskStore,
    /// Reimbursement store.
    pub reimbursements: ReimbursementStore,
    /// Applicant store.
    pub applicants: ApplicantStore,
}

impl PortalStores {
    /// Hydrates all six collections. Each store hydrates independently;
    /// there is no cross-store transaction.
    pub async fn hydrate(storage: Arc<dyn SnapshotStore>) -> AppResult<Self> {
        Ok(Self {
            jobs: EntityStore::hydrate(Arc::clone(&storage)).await?,
            departments: EntityStore::hydrate(Arc::clone(&storage)).await?,
            projects: EntityStore::hydrate(Arc::clone(&storage)).await?,
            tasks: EntityStore::hydrate(Arc::clone(&storage)).await?,
            reimbursements: EntityStore::hydrate(Arc::clone(&storage)).await?,
            applicants: EntityStore::hydrate(storage).await?,
        })
    }
}
