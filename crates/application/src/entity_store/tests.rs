use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use staffly_core::AppResult;
use staffly_domain::{
    Applicant, Department, Job, JobStatus, Project, Reimbursement, TaskRecord, TaskStatus,
};
use tokio::sync::Mutex;

use crate::snapshot::{SnapshotStore, decode_state_field, encode_state_field};

use super::{EntityRecord, EntityStore};

#[derive(Default)]
struct FakeSnapshotStore {
    payloads: Mutex<HashMap<String, String>>,
}

impl FakeSnapshotStore {
    async fn preload(&self, store_name: &str, payload: impl Into<String>) {
        self.payloads
            .lock()
            .await
            .insert(store_name.to_owned(), payload.into());
    }

    async fn payload(&self, store_name: &str) -> Option<String> {
        self.payloads.lock().await.get(store_name).cloned()
    }
}

#[async_trait]
impl SnapshotStore for FakeSnapshotStore {
    async fn load(&self, store_name: &str) -> AppResult<Option<String>> {
        Ok(self.payloads.lock().await.get(store_name).cloned())
    }

    async fn save(&self, store_name: &str, payload: String) -> AppResult<()> {
        self.payloads
            .lock()
            .await
            .insert(store_name.to_owned(), payload);
        Ok(())
    }

    async fn clear(&self, store_name: &str) -> AppResult<()> {
        self.payloads.lock().await.remove(store_name);
        Ok(())
    }
}

async fn hydrated<R: EntityRecord>(storage: Arc<FakeSnapshotStore>) -> EntityStore<R> {
    EntityStore::hydrate(storage)
        .await
        .unwrap_or_else(|_| panic!("hydration must succeed"))
}

async fn assert_reseeds_from_empty_storage<R>()
where
    R: EntityRecord + PartialEq + std::fmt::Debug,
{
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<R>(Arc::clone(&storage)).await;

    assert_eq!(store.list().await, R::seed_collection());

    // The reseed is written back through immediately.
    let payload = storage
        .payload(R::STORE_NAME)
        .await
        .unwrap_or_else(|| panic!("reseed must persist a snapshot"));
    let persisted: Option<Vec<R>> = decode_state_field(R::COLLECTION_FIELD, payload.as_str());
    assert_eq!(persisted, Some(R::seed_collection()));
}

#[tokio::test]
async fn every_store_reseeds_when_no_snapshot_exists() {
    assert_reseeds_from_empty_storage::<Job>().await;
    assert_reseeds_from_empty_storage::<Department>().await;
    assert_reseeds_from_empty_storage::<Project>().await;
    assert_reseeds_from_empty_storage::<TaskRecord>().await;
    assert_reseeds_from_empty_storage::<Reimbursement>().await;
    assert_reseeds_from_empty_storage::<Applicant>().await;
}

#[tokio::test]
async fn reseeds_when_snapshot_holds_an_empty_collection() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let empty = encode_state_field(Job::COLLECTION_FIELD, &Vec::<Job>::new())
        .unwrap_or_else(|_| panic!("encode"));
    storage.preload(Job::STORE_NAME, empty).await;

    let store = hydrated::<Job>(storage).await;
    assert_eq!(store.list().await, Job::seed_collection());
}

#[tokio::test]
async fn reseeds_when_snapshot_is_corrupt() {
    let storage = Arc::new(FakeSnapshotStore::default());
    storage
        .preload(Department::STORE_NAME, "{\"state\": totally broken")
        .await;

    let store = hydrated::<Department>(storage).await;
    assert_eq!(store.list().await, Department::seed_collection());
}

#[tokio::test]
async fn intact_snapshot_is_restored_without_reseeding() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let first = hydrated::<Job>(Arc::clone(&storage)).await;
    first
        .update(
            "7c9a4f0e-31d2-4a6b-9b51-0f6f2a8c1d3e",
            |job| job.status = JobStatus::Closed,
        )
        .await
        .unwrap_or_else(|_| panic!("update"));

    let second = hydrated::<Job>(storage).await;
    assert_eq!(second.list().await, first.list().await);
    assert_ne!(second.list().await, Job::seed_collection());
}

#[tokio::test]
async fn added_department_survives_rehydration() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Department>(Arc::clone(&storage)).await;

    let stored = store
        .add(Department {
            id: String::new(),
            name: "Legal".to_owned(),
            head: "Dana Vries".to_owned(),
            headcount: 4,
        })
        .await
        .unwrap_or_else(|_| panic!("add"));
    assert!(!stored.id.is_empty());

    let rehydrated = hydrated::<Department>(storage).await;
    let found = rehydrated.get(stored.id.as_str()).await;
    assert_eq!(found, Some(stored));
}

#[tokio::test]
async fn added_task_survives_rehydration() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<TaskRecord>(Arc::clone(&storage)).await;

    let mut task = TaskRecord::seed()
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("seed"));
    task.id = String::new();
    task.title = "Review migration runbook".to_owned();
    task.status = TaskStatus::Todo;

    let stored = store.add(task).await.unwrap_or_else(|_| panic!("add"));

    let rehydrated = hydrated::<TaskRecord>(storage).await;
    assert_eq!(rehydrated.get(stored.id.as_str()).await, Some(stored));
}

#[tokio::test]
async fn add_prepends_most_recent_first() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Department>(storage).await;

    let stored = store
        .add(Department {
            id: String::new(),
            name: "Legal".to_owned(),
            head: "Dana Vries".to_owned(),
            headcount: 4,
        })
        .await
        .unwrap_or_else(|_| panic!("add"));

    let listed = store.list().await;
    assert_eq!(listed.first().map(|record| record.id.clone()), Some(stored.id));
    assert_eq!(listed.len(), Department::seed().len() + 1);
}

#[tokio::test]
async fn rapid_inserts_receive_distinct_ids() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Applicant>(storage).await;

    let template = Applicant::seed()
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("seed"));

    let mut ids = HashSet::new();
    for _ in 0..32 {
        let mut applicant = template.clone();
        applicant.id = String::new();
        let stored = store.add(applicant).await.unwrap_or_else(|_| panic!("add"));
        ids.insert(stored.id);
    }

    assert_eq!(ids.len(), 32);
}

#[tokio::test]
async fn update_on_unknown_id_is_a_silent_noop() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Job>(storage).await;
    let before = store.list().await;

    let touched = store
        .update("nonexistent-id", |job| job.openings = 99)
        .await
        .unwrap_or_else(|_| panic!("update"));

    assert!(!touched);
    assert_eq!(store.list().await, before);
}

#[tokio::test]
async fn update_mutates_matching_record_and_persists() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Reimbursement>(Arc::clone(&storage)).await;

    let touched = store
        .update("e27b9f40-5c18-4d6a-b093-f4a1c8e62d75", |claim| {
            claim.status = staffly_domain::ReimbursementStatus::Approved;
        })
        .await
        .unwrap_or_else(|_| panic!("update"));
    assert!(touched);

    let rehydrated = hydrated::<Reimbursement>(storage).await;
    let claim = rehydrated.get("e27b9f40-5c18-4d6a-b093-f4a1c8e62d75").await;
    assert_eq!(
        claim.map(|claim| claim.status),
        Some(staffly_domain::ReimbursementStatus::Approved)
    );
}

#[tokio::test]
async fn remove_on_unknown_id_is_a_silent_noop() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Project>(storage).await;
    let before = store.list().await;

    let removed = store.remove("nonexistent-id").await.unwrap_or_else(|_| panic!("remove"));

    assert!(!removed);
    assert_eq!(store.list().await, before);
}

#[tokio::test]
async fn remove_deletes_the_matching_record() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Project>(storage).await;

    let removed = store
        .remove("f60a2d8b-4c17-4e95-b3d0-81c5a7e9f242")
        .await
        .unwrap_or_else(|_| panic!("remove"));

    assert!(removed);
    assert!(store.get("f60a2d8b-4c17-4e95-b3d0-81c5a7e9f242").await.is_none());
    assert_eq!(store.count().await, Project::seed().len() - 1);
}

#[tokio::test]
async fn filter_is_a_pure_read() {
    let storage = Arc::new(FakeSnapshotStore::default());
    let store = hydrated::<Applicant>(storage).await;

    let for_backend_role = store
        .for_job("7c9a4f0e-31d2-4a6b-9b51-0f6f2a8c1d3e")
        .await;
    assert_eq!(for_backend_role.len(), 2);
    assert_eq!(store.list().await, Applicant::seed_collection());
}
