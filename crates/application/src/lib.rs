//! Application services and ports for the Staffly portal.

#![forbid(unsafe_code)]

mod email;
mod entity_store;
mod http;
mod profile_sync;
mod route_guard;
mod session;
mod snapshot;
mod stores;

pub use email::{DeliveryReport, EmailSender, OutboundEmail};
pub use entity_store::{EntityRecord, EntityStore};
pub use http::{HttpApi, fetch_collection};
pub use profile_sync::ProfileSynchronizer;
pub use route_guard::{GuardDecision, RouteGuard};
pub use session::{
    AUTH_STORE_NAME, SessionObserver, SessionService, SessionSnapshot,
};
pub use snapshot::{
    SNAPSHOT_VERSION, SnapshotStore, decode_state_field, encode_state_field,
};
pub use stores::{
    ApplicantStore, DepartmentStore, JobStore, PortalStores, ProjectStore, ReimbursementStore,
    TaskStore,
};
