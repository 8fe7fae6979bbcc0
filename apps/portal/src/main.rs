//! Staffly portal composition root.
//!
//! Hydrates the session and every entity store against the file snapshot
//! store, registers the derived-state observers, and performs the demo
//! sign-in. With the `offer` argument it additionally dispatches offer
//! letters for applicants whose offer is marked as sent.

#![forbid(unsafe_code)]

mod config;
mod demo;

use std::env;
use std::sync::Arc;

use staffly_application::{
    EmailSender, PortalStores, ProfileSynchronizer, RouteGuard, SessionObserver, SessionService,
    SnapshotStore,
};
use staffly_core::AppError;
use staffly_domain::OfferStatus;
use staffly_infrastructure::{
    ConsoleEmailSender, JsonFileSnapshotStore, SmtpEmailConfig, SmtpEmailSender, send_offer_letter,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{EmailProviderConfig, PortalConfig};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = PortalConfig::load()?;
    let dispatch_offers = env::args().nth(1).as_deref() == Some("offer");

    let storage: Arc<dyn SnapshotStore> =
        Arc::new(JsonFileSnapshotStore::new(config.data_dir.clone()));

    let profile_synchronizer = Arc::new(ProfileSynchronizer::new());
    let route_guard = Arc::new(RouteGuard::new(
        config.login_surface.clone(),
        "/dashboard",
    ));

    let mut session = SessionService::new(Arc::clone(&storage));
    session.register_observer(Arc::clone(&profile_synchronizer) as Arc<dyn SessionObserver>);
    session.register_observer(Arc::clone(&route_guard) as Arc<dyn SessionObserver>);

    session.hydrate().await?;

    if session.snapshot().await.user.is_none() {
        let identity = demo::account(config.signin_role)?;
        info!(
            user = identity.email().as_str(),
            role = identity.base_role().as_str(),
            "no persisted session, performing demo sign-in"
        );
        session.login(identity).await?;
    }

    let stores = PortalStores::hydrate(Arc::clone(&storage)).await?;

    info!(
        jobs = stores.jobs.count().await,
        departments = stores.departments.count().await,
        projects = stores.projects.count().await,
        tasks = stores.tasks.count().await,
        reimbursements = stores.reimbursements.count().await,
        applicants = stores.applicants.count().await,
        "entity stores hydrated"
    );

    let snapshot = session.snapshot().await;
    let role_switcher_visible = snapshot
        .user
        .as_ref()
        .is_some_and(|user| !user.base_role().is_lowest_privilege());
    info!(
        user = snapshot.user.as_ref().map(|user| user.email().as_str()),
        switchable_roles = session.available_roles_for_switching().await.len(),
        role_switcher_visible,
        guard = ?route_guard.decision().await,
        profile = ?profile_synchronizer.profile().await.map(|profile| profile.email),
        "session ready"
    );

    if dispatch_offers {
        let sender = build_email_sender(&config.email_provider);
        dispatch_pending_offers(&stores, sender.as_ref()).await;
    }

    Ok(())
}

async fn dispatch_pending_offers(stores: &PortalStores, sender: &dyn EmailSender) {
    let pending = stores
        .applicants
        .filter(|applicant| applicant.status == OfferStatus::OfferSent)
        .await;

    if pending.is_empty() {
        info!("no applicants with a pending offer");
        return;
    }

    for applicant in pending {
        // The job reference is advisory; an applicant whose posting is gone
        // is skipped, not an error.
        let Some(job) = stores.jobs.get(applicant.job_id.as_str()).await else {
            warn!(
                applicant = applicant.name.as_str(),
                job_id = applicant.job_id.as_str(),
                "applicant references an unknown job posting, skipping"
            );
            continue;
        };

        let report = send_offer_letter(sender, &applicant, &job).await;
        if !report.success {
            warn!(
                applicant = applicant.name.as_str(),
                message = report.message.as_str(),
                "offer letter delivery failed"
            );
        }
    }
}

fn build_email_sender(provider: &EmailProviderConfig) -> Arc<dyn EmailSender> {
    match provider {
        EmailProviderConfig::Console => Arc::new(ConsoleEmailSender::new()),
        EmailProviderConfig::Smtp(smtp) => Arc::new(SmtpEmailSender::new(SmtpEmailConfig {
            host: smtp.host.clone(),
            port: smtp.port,
            username: smtp.username.clone(),
            password: smtp.password.clone(),
            from_address: smtp.from_address.clone(),
        })),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,staffly_application=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
