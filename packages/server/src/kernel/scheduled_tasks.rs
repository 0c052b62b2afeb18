//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! Currently a single maintenance job:
//! - Idle session sweep every 10 minutes
//!
//! ```text
//! Scheduler (every 10 min)
//!     │
//!     └─► SessionStore::cleanup_idle(max_idle)
//!             └─► drops sessions nobody has touched for `max_idle`
//! ```

use anyhow::Result;
use chrono::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::session::SessionStore;

/// Start all scheduled tasks
pub async fn start_scheduler(sessions: SessionStore, max_idle: Duration) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let sweep_job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let sessions = sessions.clone();
        Box::pin(async move {
            run_session_sweep(&sessions, max_idle).await;
        })
    })?;

    scheduler.add(sweep_job).await?;
    scheduler.start().await?;

    tracing::info!(
        max_idle_hours = max_idle.num_hours(),
        "Scheduled tasks started (idle session sweep every 10 minutes)"
    );
    Ok(scheduler)
}

/// Run the idle session sweep
async fn run_session_sweep(sessions: &SessionStore, max_idle: Duration) {
    let removed = sessions.cleanup_idle(max_idle).await;
    let remaining = sessions.len().await;

    if removed > 0 {
        tracing::info!(removed, remaining, "Expired idle sessions");
    } else {
        tracing::debug!(remaining, "No idle sessions to expire");
    }
}
