//! Time-based retention for the sharebox share store.
//!
//! The [`Sweeper`] is a long-lived background task that deletes shares older
//! than [`RetentionPolicy::max_age`]. It sweeps once immediately, then sleeps
//! for [`RetentionPolicy::interval`] between sweeps. A failed sweep is logged
//! and the loop carries on to the next sleep; nothing is retried early.
//!
//! The task stops when its [`CancellationToken`] is cancelled. Cancellation
//! is observed while sleeping, so a sweep already in flight runs to
//! completion first.

use std::{sync::Arc, time::Duration};

use chrono::TimeDelta;
use sharebox_core::store::ShareStore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Shares older than this many days are swept by default.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 180;

/// Time between sweeps by default.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

// ─── Policy ──────────────────────────────────────────────────────────────────

/// How long shares live and how often the sweeper checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
  /// Shares whose age exceeds this are deleted. The boundary is kept.
  pub max_age:  TimeDelta,
  /// Sleep between the end of one sweep and the start of the next.
  pub interval: Duration,
}

impl Default for RetentionPolicy {
  fn default() -> Self {
    Self {
      max_age:  TimeDelta::days(DEFAULT_MAX_AGE_DAYS),
      interval: DEFAULT_INTERVAL,
    }
  }
}

/// Run a single sweep: delete every share older than `policy.max_age`.
///
/// Returns the number of shares removed.
pub async fn sweep_once<S>(
  store: &S,
  policy: &RetentionPolicy,
) -> Result<u64, S::Error>
where
  S: ShareStore,
{
  store.delete_older_than(policy.max_age).await
}

// ─── Sweeper ─────────────────────────────────────────────────────────────────

/// Periodic retention task over a shared store handle.
pub struct Sweeper<S> {
  store:  Arc<S>,
  policy: RetentionPolicy,
  cancel: CancellationToken,
}

impl<S> Sweeper<S>
where
  S: ShareStore + 'static,
{
  pub fn new(store: Arc<S>, policy: RetentionPolicy, cancel: CancellationToken) -> Self {
    Self { store, policy, cancel }
  }

  /// Spawn [`Sweeper::run`] onto the current tokio runtime.
  pub fn spawn(self) -> JoinHandle<()> { tokio::spawn(self.run()) }

  /// Sweep, sleep, repeat until cancelled.
  pub async fn run(self) {
    tracing::info!(
      max_age_days = self.policy.max_age.num_days(),
      interval_secs = self.policy.interval.as_secs(),
      "retention sweeper started"
    );

    while !self.cancel.is_cancelled() {
      match sweep_once(self.store.as_ref(), &self.policy).await {
        Ok(0) => tracing::debug!("retention sweep removed nothing"),
        Ok(removed) => tracing::info!(removed, "retention sweep removed expired shares"),
        Err(e) => tracing::warn!(error = %e, "retention sweep failed"),
      }

      tokio::select! {
        () = self.cancel.cancelled() => break,
        () = tokio::time::sleep(self.policy.interval) => {}
      }
    }

    tracing::info!("retention sweeper stopped");
  }
}
