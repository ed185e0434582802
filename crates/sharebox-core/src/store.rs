//! The `ShareStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `sharebox-store-sqlite`).
//! Higher layers (`sharebox-api`, `sharebox-retention`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, TimeDelta, Utc};

use crate::share::{NewShare, Share, ShareId};

/// Abstraction over a share store backend.
///
/// Every method is a single call against durable storage; implementations do
/// no caching and no retries. Any error means the backend could not complete
/// the operation.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ShareStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new share. The store assigns `id` and sets `created_at` to now.
  fn create(
    &self,
    input: NewShare,
  ) -> impl Future<Output = Result<Share, Self::Error>> + Send + '_;

  /// Persist a new share with a caller-supplied creation timestamp.
  ///
  /// Used when importing existing shares.
  fn create_at(
    &self,
    input: NewShare,
    created_at: DateTime<Utc>,
  ) -> impl Future<Output = Result<Share, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every share, newest first. Shares with equal `created_at` are ordered by
  /// descending id.
  fn list_recent(
    &self,
  ) -> impl Future<Output = Result<Vec<Share>, Self::Error>> + Send + '_;

  // ── Deletes ───────────────────────────────────────────────────────────

  /// Remove the share with `id`. Absent ids are not an error; the returned
  /// flag reports whether a row was actually removed.
  fn delete_by_id(
    &self,
    id: ShareId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Remove every share whose `created_at` is strictly before `cutoff`.
  /// Returns the number of shares removed.
  fn delete_created_before(
    &self,
    cutoff: DateTime<Utc>,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Remove every share older than `threshold`, measured from now.
  ///
  /// A share created exactly `threshold` ago is kept.
  fn delete_older_than(
    &self,
    threshold: TimeDelta,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_ {
    let cutoff = Utc::now()
      .checked_sub_signed(threshold)
      .unwrap_or(DateTime::<Utc>::MIN_UTC);
    self.delete_created_before(cutoff)
  }
}
