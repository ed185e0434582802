//! Error type for `sharebox-store-sqlite`.
//!
//! Every variant means the store could not complete the operation; callers
//! treat them all as "storage unavailable".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage unavailable: {0}")]
  StorageUnavailable(#[from] tokio_rusqlite::Error),

  /// A stored row carried an unknown `type` discriminant.
  #[error("corrupt share row: {0}")]
  Core(#[from] sharebox_core::Error),

  /// The timestamp falls outside years 0000 through 9999 and cannot be stored.
  #[error("timestamp out of storable range: {0}")]
  TimestampOutOfRange(chrono::DateTime<chrono::Utc>),

  #[error("corrupt share row: date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
