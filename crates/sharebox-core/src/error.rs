//! Error types for `sharebox-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown share type discriminant: {0:?}")]
  UnknownShareKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
