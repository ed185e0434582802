//! Share — a single stored text or image submission.
//!
//! Shares are immutable once created. They leave the store either through an
//! explicit delete or when the retention sweeper finds them too old.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned share identifier. Monotonically increasing, never reused.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShareId(pub i64);

impl fmt::Display for ShareId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Kind ────────────────────────────────────────────────────────────────────

/// What a share's `content` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
  /// Raw user text.
  Text,
  /// Base64-encoded image bytes.
  Image,
}

impl ShareKind {
  /// The discriminant used on the wire and in storage.
  pub fn as_str(self) -> &'static str {
    match self {
      ShareKind::Text => "text",
      ShareKind::Image => "image",
    }
  }
}

impl fmt::Display for ShareKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ShareKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "text" => Ok(ShareKind::Text),
      "image" => Ok(ShareKind::Image),
      other => Err(Error::UnknownShareKind(other.to_owned())),
    }
  }
}

// ─── Share ───────────────────────────────────────────────────────────────────

/// A persisted share as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
  pub id:         ShareId,
  pub content:    String,
  #[serde(rename = "type")]
  pub kind:       ShareKind,
  pub created_at: DateTime<Utc>,
}

/// Input to [`ShareStore::create`](crate::store::ShareStore::create).
///
/// `id` and `created_at` are assigned by the store. Content is stored
/// verbatim; image content must already be base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShare {
  pub content: String,
  pub kind:    ShareKind,
}

impl NewShare {
  pub fn text(content: impl Into<String>) -> Self {
    Self { content: content.into(), kind: ShareKind::Text }
  }

  pub fn image(base64_content: impl Into<String>) -> Self {
    Self { content: base64_content.into(), kind: ShareKind::Image }
  }
}
