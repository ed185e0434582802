//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings with nanosecond
//! precision, so that string comparison in SQL matches chronological order.
//! That only holds for four-digit years, so stored timestamps are limited to
//! years 0000 through 9999.

use chrono::{DateTime, Datelike as _, NaiveDate, SecondsFormat, Utc};
use sharebox_core::share::{Share, ShareId, ShareKind};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Encode a timestamp that will be stored in a row. Fails for years the
/// fixed-width format cannot represent.
pub fn encode_stored_dt(dt: DateTime<Utc>) -> Result<String> {
  if !(0..=9999).contains(&dt.year()) {
    return Err(Error::TimestampOutOfRange(dt));
  }
  Ok(encode_dt(dt))
}

/// Encode a comparison cutoff, clamped into the storable range so that
/// `created_at < cutoff` keeps its chronological meaning.
pub fn encode_cutoff(dt: DateTime<Utc>) -> String {
  let earliest = NaiveDate::from_ymd_opt(0, 1, 1)
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|d| d.and_utc());
  let latest = NaiveDate::from_ymd_opt(9999, 12, 31)
    .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 999_999_999))
    .map(|d| d.and_utc());

  let clamped = match (earliest, latest) {
    (Some(lo), _) if dt < lo => lo,
    (_, Some(hi)) if dt > hi => hi,
    _ => dt,
  };
  encode_dt(clamped)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `shares` row.
pub struct RawShare {
  pub id:         i64,
  pub content:    String,
  pub kind:       String,
  pub created_at: String,
}

impl RawShare {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawShare {
      id:         row.get(0)?,
      content:    row.get(1)?,
      kind:       row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_share(self) -> Result<Share> {
    Ok(Share {
      id:         ShareId(self.id),
      content:    self.content,
      kind:       self.kind.parse::<ShareKind>()?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
