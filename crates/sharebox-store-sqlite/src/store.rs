//! [`SqliteStore`] — the SQLite implementation of [`ShareStore`].

use std::path::Path;

use chrono::{DateTime, Utc};

use sharebox_core::{
  share::{NewShare, Share, ShareId},
  store::ShareStore,
};

use crate::{
  encode::{RawShare, encode_cutoff, encode_stored_dt},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A share store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All clones
/// share one connection thread, which serialises access to the database.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened share store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Other clones of this store fail every
  /// call afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    tracing::debug!("closed share store");
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert `input` stamped with `created_at` and return the stored share.
  async fn insert_share(
    &self,
    input:      NewShare,
    created_at: DateTime<Utc>,
  ) -> Result<Share> {
    let NewShare { content, kind } = input;
    let kind_str = kind.as_str();
    let at_str   = encode_stored_dt(created_at)?;

    let (id, content): (i64, String) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO shares (content, type, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![content, kind_str, at_str],
        )?;
        Ok((conn.last_insert_rowid(), content))
      })
      .await?;

    Ok(Share { id: ShareId(id), content, kind, created_at })
  }
}

// ─── ShareStore impl ─────────────────────────────────────────────────────────

impl ShareStore for SqliteStore {
  type Error = crate::Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create(&self, input: NewShare) -> Result<Share> {
    self.insert_share(input, Utc::now()).await
  }

  async fn create_at(
    &self,
    input:      NewShare,
    created_at: DateTime<Utc>,
  ) -> Result<Share> {
    self.insert_share(input, created_at).await
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_recent(&self) -> Result<Vec<Share>> {
    let raws: Vec<RawShare> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, content, type, created_at
           FROM shares
           ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt
          .query_map([], RawShare::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShare::into_share).collect()
  }

  // ── Deletes ───────────────────────────────────────────────────────────────

  async fn delete_by_id(&self, id: ShareId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM shares WHERE id = ?1",
          rusqlite::params![id.0],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }

  async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64> {
    let cutoff_str = encode_cutoff(cutoff);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM shares WHERE created_at < ?1",
          rusqlite::params![cutoff_str],
        )?)
      })
      .await?;

    Ok(removed as u64)
  }
}
