//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{TimeDelta, TimeZone as _, Utc};
use sharebox_core::{
  share::{NewShare, ShareId, ShareKind},
  store::ShareStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn days(n: i64) -> TimeDelta { TimeDelta::days(n) }

// ─── Create / list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_list_contains_share() {
  let s = store().await;

  let before = Utc::now();
  let created = s.create(NewShare::text("hello")).await.unwrap();
  let after = Utc::now();

  let all = s.list_recent().await.unwrap();
  let matching: Vec<_> = all.iter().filter(|sh| sh.id == created.id).collect();
  assert_eq!(matching.len(), 1);

  let listed = matching[0];
  assert_eq!(listed.content, "hello");
  assert_eq!(listed.kind, ShareKind::Text);
  assert!(listed.created_at >= before && listed.created_at <= after);
  assert_eq!(listed, &created);
}

#[tokio::test]
async fn text_share_is_first_in_listing() {
  let s = store().await;
  s.create_at(NewShare::text("older"), Utc::now() - days(1))
    .await
    .unwrap();
  s.create(NewShare::text("hello")).await.unwrap();

  let all = s.list_recent().await.unwrap();
  assert_eq!(all[0].kind, ShareKind::Text);
  assert_eq!(all[0].content, "hello");
}

#[tokio::test]
async fn image_content_is_stored_verbatim() {
  let s = store().await;
  s.create(NewShare::image("AAA=")).await.unwrap();

  let all = s.list_recent().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].kind, ShareKind::Image);
  assert_eq!(all[0].content, "AAA=");
}

#[tokio::test]
async fn empty_content_is_accepted() {
  let s = store().await;
  let created = s.create(NewShare::text("")).await.unwrap();
  assert_eq!(created.content, "");
  assert_eq!(s.list_recent().await.unwrap().len(), 1);
}

#[tokio::test]
async fn ids_are_unique_and_increasing() {
  let s = store().await;
  let a = s.create(NewShare::text("a")).await.unwrap();
  let b = s.create(NewShare::text("b")).await.unwrap();
  let c = s.create(NewShare::image("Yw==")).await.unwrap();

  assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let a = s.create(NewShare::text("a")).await.unwrap();
  s.delete_by_id(a.id).await.unwrap();

  let b = s.create(NewShare::text("b")).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn listing_is_newest_first() {
  let s = store().await;
  let now = Utc::now();
  s.create_at(NewShare::text("middle"), now - days(2)).await.unwrap();
  s.create_at(NewShare::text("newest"), now).await.unwrap();
  s.create_at(NewShare::text("oldest"), now - days(10)).await.unwrap();
  s.create_at(NewShare::text("sub-second"), now - TimeDelta::milliseconds(5))
    .await
    .unwrap();

  let all = s.list_recent().await.unwrap();
  let contents: Vec<_> = all.iter().map(|sh| sh.content.as_str()).collect();
  assert_eq!(contents, ["newest", "sub-second", "middle", "oldest"]);
  assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn equal_timestamps_order_by_descending_id() {
  let s = store().await;
  let at = Utc::now();
  let first = s.create_at(NewShare::text("first"), at).await.unwrap();
  let second = s.create_at(NewShare::text("second"), at).await.unwrap();

  let all = s.list_recent().await.unwrap();
  assert_eq!(all[0].id, second.id);
  assert_eq!(all[1].id, first.id);
}

// ─── Delete by id ────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_id_removes_only_that_share() {
  let s = store().await;
  let keep = s.create(NewShare::text("keep")).await.unwrap();
  let drop = s.create(NewShare::text("drop")).await.unwrap();

  assert!(s.delete_by_id(drop.id).await.unwrap());

  let all = s.list_recent().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, keep.id);
}

#[tokio::test]
async fn delete_by_id_is_idempotent() {
  let s = store().await;
  s.create(NewShare::text("keep")).await.unwrap();
  let drop = s.create(NewShare::text("drop")).await.unwrap();

  assert!(s.delete_by_id(drop.id).await.unwrap());
  let once = s.list_recent().await.unwrap();

  assert!(!s.delete_by_id(drop.id).await.unwrap());
  let twice = s.list_recent().await.unwrap();

  assert_eq!(once, twice);
}

#[tokio::test]
async fn delete_missing_id_is_not_an_error() {
  let s = store().await;
  assert!(!s.delete_by_id(ShareId(404)).await.unwrap());
}

// ─── Retention ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_older_than_keeps_recent_shares() {
  let s = store().await;
  let now = Utc::now();
  s.create_at(NewShare::text("now"), now).await.unwrap();
  s.create_at(NewShare::text("181 days"), now - days(181)).await.unwrap();
  s.create_at(NewShare::text("179 days"), now - days(179)).await.unwrap();

  let removed = s.delete_older_than(days(180)).await.unwrap();
  assert_eq!(removed, 1);

  let mut remaining: Vec<_> = s
    .list_recent()
    .await
    .unwrap()
    .into_iter()
    .map(|sh| sh.content)
    .collect();
  remaining.sort();
  assert_eq!(remaining, ["179 days", "now"]);
}

#[tokio::test]
async fn delete_older_than_is_idempotent() {
  let s = store().await;
  let now = Utc::now();
  s.create_at(NewShare::text("old"), now - days(365)).await.unwrap();
  s.create_at(NewShare::text("new"), now).await.unwrap();

  assert_eq!(s.delete_older_than(days(180)).await.unwrap(), 1);
  let once = s.list_recent().await.unwrap();

  assert_eq!(s.delete_older_than(days(180)).await.unwrap(), 0);
  assert_eq!(s.list_recent().await.unwrap(), once);
}

#[tokio::test]
async fn cutoff_boundary_is_exclusive() {
  let s = store().await;
  let cutoff = Utc::now() - days(180);
  s.create_at(NewShare::text("at cutoff"), cutoff).await.unwrap();
  s.create_at(NewShare::text("just before"), cutoff - TimeDelta::nanoseconds(1))
    .await
    .unwrap();
  s.create_at(NewShare::text("just after"), cutoff + TimeDelta::nanoseconds(1))
    .await
    .unwrap();

  assert_eq!(s.delete_created_before(cutoff).await.unwrap(), 1);

  let remaining: Vec<_> = s
    .list_recent()
    .await
    .unwrap()
    .into_iter()
    .map(|sh| sh.content)
    .collect();
  assert_eq!(remaining, ["just after", "at cutoff"]);
}

#[tokio::test]
async fn delete_older_than_on_empty_store_is_noop() {
  let s = store().await;
  assert_eq!(s.delete_older_than(days(180)).await.unwrap(), 0);
}

#[tokio::test]
async fn five_digit_year_is_rejected_and_listing_still_works() {
  let s = store().await;
  let far_future = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();

  let err = s
    .create_at(NewShare::text("year 10000"), far_future)
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::TimestampOutOfRange(_)));

  s.create(NewShare::text("now")).await.unwrap();
  let all = s.list_recent().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].content, "now");
}

#[tokio::test]
async fn far_future_cutoff_deletes_everything() {
  let s = store().await;
  s.create(NewShare::text("a")).await.unwrap();
  s.create_at(NewShare::text("b"), Utc::now() - days(1)).await.unwrap();

  let cutoff = Utc.with_ymd_and_hms(20000, 1, 1, 0, 0, 0).unwrap();
  assert_eq!(s.delete_created_before(cutoff).await.unwrap(), 2);
  assert!(s.list_recent().await.unwrap().is_empty());
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_persists_across_reopen() {
  let path = std::env::temp_dir().join(format!(
    "sharebox-store-test-{}-{}.db",
    std::process::id(),
    Utc::now().timestamp_nanos_opt().unwrap_or_default(),
  ));

  let s = SqliteStore::open(&path).await.unwrap();
  let created = s.create(NewShare::text("persisted")).await.unwrap();
  s.close().await.unwrap();

  let reopened = SqliteStore::open(&path).await.unwrap();
  let all = reopened.list_recent().await.unwrap();
  assert_eq!(all, vec![created]);
  reopened.close().await.unwrap();

  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}

#[tokio::test]
async fn calls_after_close_fail() {
  let s = store().await;
  let handle = s.clone();
  s.close().await.unwrap();

  let err = handle.list_recent().await.unwrap_err();
  assert!(matches!(err, crate::Error::StorageUnavailable(_)));
}
