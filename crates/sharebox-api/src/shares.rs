//! Handlers for the share endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/shares`     | All shares, newest first |
//! | `POST`   | `/share`      | `multipart/form-data`: a `file` part (image) or a `content` part (text) |
//! | `DELETE` | `/share/{id}` | Succeeds whether or not the share exists |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Multipart, Path, State},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use serde_json::{Value, json};
use sharebox_core::{
  share::{NewShare, Share, ShareId},
  store::ShareStore,
};

use crate::error::ApiError;

fn success() -> Json<Value> { Json(json!({ "status": "success" })) }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /shares`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Share>>, ApiError>
where
  S: ShareStore,
{
  let shares = store.list_recent().await.map_err(ApiError::store)?;
  Ok(Json(shares))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Read a share submission from a multipart form.
///
/// A `file` part carrying a filename makes an image share whose content is
/// the base64 encoding of the uploaded bytes, regardless of part order. A
/// `file` part without a filename is not an upload and is ignored. Otherwise the `content` part
/// becomes a text share; a missing `content` part yields empty text. Unknown
/// parts are ignored.
pub async fn read_submission(mut multipart: Multipart) -> Result<NewShare, ApiError> {
  let mut file: Option<String> = None;
  let mut text: Option<String> = None;

  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| ApiError::BadRequest(format!("failed to read multipart field: {e}")))?
  {
    let name = field.name().unwrap_or_default().to_owned();
    let is_upload = field.file_name().is_some();
    match (name.as_str(), is_upload) {
      ("file", true) => {
        let bytes = field
          .bytes()
          .await
          .map_err(|e| ApiError::BadRequest(format!("failed to read file: {e}")))?;
        file = Some(B64.encode(&bytes));
      }
      ("content", _) => {
        let value = field
          .text()
          .await
          .map_err(|e| ApiError::BadRequest(format!("failed to read content: {e}")))?;
        text = Some(value);
      }
      _ => {}
    }
  }

  Ok(match file {
    Some(encoded) => NewShare::image(encoded),
    None => NewShare::text(text.unwrap_or_default()),
  })
}

/// `POST /share` — returns `{"status":"success"}`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  multipart: Multipart,
) -> Result<Json<Value>, ApiError>
where
  S: ShareStore,
{
  let input = read_submission(multipart).await?;
  let share = store.create(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = %share.id, kind = %share.kind, "share created");
  Ok(success())
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /share/{id}` — returns `{"status":"success"}` even when `id` is
/// unknown.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ShareId>,
) -> Result<Json<Value>, ApiError>
where
  S: ShareStore,
{
  let removed = store.delete_by_id(id).await.map_err(ApiError::store)?;
  tracing::debug!(%id, removed, "share delete requested");
  Ok(success())
}
