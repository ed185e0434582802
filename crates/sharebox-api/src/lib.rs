//! HTTP API for sharebox.
//!
//! Exposes an axum [`Router`] backed by any [`sharebox_core::store::ShareStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = sharebox_api::api_router(store.clone());
//! ```

pub mod cors;
pub mod error;
pub mod shares;

use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{delete, get, post},
};
use sharebox_core::store::ShareStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`, with CORS applied.
///
/// Uploads are not size-limited.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ShareStore + 'static,
{
  Router::new()
    .route("/shares", get(shares::list::<S>))
    .route(
      "/share",
      post(shares::create::<S>).layer(DefaultBodyLimit::disable()),
    )
    .route("/share/{id}", delete(shares::delete_one::<S>))
    .layer(cors::cors_layer())
    .with_state(store)
}
