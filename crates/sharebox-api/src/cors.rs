//! CORS policy for browser clients.
//!
//! Any origin may call the API with credentials: the request `Origin` is
//! echoed back. Preflight requests are answered here and never reach a
//! handler.

use axum::http::{
  HeaderName, Method,
  header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

const X_CSRF_TOKEN: HeaderName = HeaderName::from_static("x-csrf-token");

pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_credentials(true)
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([
      ORIGIN,
      CONTENT_TYPE,
      CONTENT_LENGTH,
      ACCEPT_ENCODING,
      X_CSRF_TOKEN,
      AUTHORIZATION,
    ])
}
