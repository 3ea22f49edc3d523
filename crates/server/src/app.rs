//! HTTP application wiring (Axum router + static file service).
//!
//! Every GET resolves to a file under the web root when one matches, and to
//! the root `index.html` otherwise, so client-side routing stays with the
//! browser. There are no other routes.

use std::path::Path;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::frontend::INDEX_FILE;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(web_root: &Path) -> Router {
    tracing::info!("serving static files from {}", web_root.display());

    let index = ServeFile::new(web_root.join(INDEX_FILE));
    let static_files = ServeDir::new(web_root)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .fallback_service(static_files)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
