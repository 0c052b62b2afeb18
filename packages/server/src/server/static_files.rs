use axum::{
    extract::OriginalUri,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Browser UI, embedded at compile time
#[derive(RustEmbed)]
#[folder = "static"]
pub struct UiAssets;

/// Serve the UI from embedded assets with SPA fallback
pub async fn serve_ui(OriginalUri(uri): OriginalUri) -> Response {
    serve_spa::<UiAssets>(uri).await
}

/// Generic SPA serving function with fallback to index.html
async fn serve_spa<E: RustEmbed>(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Unknown API paths get a real 404 rather than the page
    if path.starts_with("api/") {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    }

    // If path is empty, serve index.html
    let path = if path.is_empty() { "index.html" } else { path };

    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => match E::get("index.html") {
            Some(content) => ([(header::CONTENT_TYPE, "text/html")], content.data).into_response(),
            None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        },
    }
}
