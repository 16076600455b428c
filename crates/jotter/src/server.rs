//! HTTP server assembly.
//!
//! Combines the notes API with static asset serving, request tracing and a
//! body size limit, then runs it until a shutdown signal arrives.

use std::future::Future;

use axum::extract::DefaultBodyLimit;
use axum::routing::get_service;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{self, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::storage::NoteStore;

/// Build the full application router.
///
/// `/notes` serves `notes.html`; any other path not handled by the API is
/// looked up in the public directory, falling back to `index.html`. A `GET`
/// on a note path has no API meaning and gets `index.html` as well.
#[must_use]
pub fn app(state: AppState, config: &Config) -> Router {
    let index = ServeFile::new(config.index_page());
    let assets = ServeDir::new(&config.assets.public_dir).fallback(index.clone());

    api::router(state)
        .route("/api/notes/:id", get_service(index))
        .route_service("/notes", ServeFile::new(config.notes_page()))
        .fallback_service(assets)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured listening address.
///
/// # Errors
///
/// Returns an error if the host is invalid or the port cannot be bound.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    Ok(listener)
}

/// Run the server described by `config` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(config: &Config) -> Result<()> {
    let store = NoteStore::new(&config.storage.path);
    if !store.exists().await {
        warn!(
            "Note store {} does not exist; run `jotter init` to create it",
            store.path().display()
        );
    }

    let router = app(AppState::new(store), config);
    let listener = bind(config).await?;
    serve_with_shutdown(listener, router, shutdown_signal()).await
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before returning.
///
/// # Errors
///
/// Returns an error if accepting connections fails.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!("Server is live at http://localhost:{}", local_addr.port());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    use super::*;

    const INDEX_HTML: &str = "<html>index</html>";
    const NOTES_HTML: &str = "<html>notes</html>";

    async fn create_test_config() -> (Config, TempDir) {
        let dir = TempDir::new().expect("temp dir should be created");
        let public = dir.path().join("public");
        std::fs::create_dir_all(public.join("assets")).unwrap();
        std::fs::write(public.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(public.join("notes.html"), NOTES_HTML).unwrap();
        std::fs::write(public.join("assets").join("styles.css"), "body {}").unwrap();

        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.storage.path = dir.path().join("db").join("db.json");
        config.assets.public_dir = public;

        NoteStore::new(&config.storage.path)
            .init(false)
            .await
            .expect("store should initialize");
        (config, dir)
    }

    fn test_app(config: &Config) -> Router {
        app(AppState::new(NoteStore::new(&config.storage.path)), config)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn notes_page_is_served() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/notes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, NOTES_HTML);
    }

    #[tokio::test]
    async fn root_serves_index() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/some/unknown/page").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn get_on_note_id_path_falls_back_to_index() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/api/notes/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn delete_still_routes_to_api() {
        let (config, _dir) = create_test_config().await;
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/notes/abc")
            .body(Body::empty())
            .expect("request");
        let response = test_app(&config).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert_eq!(
            String::from_utf8_lossy(&body),
            r#"{"message":"Note deleted successfully!"}"#
        );
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/assets/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn api_routes_take_precedence() {
        let (config, _dir) = create_test_config().await;
        let (status, body) = get(&test_app(&config), "/api/notes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let (mut config, _dir) = create_test_config().await;
        config.server.max_body_bytes = 64;
        let app = test_app(&config);

        let body = format!(r#"{{"title": "{}"}}"#, "x".repeat(256));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/notes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let (_, listed) = get(&app, "/api/notes").await;
        assert_eq!(listed, "[]");
    }

    #[tokio::test]
    async fn bind_uses_configured_host() {
        let (config, _dir) = create_test_config().await;
        let listener = bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn serves_over_tcp_until_shutdown() {
        let (config, _dir) = create_test_config().await;
        let listener = bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_shutdown(
            listener,
            test_app(&config),
            async move {
                let _ = stop_rx.await;
            },
        ));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/notes HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("[]"));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn missing_public_dir_is_not_found() {
        let (mut config, _dir) = create_test_config().await;
        config.assets.public_dir = Path::new("/nonexistent/public").to_path_buf();
        let (status, _) = get(&test_app(&config), "/notes").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
