use axum::body::Body;
use axum::http::{header, HeaderName, Method};
use axum::response::{IntoResponse, Response};
use axum::{extract::FromRef, http::StatusCode, routing::get, Router};
use prometheus::{Encoder, TextEncoder};
use routes::{category_router, error_body, questions_router, quizzes_router};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
}

pub fn build_router(pool: SqlitePool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quizzes_router(state))
        .fallback(|| async {
            tracing::info!("Fallback");
            (StatusCode::NOT_FOUND, error_body(StatusCode::NOT_FOUND))
        })
        .method_not_allowed_fallback(|| async {
            (
                StatusCode::METHOD_NOT_ALLOWED,
                error_body(StatusCode::METHOD_NOT_ALLOWED),
            )
        })
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    // "true" is part of the header list the trivia front-end has always been served
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ]))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
}

pub async fn run_server(pool: SqlitePool, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(pool);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!("Cannot listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    if let Err(error) = encoder.encode(&metrics, &mut buf) {
        tracing::error!("Cannot encode metrics: {error}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        Body::from(buf),
    )
        .into_response()
}
