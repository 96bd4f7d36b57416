//! HTTP server for resolving sentiment colors on demand.
//!
//! Exposes the palette, a health check, and a per-label swatch endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::{IpAddr, SocketAddr};
use terrors::{OneOf, E3};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::colors;
use crate::config::{Config, SwatchConfig};
use crate::errors::{Result, ServerError};
use crate::swatch::{self, SwatchFormat};

/// A listen address with any of its parts possibly missing: a full socket
/// address, a bare IP, or a bare port.
pub type AddressComponents = OneOf<(SocketAddr, IpAddr, u16)>;

/// Application state shared with handlers
#[derive(Clone, Debug)]
struct AppState {
    swatch: SwatchConfig,
}

/// Middleware to add Server header to all responses
async fn add_server_header(request: axum::extract::Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let server_header = format!("sentiment-hue/{}", env!("CARGO_PKG_VERSION"));

    if let Ok(header_value) = axum::http::HeaderValue::from_str(&server_header) {
        response
            .headers_mut()
            .insert(axum::http::header::SERVER, header_value);
    }

    response
}

/// Parses an address argument into whichever components it contains.
///
/// Accepts `HOST:PORT`, `[IPV6]:PORT`, a bare IPv4/IPv6 host (brackets
/// optional), or a bare port (`8080` or `:8080`).
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] if none of the forms match.
pub fn parse_address_components(addr: &str) -> std::result::Result<AddressComponents, ServerError> {
    let addr = addr.trim();

    if let Ok(socket) = addr.parse::<SocketAddr>() {
        return Ok(OneOf::new(socket));
    }

    let host = addr
        .strip_prefix('[')
        .and_then(|host| host.strip_suffix(']'))
        .unwrap_or(addr);
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(OneOf::new(ip));
    }

    if let Ok(port) = addr.strip_prefix(':').unwrap_or(addr).parse::<u16>() {
        return Ok(OneOf::new(port));
    }

    Err(ServerError::InvalidAddress(addr.to_string()))
}

/// Resolves the address to listen on, filling missing parts from the configuration.
///
/// With no argument, the configured host and port are used.
pub fn resolve_address(addr: Option<&str>, config: &Config) -> Result<SocketAddr> {
    let Some(addr) = addr else {
        return Ok(SocketAddr::new(config.default_host(), config.default_port()));
    };

    let resolved = match parse_address_components(addr)?.to_enum() {
        E3::A(socket) => socket,
        E3::B(ip) => SocketAddr::new(ip, config.default_port()),
        E3::C(port) => SocketAddr::new(config.default_host(), port),
    };

    Ok(resolved)
}

/// Builds the application router.
pub fn router(config: &Config) -> Router {
    let state = AppState {
        swatch: *config.swatch_config(),
    };

    Router::new()
        .route("/", get(palette_handler))
        .route("/health", get(health_handler))
        .route("/{sentiment}", get(swatch_handler))
        .layer(middleware::from_fn(add_server_header))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server with graceful shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn start_server(addr: SocketAddr, config: &Config) -> Result<()> {
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::BindError(format!("{}: {}", addr, e)))?;

    info!("Listening on http://{}", addr);
    info!("Server starting, press Ctrl+C to shut down.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::StartError(e.to_string()))?;

    info!("Graceful shutdown complete.");

    Ok(())
}

/// Listens for the shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown.");
        },
        _ = terminate => {
            info!("Terminate signal received, starting graceful shutdown.");
        },
    }
}

/// The full palette as a JSON object of sentiment name to color.
pub fn palette_json() -> serde_json::Value {
    let palette = colors::palette()
        .into_iter()
        .map(|(sentiment, color)| (sentiment.to_string(), serde_json::Value::from(color)))
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(palette)
}

/// Handles index route - returns the palette.
///
/// Endpoint: GET /
#[instrument]
async fn palette_handler() -> Json<serde_json::Value> {
    Json(palette_json())
}

/// Handles health check route - returns simple OK response.
///
/// Endpoint: GET /health
async fn health_handler() -> Response {
    ([(axum::http::header::CONTENT_TYPE, "text/plain")], "OK").into_response()
}

/// Handles swatch requests.
///
/// Endpoint: GET /:sentiment or GET /:sentiment.:extension
/// Returns: The swatch in the requested format (JSON by default)
async fn swatch_handler(
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> std::result::Result<Response, StatusCode> {
    let (label, format) = parse_label_and_format(&segment);

    let body = swatch::render(&label, format, &state.swatch).map_err(|e| {
        tracing::error!("Failed to render swatch: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::debug!(label = %label, format = ?format, "Rendered swatch");

    Ok(([(axum::http::header::CONTENT_TYPE, format.mime_type())], body).into_response())
}

/// Splits a path segment into the label and the requested format.
///
/// An unrecognized extension is treated as part of the label, so `so.so`
/// resolves the label `so.so` as JSON.
pub fn parse_label_and_format(segment: &str) -> (String, SwatchFormat) {
    if let Some((label, extension)) = segment.rsplit_once('.') {
        if let Some(format) = SwatchFormat::parse_extension(extension) {
            return (label.to_string(), format);
        }
    }

    (segment.to_string(), SwatchFormat::default())
}
