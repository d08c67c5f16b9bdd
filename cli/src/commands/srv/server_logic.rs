//! # Medi Wizard HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Serves one shared consultation as a small JSON API, for web or chat front
//! ends that render the conversation themselves.
//!
//! | Method | Path               | Body / Response                                  |
//! |--------|--------------------|--------------------------------------------------|
//! | GET    | `/api/opening`     | `{ reply, stage, input_hint }`                   |
//! | POST   | `/api/message`     | `{ text }` -> `{ reply, stage, input_hint }`     |
//! | GET    | `/api/session`     | `{ stage, profile, symptoms }`                   |
//! | GET    | `/api/specialists` | `["Cardiologist / Pulmonologist", ...]`          |
//!
//! ## Architecture
//!
//! The session lives behind a `tokio::sync::Mutex`. A message handler spawns a
//! task that takes the lock, waits the reply delay, runs the turn and stores the
//! new session before releasing it. The handler only awaits that task, so a
//! client that disconnects mid-turn cannot cut the turn short. The mutex queues
//! waiters in FIFO order, so messages sent while a reply is pending are
//! processed one at a time in the order they arrived.
//!
use super::config::ServerConfig;
use crate::consult::{Session, Stage, Wizard};
use crate::core::error::Result;
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    wizard: Arc<Wizard>,
    session: Arc<Mutex<Session>>,
    reply_delay: Duration,
}

impl AppState {
    pub fn new(wizard: Wizard, reply_delay: Duration) -> Self {
        Self {
            wizard: Arc::new(wizard),
            session: Arc::new(Mutex::new(Session::new())),
            reply_delay,
        }
    }
}

/// Body of `POST /api/message`.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// A bot message plus the stage it leaves the conversation in.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
    pub stage: Stage,
    pub input_hint: &'static str,
}

impl ReplyResponse {
    fn new(reply: String, stage: Stage) -> Self {
        Self {
            reply,
            stage,
            input_hint: stage.input_hint(),
        }
    }
}

/// # Run HTTP Server (`run_server`)
///
/// Finds a free port starting at the configured one, binds, and serves the
/// consultation API until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig, wizard: Wizard) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let app = create_app(&config, AppState::new(wizard, config.reply_delay));

    println!("\n=================================================================");
    println!("🩺 Medi Wizard consultation API");
    println!("🌐 Local URL:         http://{}", addr);
    println!("⏱️  Reply delay:       {} ms", config.reply_delay.as_millis());
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Tries `start_port` and the ports after it until one can be bound.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = current_port.checked_add(1).ok_or_else(|| {
                    anyhow::anyhow!("Ran out of port numbers above {}", start_port)
                })?;
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// Builds the router with tracing and (optionally permissive) CORS.
fn create_app(config: &ServerConfig, state: AppState) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/opening", get(get_opening))
        .route("/api/message", post(post_message))
        .route("/api/session", get(get_session))
        .route("/api/specialists", get(get_specialists))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

async fn get_opening(State(state): State<AppState>) -> Json<ReplyResponse> {
    let stage = state.session.lock().await.stage();
    Json(ReplyResponse::new(state.wizard.opening().to_string(), stage))
}

async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> std::result::Result<Json<ReplyResponse>, StatusCode> {
    // The turn runs on its own task: a dropped request leaves it running to completion.
    let turn = tokio::spawn(run_turn(state, request.text));
    match turn.await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Consultation turn task failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Runs one turn against the shared session.
async fn run_turn(state: AppState, text: String) -> ReplyResponse {
    // Held across the delay so queued messages run one at a time, in order.
    let mut session = state.session.lock().await;
    if !state.reply_delay.is_zero() {
        tokio::time::sleep(state.reply_delay).await;
    }

    let current = std::mem::take(&mut *session);
    let (next, reply) = state.wizard.respond(current, &text);
    *session = next;
    debug!("Session stage after message: {:?}", session.stage());

    ReplyResponse::new(reply, session.stage())
}

async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.lock().await.clone())
}

async fn get_specialists(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .wizard
            .matcher()
            .specialists()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
