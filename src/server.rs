//! HTTP surface: routes, payload types, and error mapping.

use crate::game::{GuessError, RANGE_LABEL, Verdict};
use crate::session::SessionManager;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Confirmation payload for `/start` and `/new`.
#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Display id of the freshly created session.
    pub game_id: String,
    /// Fixed range descriptor.
    pub range: &'static str,
}

/// Payload for a successful guess.
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    /// low, high, or correct.
    pub result: Verdict,
    /// The number that was guessed.
    pub guess: i64,
    /// Total valid guesses so far.
    pub attempts: u32,
}

/// Payload for `/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Whether a session exists.
    pub game_active: bool,
    /// Valid guesses so far.
    pub attempts_used: u32,
    /// Fixed range descriptor.
    pub range: &'static str,
    /// Most recent valid guess; null when there is none.
    pub last_guess: Option<i64>,
    /// Whether the session has been completed.
    pub game_completed: bool,
}

/// Progress block embedded in the root help payload.
#[derive(Debug, Clone, Serialize)]
pub struct RootProgress {
    /// Whether a session exists.
    pub active: bool,
    /// Valid guesses so far.
    pub attempts: u32,
    /// Whether the session has been completed.
    pub completed: bool,
}

/// Route instructions embedded in the root help payload.
#[derive(Debug, Clone, Serialize)]
pub struct RootInstructions {
    /// How to submit a guess.
    pub guess: &'static str,
    /// How to start over.
    pub new_game: &'static str,
    /// How to check progress.
    pub status: &'static str,
}

/// Help payload for the root page.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// Service banner.
    pub message: &'static str,
    /// Current session progress.
    pub current_game: RootProgress,
    /// How to play.
    pub instructions: RootInstructions,
}

/// Full internal state dump for `/debug`, secret included.
#[derive(Debug, Clone, Serialize)]
pub struct DebugResponse {
    /// Display id of the session.
    pub game_id: String,
    /// The secret number. Diagnostic use only.
    pub secret_number: i64,
    /// Valid guesses so far.
    pub attempts: u32,
    /// Whether the session has been completed.
    pub completed: bool,
    /// Every valid guess in submission order.
    pub history: Vec<i64>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

/// Placeholder body for `/debug` when no session exists.
#[derive(Debug, Clone, Serialize)]
pub struct DebugEmpty {
    /// Explains why there is no state to dump.
    pub message: &'static str,
}

/// Body for all client errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of what was rejected.
    pub detail: String,
}

impl IntoResponse for GuessError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Query parameters for `/guess`. A non-integer `number` is rejected by the
/// extractor as a 400 before any game logic runs.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GuessParams {
    /// The number being guessed.
    pub number: i64,
}

/// Builds the application router over a shared session manager.
#[instrument(skip(sessions))]
pub fn router(sessions: SessionManager) -> Router {
    info!(auto_init = sessions.auto_init(), "Building router");
    Router::new()
        .route("/", get(root))
        .route("/start", get(start).post(start))
        .route("/new", get(new_game))
        .route("/guess", get(guess))
        .route("/status", get(status))
        .route("/debug", get(debug_info))
        .with_state(sessions)
}

/// Starts a new game, replacing any previous one.
#[instrument(skip(sessions))]
async fn start(State(sessions): State<SessionManager>) -> Json<StartResponse> {
    let game_id = sessions.start();
    info!(game_id = %game_id, "New game started");
    Json(StartResponse {
        message: "New game started. Guess the number between 1 and 100!".to_string(),
        game_id,
        range: RANGE_LABEL,
    })
}

/// Browser-friendly alias for `/start` with its own wording.
#[instrument(skip(sessions))]
async fn new_game(State(sessions): State<SessionManager>) -> Json<StartResponse> {
    let game_id = sessions.start();
    info!(game_id = %game_id, "New game started via /new");
    Json(StartResponse {
        message: "Fresh game ready. Guess with /guess?number=YOUR_NUMBER".to_string(),
        game_id,
        range: RANGE_LABEL,
    })
}

/// Applies a guess and reports the verdict.
#[instrument(skip(sessions), fields(number = params.number))]
async fn guess(
    State(sessions): State<SessionManager>,
    Query(params): Query<GuessParams>,
) -> Result<Json<GuessResponse>, GuessError> {
    let outcome = sessions.guess(params.number)?;
    Ok(Json(GuessResponse {
        result: outcome.verdict,
        guess: outcome.guess,
        attempts: outcome.attempts,
    }))
}

/// Reports progress without mutating anything.
#[instrument(skip(sessions))]
async fn status(State(sessions): State<SessionManager>) -> Json<StatusResponse> {
    let status = sessions.status();
    debug!(?status, "Status requested");
    Json(StatusResponse {
        game_active: status.active,
        attempts_used: status.attempts,
        range: RANGE_LABEL,
        last_guess: status.last_guess,
        game_completed: status.completed,
    })
}

/// Help page. Auto-initializes a session first when the manager allows it.
#[instrument(skip(sessions))]
async fn root(State(sessions): State<SessionManager>) -> Json<RootResponse> {
    let status = sessions.ensure_and_status();
    Json(RootResponse {
        message: "Guess the Number API",
        current_game: RootProgress {
            active: status.active,
            attempts: status.attempts,
            completed: status.completed,
        },
        instructions: RootInstructions {
            guess: "GET /guess?number=X where X is your number",
            new_game: "GET /new (or POST /start) for a new game",
            status: "GET /status to see progress",
        },
    })
}

/// Dumps the full session state, secret included.
#[instrument(skip(sessions))]
async fn debug_info(State(sessions): State<SessionManager>) -> Response {
    match sessions.snapshot() {
        Some(session) => Json(DebugResponse {
            game_id: session.id,
            secret_number: session.secret,
            attempts: session.attempts,
            completed: session.completed,
            history: session.history,
            created_at: session.created_at,
        })
        .into_response(),
        None => Json(DebugEmpty {
            message: "No active game",
        })
        .into_response(),
    }
}
