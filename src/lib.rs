//! Guess the Number - single-session game server
//!
//! A minimal HTTP service for a guess-the-number game. One secret integer in
//! [1,100] lives in a single process-wide session; clients guess and receive
//! low/high/correct verdicts until the session completes.
//!
//! # Architecture
//!
//! - **Game**: the [`GameSession`] entity and its guess state machine
//! - **Session**: the [`SessionManager`] owning the one shared session
//! - **Server**: the axum routes mapping sessions to JSON payloads
//!
//! # Example
//!
//! ```
//! use guess_server::{SessionManager, Verdict};
//!
//! let sessions = SessionManager::new();
//! sessions.start_with_secret(42);
//! let outcome = sessions.guess(50).unwrap();
//! assert_eq!(outcome.verdict, Verdict::High);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod server;
mod session;

// Crate-level exports - game rules
pub use game::{GameSession, GuessError, RANGE_LABEL, SECRET_MAX, SECRET_MIN, Verdict};

// Crate-level exports - session management
pub use session::{GuessOutcome, SessionManager, SessionStatus};

// Crate-level exports - HTTP surface
pub use server::{
    DebugEmpty, DebugResponse, ErrorResponse, GuessParams, GuessResponse, RootInstructions,
    RootProgress, RootResponse, StartResponse, StatusResponse, router,
};
