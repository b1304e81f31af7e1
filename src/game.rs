//! Core guessing-game entity and rules.

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Lower bound of the secret range (inclusive).
pub const SECRET_MIN: i64 = 1;
/// Upper bound of the secret range (inclusive).
pub const SECRET_MAX: i64 = 100;
/// Human-readable range descriptor used in responses.
pub const RANGE_LABEL: &str = "1-100";

/// Outcome of comparing a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Guess is below the secret.
    #[display("low")]
    Low,
    /// Guess is above the secret.
    #[display("high")]
    High,
    /// Guess equals the secret; the session is now completed.
    #[display("correct")]
    Correct,
}

/// Errors a guess can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Guess outside the [1,100] range.
    #[display("The number must be between 1 and 100")]
    OutOfRange,
    /// Guess submitted after the session was completed.
    #[display("This game is already completed. Start a new one with /start or /new")]
    SessionCompleted,
    /// Guess submitted with no active session (strict mode only).
    #[display("No active game. Start one with /start")]
    NoActiveSession,
}

/// A single guessing-game session.
///
/// Holds the secret number and all progress. Exactly zero or one of these
/// exists per process; starting a new game replaces the old one outright.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    /// Short opaque identifier, for display only.
    pub id: String,
    /// The number to guess. Fixed for the session's lifetime.
    pub secret: i64,
    /// Valid guesses so far. Always equals `history.len()`.
    pub attempts: u32,
    /// True once a guess matched the secret. Terminal.
    pub completed: bool,
    /// Every valid guess in submission order.
    pub history: Vec<i64>,
    /// Creation time, informational only.
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// Creates a session with a random secret in [1,100].
    #[instrument]
    pub fn new() -> Self {
        let secret = rand::thread_rng().gen_range(SECRET_MIN..=SECRET_MAX);
        Self::with_secret(secret)
    }

    /// Creates a session with a known secret. This is the deterministic seam
    /// for tests; production code goes through [`GameSession::new`].
    pub fn with_secret(secret: i64) -> Self {
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_string();
        info!(game_id = %id, "Creating new game session");
        Self {
            id,
            secret,
            attempts: 0,
            completed: false,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Applies a guess: validates it, records it, and returns the verdict.
    ///
    /// A rejected guess leaves the session untouched, so `attempts` and
    /// `history` only ever move in lockstep.
    ///
    /// # Errors
    ///
    /// - [`GuessError::OutOfRange`] if `number` is outside [1,100].
    /// - [`GuessError::SessionCompleted`] if the game is already over.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn apply_guess(&mut self, number: i64) -> Result<Verdict, GuessError> {
        if !(SECRET_MIN..=SECRET_MAX).contains(&number) {
            return Err(GuessError::OutOfRange);
        }
        if self.completed {
            return Err(GuessError::SessionCompleted);
        }

        self.attempts += 1;
        self.history.push(number);

        let verdict = if number < self.secret {
            Verdict::Low
        } else if number > self.secret {
            Verdict::High
        } else {
            self.completed = true;
            Verdict::Correct
        };

        info!(
            guess = number,
            attempts = self.attempts,
            verdict = %verdict,
            "Guess applied"
        );

        Ok(verdict)
    }

    /// The most recent valid guess, if any.
    pub fn last_guess(&self) -> Option<i64> {
        self.history.last().copied()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
