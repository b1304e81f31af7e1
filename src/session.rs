//! Ownership of the single process-wide game session.

use crate::game::{GameSession, GuessError, Verdict};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Result of a successful guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// How the guess compared to the secret.
    pub verdict: Verdict,
    /// The number that was guessed.
    pub guess: i64,
    /// Total valid guesses so far, this one included.
    pub attempts: u32,
}

/// Read-only view of the current session's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    /// Whether a session exists.
    pub active: bool,
    /// Valid guesses so far (0 when inactive).
    pub attempts: u32,
    /// Most recent valid guess, if any.
    pub last_guess: Option<i64>,
    /// Whether the session has been completed.
    pub completed: bool,
}

/// Owns the one active [`GameSession`] and serializes all access to it.
///
/// All mutation happens under a single mutex, so concurrent guesses cannot
/// lose updates and `attempts` stays in lockstep with the history length.
/// Cloning is cheap and shares the same session.
#[derive(Debug, Clone)]
pub struct SessionManager {
    current: Arc<Mutex<Option<GameSession>>>,
    auto_init: bool,
}

impl SessionManager {
    /// Creates a manager in the default auto-initializing mode: reading the
    /// root page or guessing with no session silently starts one.
    #[instrument]
    pub fn new() -> Self {
        Self::with_auto_init(true)
    }

    /// Creates a manager with the auto-init behavior chosen explicitly.
    /// Strict mode (`auto_init = false`) rejects guesses with no session.
    #[instrument]
    pub fn with_auto_init(auto_init: bool) -> Self {
        info!(auto_init, "Creating session manager");
        Self {
            current: Arc::new(Mutex::new(None)),
            auto_init,
        }
    }

    /// Whether this manager auto-initializes on read access.
    pub fn auto_init(&self) -> bool {
        self.auto_init
    }

    /// Starts a new game, unconditionally replacing any previous session.
    /// Returns the new session's display id.
    #[instrument(skip(self))]
    pub fn start(&self) -> String {
        self.install(GameSession::new())
    }

    /// Starts a new game with a known secret. Deterministic seam for tests.
    pub fn start_with_secret(&self, secret: i64) -> String {
        self.install(GameSession::with_secret(secret))
    }

    fn install(&self, session: GameSession) -> String {
        let id = session.id.clone();
        let mut current = self.current.lock().unwrap();
        if let Some(old) = current.replace(session) {
            debug!(old_id = %old.id, new_id = %id, "Replaced previous session");
        } else {
            debug!(game_id = %id, "Installed first session");
        }
        id
    }

    /// Applies a guess to the current session.
    ///
    /// With auto-init enabled a missing session is created on the spot;
    /// in strict mode it is an error.
    ///
    /// # Errors
    ///
    /// [`GuessError::NoActiveSession`] in strict mode with no session, plus
    /// whatever [`GameSession::apply_guess`] rejects.
    #[instrument(skip(self))]
    pub fn guess(&self, number: i64) -> Result<GuessOutcome, GuessError> {
        let mut current = self.current.lock().unwrap();

        if current.is_none() && !self.auto_init {
            warn!(guess = number, "Guess rejected: no active session");
            return Err(GuessError::NoActiveSession);
        }
        let session = current.get_or_insert_with(|| {
            info!("No active session, auto-initializing");
            GameSession::new()
        });

        let verdict = session.apply_guess(number)?;
        Ok(GuessOutcome {
            verdict,
            guess: number,
            attempts: session.attempts,
        })
    }

    /// Reports progress without mutating anything. A missing session reports
    /// as inactive and zeroed rather than failing.
    #[instrument(skip(self))]
    pub fn status(&self) -> SessionStatus {
        let current = self.current.lock().unwrap();
        match current.as_ref() {
            Some(session) => SessionStatus {
                active: true,
                attempts: session.attempts,
                last_guess: session.last_guess(),
                completed: session.completed,
            },
            None => SessionStatus {
                active: false,
                attempts: 0,
                last_guess: None,
                completed: false,
            },
        }
    }

    /// Ensures a session exists (auto-init mode only) and reports progress.
    /// Used by the root page, which shows progress after initializing.
    #[instrument(skip(self))]
    pub fn ensure_and_status(&self) -> SessionStatus {
        if self.auto_init {
            let mut current = self.current.lock().unwrap();
            if current.is_none() {
                info!("No active session, auto-initializing");
                *current = Some(GameSession::new());
            }
        }
        self.status()
    }

    /// Full clone of the current session, secret included. Diagnostic use only.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Option<GameSession> {
        self.current.lock().unwrap().clone()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
