//! Tests for the session manager state machine.

use guess_server::{GuessError, SessionManager, Verdict};

#[test]
fn test_forced_secret_game() {
    let sessions = SessionManager::new();
    sessions.start_with_secret(42);

    let outcome = sessions.guess(50).unwrap();
    assert_eq!(outcome.verdict, Verdict::High);
    assert_eq!(outcome.attempts, 1);

    let outcome = sessions.guess(25).unwrap();
    assert_eq!(outcome.verdict, Verdict::Low);
    assert_eq!(outcome.attempts, 2);

    let outcome = sessions.guess(42).unwrap();
    assert_eq!(outcome.verdict, Verdict::Correct);
    assert_eq!(outcome.attempts, 3);

    let status = sessions.status();
    assert!(status.completed);
    assert_eq!(status.last_guess, Some(42));
}

#[test]
fn test_out_of_range_guess_rejected() {
    let sessions = SessionManager::new();
    sessions.start_with_secret(42);

    assert_eq!(sessions.guess(0), Err(GuessError::OutOfRange));
    assert_eq!(sessions.guess(101), Err(GuessError::OutOfRange));

    // Rejection repeats identically and never mutates
    assert_eq!(sessions.guess(0), Err(GuessError::OutOfRange));
    let status = sessions.status();
    assert_eq!(status.attempts, 0);
    assert_eq!(status.last_guess, None);
}

#[test]
fn test_fresh_strict_status_is_zeroed() {
    let sessions = SessionManager::with_auto_init(false);

    let status = sessions.status();
    assert!(!status.active);
    assert_eq!(status.attempts, 0);
    assert_eq!(status.last_guess, None);
    assert!(!status.completed);
}

#[test]
fn test_completed_session_rejects_guesses() {
    let sessions = SessionManager::new();
    sessions.start_with_secret(42);
    sessions.guess(42).unwrap();

    assert_eq!(sessions.guess(10), Err(GuessError::SessionCompleted));

    let status = sessions.status();
    assert_eq!(status.attempts, 1);
    assert_eq!(status.last_guess, Some(42));
    assert!(status.completed);
}

#[test]
fn test_strict_mode_requires_session() {
    let sessions = SessionManager::with_auto_init(false);
    assert_eq!(sessions.guess(50), Err(GuessError::NoActiveSession));

    // Explicit start unblocks guessing
    sessions.start_with_secret(42);
    assert!(sessions.guess(50).is_ok());
}

#[test]
fn test_auto_init_creates_session_on_guess() {
    let sessions = SessionManager::new();
    assert!(!sessions.status().active);

    let outcome = sessions.guess(50).unwrap();
    assert_eq!(outcome.attempts, 1);
    assert!(sessions.status().active);
}

#[test]
fn test_start_replaces_previous_session() {
    let sessions = SessionManager::new();
    let first_id = sessions.start_with_secret(42);
    sessions.guess(50).unwrap();

    let second_id = sessions.start_with_secret(7);
    assert_ne!(first_id, second_id);

    let status = sessions.status();
    assert_eq!(status.attempts, 0);
    assert_eq!(status.last_guess, None);
    assert!(!status.completed);
}

#[test]
fn test_snapshot_exposes_secret() {
    let sessions = SessionManager::new();
    sessions.start_with_secret(42);
    sessions.guess(50).unwrap();

    let snapshot = sessions.snapshot().expect("session should exist");
    assert_eq!(snapshot.secret, 42);
    assert_eq!(snapshot.history, vec![50]);
    assert_eq!(snapshot.attempts as usize, snapshot.history.len());
}

#[test]
fn test_concurrent_guesses_lose_no_updates() {
    let sessions = SessionManager::new();
    // Secret of 100 keeps every worker's guesses incorrect
    sessions.start_with_secret(100);

    const WORKERS: usize = 8;
    const GUESSES_PER_WORKER: usize = 50;

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let sessions = sessions.clone();
            std::thread::spawn(move || {
                for i in 0..GUESSES_PER_WORKER {
                    let number = 1 + ((worker * GUESSES_PER_WORKER + i) % 99) as i64;
                    sessions.guess(number).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = sessions.snapshot().expect("session should exist");
    assert_eq!(snapshot.attempts as usize, WORKERS * GUESSES_PER_WORKER);
    assert_eq!(snapshot.history.len(), WORKERS * GUESSES_PER_WORKER);
    assert!(!snapshot.completed);
}
