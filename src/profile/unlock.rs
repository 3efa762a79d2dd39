//! Profile unlock gate — long-press plus secret-code capability lock.
//!
//! Gates the profile edit session behind a 5-second press-and-hold and a
//! numeric code. This is a UX affordance only: the code is a fixed
//! client-embedded literal with no server-side enforcement, and the gate
//! must never be treated as a security boundary.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::UnlockDenied;

/// How long the press must be held continuously before the code prompt.
pub const HOLD_DURATION: Duration = Duration::from_millis(5000);

/// Wrong-code attempts allowed before the gesture must be redone.
pub const MAX_CODE_ATTEMPTS: u8 = 3;

/// The default unlock code. A placeholder capability gate, not a secret —
/// replace with real access control before trusting it for anything.
pub const DEFAULT_SECRET_CODE: &str = "6111949";

/// Where the gate currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Editing disabled; a completed long-press moves to `AwaitingCode`.
    Locked,
    /// The code prompt is up.
    AwaitingCode,
    /// Editing permitted until the session is cancelled or saved.
    Unlocked,
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Locked => "locked",
            Self::AwaitingCode => "awaiting_code",
            Self::Unlocked => "unlocked",
        };
        write!(f, "{s}")
    }
}

/// The unlock state machine: `Locked → AwaitingCode → Unlocked`, with the
/// wrong-code counter owned exclusively by this instance and never persisted.
#[derive(Debug)]
pub struct UnlockGate {
    state: GateState,
    secret: String,
    attempts: u8,
}

impl UnlockGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            state: GateState::Locked,
            secret: secret.into(),
            attempts: 0,
        }
    }

    /// Gate using [`DEFAULT_SECRET_CODE`].
    pub fn with_default_code() -> Self {
        Self::new(DEFAULT_SECRET_CODE)
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Wrong attempts so far in the current prompt, always in [0, 3).
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// The long-press was held for the full duration. Only meaningful from
    /// `Locked`; returns whether the code prompt opened.
    pub fn hold_completed(&mut self) -> bool {
        if self.state != GateState::Locked {
            debug!(state = %self.state, "Ignoring completed hold outside Locked");
            return false;
        }
        info!("Long-press completed, prompting for code");
        self.state = GateState::AwaitingCode;
        true
    }

    /// Try the entered code.
    ///
    /// Correct: `Unlocked`, counter reset. Wrong: counter incremented; on
    /// the 3rd failure the counter resets and the gate falls back to
    /// `Locked` so the gesture must be redone.
    pub fn submit_code(&mut self, code: &str) -> Result<(), UnlockDenied> {
        if self.state != GateState::AwaitingCode {
            return Err(UnlockDenied::GestureRequired);
        }

        if code == self.secret {
            info!("Profile editing unlocked");
            self.state = GateState::Unlocked;
            self.attempts = 0;
            return Ok(());
        }

        self.attempts += 1;
        if self.attempts >= MAX_CODE_ATTEMPTS {
            debug!("Too many wrong codes, relocking");
            self.attempts = 0;
            self.state = GateState::Locked;
            Err(UnlockDenied::TooManyAttempts)
        } else {
            Err(UnlockDenied::IncorrectCode {
                attempt: self.attempts,
                max: MAX_CODE_ATTEMPTS,
            })
        }
    }

    /// Return to `Locked` — on edit-session cancel or after a successful
    /// profile save.
    pub fn relock(&mut self) {
        if self.state != GateState::Locked {
            debug!(from = %self.state, "Relocking profile editing");
        }
        self.state = GateState::Locked;
    }
}

impl Default for UnlockGate {
    fn default() -> Self {
        Self::with_default_code()
    }
}

/// Cancellable long-press timer driving a shared [`UnlockGate`].
///
/// `press_start` arms a delayed callback that fires `hold_completed` after
/// the hold duration; `press_end` aborts it. Aborting before the sleep
/// elapses deterministically prevents the prompt — the gate transition only
/// runs after the full sleep inside the same task.
pub struct LongPress {
    gate: Arc<Mutex<UnlockGate>>,
    duration: Duration,
    pending: Option<JoinHandle<()>>,
}

impl LongPress {
    pub fn new(gate: Arc<Mutex<UnlockGate>>) -> Self {
        Self::with_duration(gate, HOLD_DURATION)
    }

    pub fn with_duration(gate: Arc<Mutex<UnlockGate>>, duration: Duration) -> Self {
        Self {
            gate,
            duration,
            pending: None,
        }
    }

    /// The press-and-hold gesture started. Re-arms if a timer was somehow
    /// still pending.
    pub fn press_start(&mut self) {
        self.cancel_pending();
        let gate = Arc::clone(&self.gate);
        let duration = self.duration;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            gate.lock().await.hold_completed();
        }));
    }

    /// The gesture was released. A release before the hold duration cancels
    /// the pending prompt; after it, the prompt has already fired.
    pub fn press_end(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for LongPress {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
