//! Profile edit session — snapshot, draft, and save/cancel lifecycle.
//!
//! The profile is fetched once on screen entry as a read-only snapshot.
//! While the unlock gate is open the draft can be mutated; saving replaces
//! the snapshot via PUT and relocks the gate, cancelling reverts the draft
//! to the snapshot and relocks the gate. A failed save keeps the session
//! open so the user can correct and retry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::booking::validate::email_error;
use crate::error::SubmissionError;

use super::model::ConsultantProfile;
use super::unlock::{GateState, UnlockGate};

/// The consultant profile collaborator (GET/PUT /api/consultant).
#[async_trait]
pub trait ConsultantService: Send + Sync {
    async fn get_consultant(&self) -> Result<ConsultantProfile, SubmissionError>;

    async fn update_consultant(
        &self,
        profile: &ConsultantProfile,
    ) -> Result<ConsultantProfile, SubmissionError>;
}

/// What a `save()` call resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Snapshot replaced, gate relocked.
    Saved,
    /// The draft email failed validation; no network call was issued.
    Invalid { message: String },
    /// The update call failed; the session stays open with the draft intact.
    Failed { message: String },
    /// No edit session is active.
    NotEditing,
}

/// The consultant profile screen's state.
pub struct ProfileEditor {
    service: Arc<dyn ConsultantService>,
    gate: UnlockGate,
    snapshot: ConsultantProfile,
    draft: ConsultantProfile,
    error: Option<String>,
}

impl ProfileEditor {
    pub fn new(service: Arc<dyn ConsultantService>, gate: UnlockGate) -> Self {
        Self {
            service,
            gate,
            snapshot: ConsultantProfile::default(),
            draft: ConsultantProfile::default(),
            error: None,
        }
    }

    /// Fetch the profile snapshot on screen entry. The draft starts as a
    /// copy of it.
    pub async fn load(&mut self) -> Result<(), SubmissionError> {
        let profile = self.service.get_consultant().await?;
        self.snapshot = profile.clone();
        self.draft = profile;
        Ok(())
    }

    /// The unlock gate, for gesture and code events.
    pub fn gate_mut(&mut self) -> &mut UnlockGate {
        &mut self.gate
    }

    pub fn gate(&self) -> &UnlockGate {
        &self.gate
    }

    /// Whether the fields are editable right now.
    pub fn is_editing(&self) -> bool {
        self.gate.state() == GateState::Unlocked
    }

    pub fn snapshot(&self) -> &ConsultantProfile {
        &self.snapshot
    }

    pub fn draft(&self) -> &ConsultantProfile {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Edit the draft email. Ignored unless the gate is open.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.email = email.into();
        true
    }

    /// Edit the draft phone; an empty value clears it. Ignored unless the
    /// gate is open.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        let phone = phone.into();
        self.draft.phone = if phone.is_empty() { None } else { Some(phone) };
        true
    }

    /// Persist the draft. On success the snapshot is replaced with the
    /// server's copy and the gate relocks.
    pub async fn save(&mut self) -> SaveOutcome {
        if !self.is_editing() {
            return SaveOutcome::NotEditing;
        }

        if let Some(message) = email_error(&self.draft.email) {
            return SaveOutcome::Invalid { message };
        }

        match self.service.update_consultant(&self.draft).await {
            Ok(updated) => {
                info!(email = %updated.email, "Consultant profile updated");
                self.snapshot = updated.clone();
                self.draft = updated;
                self.error = None;
                self.gate.relock();
                SaveOutcome::Saved
            }
            Err(err) => {
                let message = err.user_message();
                warn!(error = %err, "Profile update failed");
                self.error = Some(message.clone());
                SaveOutcome::Failed { message }
            }
        }
    }

    /// Discard the edit session: revert the draft to the last fetched
    /// snapshot and relock the gate.
    pub fn cancel(&mut self) {
        self.draft = self.snapshot.clone();
        self.error = None;
        self.gate.relock();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::profile::unlock::DEFAULT_SECRET_CODE;

    struct StubService {
        profile: Mutex<ConsultantProfile>,
        fail_update: Mutex<Option<SubmissionError>>,
        updates: Mutex<usize>,
    }

    impl StubService {
        fn with_profile(profile: ConsultantProfile) -> Arc<Self> {
            Arc::new(Self {
                profile: Mutex::new(profile),
                fail_update: Mutex::new(None),
                updates: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl ConsultantService for StubService {
        async fn get_consultant(&self) -> Result<ConsultantProfile, SubmissionError> {
            Ok(self.profile.lock().unwrap().clone())
        }

        async fn update_consultant(
            &self,
            profile: &ConsultantProfile,
        ) -> Result<ConsultantProfile, SubmissionError> {
            if let Some(err) = self.fail_update.lock().unwrap().clone() {
                return Err(err);
            }
            *self.updates.lock().unwrap() += 1;
            *self.profile.lock().unwrap() = profile.clone();
            Ok(profile.clone())
        }
    }

    fn seeded() -> ConsultantProfile {
        ConsultantProfile::new("rithanya@wellness.example", None)
    }

    async fn unlocked_editor(service: Arc<StubService>) -> ProfileEditor {
        let mut editor = ProfileEditor::new(service, UnlockGate::with_default_code());
        editor.load().await.unwrap();
        editor.gate_mut().hold_completed();
        editor.gate_mut().submit_code(DEFAULT_SECRET_CODE).unwrap();
        editor
    }

    #[tokio::test]
    async fn load_populates_snapshot_and_draft() {
        let service = StubService::with_profile(seeded());
        let mut editor = ProfileEditor::new(service, UnlockGate::with_default_code());
        editor.load().await.unwrap();
        assert_eq!(editor.snapshot(), editor.draft());
        assert_eq!(editor.snapshot().email, "rithanya@wellness.example");
        assert!(!editor.is_editing());
    }

    #[tokio::test]
    async fn edits_are_ignored_while_locked() {
        let service = StubService::with_profile(seeded());
        let mut editor = ProfileEditor::new(service, UnlockGate::with_default_code());
        editor.load().await.unwrap();

        assert!(!editor.set_email("new@wellness.example"));
        assert!(!editor.set_phone("12345"));
        assert_eq!(editor.draft(), editor.snapshot());
        assert_eq!(editor.save().await, SaveOutcome::NotEditing);
    }

    #[tokio::test]
    async fn save_replaces_snapshot_and_relocks() {
        let service = StubService::with_profile(seeded());
        let mut editor = unlocked_editor(service.clone()).await;

        assert!(editor.set_email("new@wellness.example"));
        assert!(editor.set_phone("+91 98765 43210"));
        assert_eq!(editor.save().await, SaveOutcome::Saved);

        assert_eq!(editor.snapshot().email, "new@wellness.example");
        assert_eq!(editor.snapshot().phone.as_deref(), Some("+91 98765 43210"));
        assert!(!editor.is_editing(), "gate relocks after a successful save");
        assert_eq!(*service.updates.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn invalid_email_blocks_the_update_call() {
        let service = StubService::with_profile(seeded());
        let mut editor = unlocked_editor(service.clone()).await;

        editor.set_email("not-an-email");
        assert!(matches!(editor.save().await, SaveOutcome::Invalid { .. }));
        assert_eq!(*service.updates.lock().unwrap(), 0);
        assert!(editor.is_editing(), "session stays open to correct the field");
    }

    #[tokio::test]
    async fn failed_save_keeps_session_open_with_draft_intact() {
        let service = StubService::with_profile(seeded());
        *service.fail_update.lock().unwrap() = Some(SubmissionError::Http {
            status: 500,
            message: Some("db down".to_string()),
        });
        let mut editor = unlocked_editor(service.clone()).await;

        editor.set_email("new@wellness.example");
        assert_eq!(
            editor.save().await,
            SaveOutcome::Failed {
                message: "db down".to_string()
            }
        );
        assert!(editor.is_editing());
        assert_eq!(editor.error_message(), Some("db down"));
        assert_eq!(editor.draft().email, "new@wellness.example");
        assert_eq!(editor.snapshot().email, "rithanya@wellness.example");
    }

    #[tokio::test]
    async fn cancel_reverts_to_snapshot_and_relocks() {
        let service = StubService::with_profile(seeded());
        let mut editor = unlocked_editor(service).await;

        editor.set_email("scratch@wellness.example");
        editor.set_phone("000");
        editor.cancel();

        assert_eq!(editor.draft(), editor.snapshot());
        assert_eq!(editor.draft().email, "rithanya@wellness.example");
        assert!(!editor.is_editing());
    }

    #[tokio::test]
    async fn empty_phone_clears_the_field() {
        let service =
            StubService::with_profile(ConsultantProfile::new("r@wellness.example", Some("123".into())));
        let mut editor = unlocked_editor(service).await;

        editor.set_phone("");
        assert!(editor.draft().phone.is_none());
    }
}
