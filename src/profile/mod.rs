//! Consultant profile — contact details, edit session, and the unlock gate.

pub mod avatar;
pub mod editor;
pub mod model;
pub mod unlock;

pub use avatar::AvatarStore;
pub use editor::{ConsultantService, ProfileEditor, SaveOutcome};
pub use model::ConsultantProfile;
pub use unlock::{GateState, LongPress, UnlockGate};
