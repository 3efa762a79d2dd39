//! Wellness booking — consultation booking core and thin REST surface.
//!
//! The interesting logic lives in three small state machines:
//! - [`booking::BookingWorkflow`] — form draft, validation, and the
//!   `Editing → Submitting → {Confirmed | Editing-with-error}` flow.
//! - [`content::ContentRotator`] — deterministic tip-of-the-day rotation.
//! - [`profile::UnlockGate`] — long-press + secret-code capability gate on
//!   the consultant profile screen.
//!
//! Everything else is the plumbing those machines consume: an axum service
//! implementing `/api/bookings` and `/api/consultant` over an in-memory
//! store, and a reqwest client for the same contract.

pub mod api;
pub mod booking;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod profile;
