//! In-memory backing store for the REST service.
//!
//! A stateless CRUD surface with process-lifetime data: bookings append to
//! a list with serial ids, the single consultant row is replaced on update.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::booking::model::{BookingDraft, BookingRecord};
use crate::profile::model::ConsultantProfile;

/// Process-lifetime store behind the API handlers.
pub struct MemoryStore {
    bookings: RwLock<Vec<BookingRecord>>,
    consultant: RwLock<ConsultantProfile>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Create a store seeded with the consultant's profile.
    pub fn new(consultant: ConsultantProfile) -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            consultant: RwLock::new(consultant),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a booking, assigning the next serial id and a creation time.
    pub async fn insert_booking(&self, draft: &BookingDraft) -> BookingRecord {
        let record = BookingRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: draft.name.clone(),
            email: draft.email.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            created_at: Utc::now(),
        };
        info!(booking_id = record.id, date = %record.date, time = %record.time, "Booking stored");
        self.bookings.write().await.push(record.clone());
        record
    }

    /// All bookings, in insertion order.
    pub async fn list_bookings(&self) -> Vec<BookingRecord> {
        self.bookings.read().await.clone()
    }

    pub async fn get_consultant(&self) -> ConsultantProfile {
        self.consultant.read().await.clone()
    }

    /// Replace the consultant row, returning the stored copy.
    pub async fn replace_consultant(&self, profile: ConsultantProfile) -> ConsultantProfile {
        let mut row = self.consultant.write().await;
        *row = profile;
        row.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            date: "2024-06-01".into(),
            time: "10:00".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_serial_starting_at_one() {
        let store = MemoryStore::new(ConsultantProfile::default());
        let first = store.insert_booking(&draft()).await;
        let second = store.insert_booking(&draft()).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list_bookings().await.len(), 2);
    }

    #[tokio::test]
    async fn consultant_replace_roundtrips() {
        let store = MemoryStore::new(ConsultantProfile::new("old@wellness.example", None));
        let updated = store
            .replace_consultant(ConsultantProfile::new(
                "new@wellness.example",
                Some("123".into()),
            ))
            .await;
        assert_eq!(updated.email, "new@wellness.example");
        assert_eq!(store.get_consultant().await, updated);
    }
}
