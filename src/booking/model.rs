//! Booking data model — drafts, persisted records, and the time-slot enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed, closed set of bookable time-of-day slots.
///
/// Any wire value outside this set fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "09:00")]
    NineAm,
    #[serde(rename = "10:00")]
    TenAm,
    #[serde(rename = "11:00")]
    ElevenAm,
    #[serde(rename = "14:00")]
    TwoPm,
    #[serde(rename = "15:00")]
    ThreePm,
    #[serde(rename = "16:00")]
    FourPm,
}

impl TimeSlot {
    /// All slots, in display order.
    pub const ALL: [TimeSlot; 6] = [
        Self::NineAm,
        Self::TenAm,
        Self::ElevenAm,
        Self::TwoPm,
        Self::ThreePm,
        Self::FourPm,
    ];

    /// Human-readable 12-hour label, as shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NineAm => "9:00 AM",
            Self::TenAm => "10:00 AM",
            Self::ElevenAm => "11:00 AM",
            Self::TwoPm => "2:00 PM",
            Self::ThreePm => "3:00 PM",
            Self::FourPm => "4:00 PM",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NineAm => "09:00",
            Self::TenAm => "10:00",
            Self::ElevenAm => "11:00",
            Self::TwoPm => "14:00",
            Self::ThreePm => "15:00",
            Self::FourPm => "16:00",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "09:00" => Ok(Self::NineAm),
            "10:00" => Ok(Self::TenAm),
            "11:00" => Ok(Self::ElevenAm),
            "14:00" => Ok(Self::TwoPm),
            "15:00" => Ok(Self::ThreePm),
            "16:00" => Ok(Self::FourPm),
            _ => Err(format!("Unknown time slot: {s}")),
        }
    }
}

/// The four editable booking form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Name,
    Email,
    Date,
    Time,
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
        };
        write!(f, "{s}")
    }
}

/// An in-progress booking held by the form.
///
/// Field values are raw strings exactly as typed; validation happens in
/// [`crate::booking::validate`]. Serializes to the POST /api/bookings body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    /// ISO calendar date, YYYY-MM-DD.
    pub date: String,
    /// A [`TimeSlot`] wire value, e.g. "10:00".
    pub time: String,
}

impl BookingDraft {
    /// True when every field is still empty (the state after a reset).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.date.is_empty() && self.time.is_empty()
    }

    /// Apply a single field edit.
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Email => self.email = value,
            BookingField::Date => self.date = value,
            BookingField::Time => self.time = value,
        }
    }
}

/// A booking as the server returns it — identity and creation time are
/// assigned server-side and never read back into the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}
