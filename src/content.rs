//! Daily content rotation — wellness tips and health bites.
//!
//! Pure and deterministic: the same UTC calendar day always maps to the
//! same tip/bite pair. The current time is an explicit parameter rather
//! than an ambient read, so tests can pin the day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Milliseconds in a UTC day.
const MS_PER_DAY: i64 = 86_400_000;

/// The built-in wellness tips shown on the home feed.
pub const WELLNESS_TIPS: [&str; 5] = [
    "Start your day with a glass of warm lemon water to boost your metabolism and support digestion. This simple habit can help detoxify your body and provide vitamin C.",
    "Take a 10-minute walk after each meal to aid digestion and regulate blood sugar levels.",
    "Practice deep breathing exercises for 5 minutes daily to reduce stress and improve mental clarity.",
    "Include colorful vegetables in every meal to ensure you get a variety of essential nutrients.",
    "Stay hydrated by drinking at least 8 glasses of water throughout the day.",
];

/// A short health fact with its lead-in highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBite {
    /// Lead-in shown in bold, e.g. "Did you know?".
    pub highlight: String,
    pub text: String,
}

impl HealthBite {
    fn new(highlight: &str, text: &str) -> Self {
        Self {
            highlight: highlight.to_string(),
            text: text.to_string(),
        }
    }
}

fn default_bites() -> Vec<HealthBite> {
    vec![
        HealthBite::new(
            "Did you know?",
            "Eating a handful of almonds daily can help reduce bad cholesterol levels and provide healthy fats that support brain function.",
        ),
        HealthBite::new(
            "Health Fact:",
            "Green tea contains antioxidants called catechins that may help boost metabolism and protect against heart disease.",
        ),
        HealthBite::new(
            "Nutrition Tip:",
            "Berries are packed with anthocyanins, powerful compounds that help improve memory and cognitive function.",
        ),
        HealthBite::new(
            "Fun Fact:",
            "Dark leafy greens like spinach and kale are rich in nitrates, which can help improve blood flow and exercise performance.",
        ),
    ]
}

/// Integer count of UTC days since the Unix epoch for `now`.
pub fn epoch_day(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().div_euclid(MS_PER_DAY)
}

/// Rotates a tip and a health bite by epoch day, modulo the list lengths.
#[derive(Debug, Clone)]
pub struct ContentRotator {
    tips: Vec<String>,
    bites: Vec<HealthBite>,
}

impl ContentRotator {
    /// Create a rotator over the given lists. Both must be non-empty —
    /// rotation is undefined for an empty list.
    pub fn new(tips: Vec<String>, bites: Vec<HealthBite>) -> Result<Self, ContentError> {
        if tips.is_empty() {
            return Err(ContentError::EmptyList("tips"));
        }
        if bites.is_empty() {
            return Err(ContentError::EmptyList("bites"));
        }
        Ok(Self { tips, bites })
    }

    /// The tip for the UTC calendar day containing `now`.
    pub fn tip_for(&self, now: DateTime<Utc>) -> &str {
        let idx = epoch_day(now).rem_euclid(self.tips.len() as i64) as usize;
        &self.tips[idx]
    }

    /// The health bite for the UTC calendar day containing `now`.
    pub fn bite_for(&self, now: DateTime<Utc>) -> &HealthBite {
        let idx = epoch_day(now).rem_euclid(self.bites.len() as i64) as usize;
        &self.bites[idx]
    }
}

impl Default for ContentRotator {
    /// Rotator over the built-in tips and bites. Both lists are non-empty,
    /// so construction cannot fail.
    fn default() -> Self {
        Self {
            tips: WELLNESS_TIPS.iter().map(|s| s.to_string()).collect(),
            bites: default_bites(),
        }
    }
}
