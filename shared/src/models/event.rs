//! Donation Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Donation drive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::util::timestamp")]
    pub date: DateTime<Utc>,
    /// Free-form time of day, e.g. "09:00 - 17:00"
    pub time: String,
    pub location: String,
    pub address: String,
    pub capacity: u32,
    pub organizer: String,
    /// Donor ids
    #[serde(default)]
    pub registered_donors: Vec<String>,
    pub status: EventStatus,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DonationEvent {
    pub fn is_full(&self) -> bool {
        self.registered_donors.len() >= self.capacity as usize
    }

    pub fn is_registered(&self, donor_id: &str) -> bool {
        self.registered_donors.iter().any(|id| id == donor_id)
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    #[serde(with = "crate::util::timestamp")]
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub address: String,
    pub capacity: u32,
    pub organizer: String,
}

/// Update event payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "crate::util::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

/// Body of register / unregister calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    pub donor_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(capacity: u32, donors: &[&str]) -> DonationEvent {
        serde_json::from_value(serde_json::json!({
            "id": "e-1",
            "title": "Spring drive",
            "description": "",
            "date": "2025-03-01T00:00:00",
            "time": "09:00 - 17:00",
            "location": "Town hall",
            "address": "1 Main St",
            "capacity": capacity,
            "organizer": "Red Cross",
            "registered_donors": donors,
            "status": "upcoming",
            "created_at": "2025-01-01T00:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_capacity() {
        assert!(!event(2, &["d-1"]).is_full());
        assert!(event(2, &["d-1", "d-2"]).is_full());
    }

    #[test]
    fn test_is_registered() {
        let e = event(5, &["d-1"]);
        assert!(e.is_registered("d-1"));
        assert!(!e.is_registered("d-2"));
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = EventUpdate {
            status: Some(EventStatus::Cancelled),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "status": "cancelled" })
        );
    }
}
