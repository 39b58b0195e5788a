//! Blood Request Model

use super::BloodType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How soon the blood is needed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Request lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Fulfilled,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Blood request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: String,
    pub receiver_id: String,
    pub blood_type: BloodType,
    pub urgency_level: UrgencyLevel,
    pub units_needed: u32,
    pub hospital_name: String,
    pub doctor_name: String,
    pub medical_condition: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "crate::util::timestamp")]
    pub request_date: DateTime<Utc>,
    pub status: RequestStatus,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create blood request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequestCreate {
    pub blood_type: BloodType,
    pub urgency_level: UrgencyLevel,
    pub units_needed: u32,
    pub hospital_name: String,
    pub doctor_name: String,
    pub medical_condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update blood request payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BloodRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_needed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Admin status change (`PUT /blood-requests/{id}/status`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub new_status: RequestStatus,
}

/// Optional filters for the admin request list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub urgency_level: Option<UrgencyLevel>,
}

impl RequestFilter {
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency_level = Some(urgency);
        self
    }

    /// Query pairs in the backend's parameter names
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status_filter", status.as_str().to_string()));
        }
        if let Some(urgency) = self.urgency_level {
            pairs.push(("urgency_level", urgency.as_str().to_string()));
        }
        pairs
    }
}
