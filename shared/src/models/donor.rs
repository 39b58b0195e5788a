//! Donor Model

use super::BloodType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Donor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub age: u32,
    /// Kilograms
    pub weight: u32,
    pub address: String,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub donation_units: Option<u32>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub last_donation_date: Option<DateTime<Utc>>,
    pub is_eligible: bool,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create donor profile payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub age: u32,
    pub weight: u32,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_units: Option<u32>,
}

/// Update donor profile payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_units: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible: Option<bool>,
}

/// Admin eligibility toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EligibilityUpdate {
    pub is_eligible: bool,
}
