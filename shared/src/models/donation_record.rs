//! Donation Record Model

use super::BloodType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Collected,
    Tested,
    Approved,
    Rejected,
}

/// Screening results; `true` means the screen passed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResults {
    pub hiv: bool,
    pub hepatitis_b: bool,
    pub hepatitis_c: bool,
    pub syphilis: bool,
}

impl TestResults {
    /// Every screen passed (the backend approves the unit in that case)
    pub fn all_clear(&self) -> bool {
        self.hiv && self.hepatitis_b && self.hepatitis_c && self.syphilis
    }

    /// Query pairs for `PUT /donation-records/{id}/test-results`
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("hiv_test", self.hiv.to_string()),
            ("hepatitis_b_test", self.hepatitis_b.to_string()),
            ("hepatitis_c_test", self.hepatitis_c.to_string()),
            ("syphilis_test", self.syphilis.to_string()),
        ]
    }
}

/// A single collected donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: String,
    pub donor_id: String,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(with = "crate::util::timestamp")]
    pub donation_date: DateTime<Utc>,
    pub blood_type: BloodType,
    pub units_collected: u32,
    #[serde(default)]
    pub hiv_test: bool,
    #[serde(default)]
    pub hepatitis_b_test: bool,
    #[serde(default)]
    pub hepatitis_c_test: bool,
    #[serde(default)]
    pub syphilis_test: bool,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DonationRecord {
    pub fn test_results(&self) -> TestResults {
        TestResults {
            hiv: self.hiv_test,
            hepatitis_b: self.hepatitis_b_test,
            hepatitis_c: self.hepatitis_c_test,
            syphilis: self.syphilis_test,
        }
    }
}

/// Create donation record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRecordCreate {
    pub donor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(with = "crate::util::timestamp")]
    pub donation_date: DateTime<Utc>,
    pub blood_type: BloodType,
    pub units_collected: u32,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update donation record payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonationRecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(
        default,
        with = "crate::util::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub donation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_collected: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DonationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
