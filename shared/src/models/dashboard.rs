//! Admin dashboard aggregates

use super::{BloodInventory, BloodType, DonationRecord, Donor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodTypeUnits {
    pub blood_type: BloodType,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// `GET /dashboard/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_donors: u64,
    pub total_receivers: u64,
    pub upcoming_events: u64,
    pub total_blood_units: u64,
    pub critical_requests: u64,
    pub recent_donations: u64,
    #[serde(default)]
    pub blood_type_distribution: Vec<BloodTypeUnits>,
    #[serde(default)]
    pub event_status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub request_status_distribution: Vec<StatusCount>,
}

/// Inventory joined client-side with donors and their donations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub inventory: Vec<BloodInventory>,
    pub donors: Vec<Donor>,
    pub donation_records: Vec<DonationRecord>,
}

impl InventoryOverview {
    /// Donors whose blood type matches `blood_type`
    pub fn donors_for(&self, blood_type: BloodType) -> impl Iterator<Item = &Donor> {
        self.donors.iter().filter(move |d| d.blood_type == blood_type)
    }

    /// Units collected for `blood_type` across all records
    pub fn units_collected(&self, blood_type: BloodType) -> u64 {
        self.donation_records
            .iter()
            .filter(|r| r.blood_type == blood_type)
            .map(|r| u64::from(r.units_collected))
            .sum()
    }
}
