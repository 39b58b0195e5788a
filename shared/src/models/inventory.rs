//! Blood Inventory Model

use super::BloodType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock slot, one per blood type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodInventory {
    pub id: String,
    pub blood_type: BloodType,
    pub units_available: u32,
    #[serde(with = "crate::util::timestamp")]
    pub expiry_date: DateTime<Utc>,
    #[serde(with = "crate::util::timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::util::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BloodInventory {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(crate::util::now())
    }

    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expiry_date <= at
    }
}

/// Create inventory slot payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreate {
    pub blood_type: BloodType,
    pub units_available: u32,
    #[serde(with = "crate::util::timestamp")]
    pub expiry_date: DateTime<Utc>,
}

/// Update inventory slot payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_available: Option<u32>,
    #[serde(
        default,
        with = "crate::util::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let slot: BloodInventory = serde_json::from_value(serde_json::json!({
            "id": "inv-1",
            "blood_type": "O-",
            "units_available": 4,
            "expiry_date": "2024-06-30T00:00:00",
            "last_updated": "2024-06-01T00:00:00",
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();

        let before = crate::util::parse_timestamp("2024-06-29").unwrap();
        let after = crate::util::parse_timestamp("2024-07-01").unwrap();
        assert!(!slot.is_expired_at(before));
        assert!(slot.is_expired_at(after));
        assert!(slot.is_expired());
    }
}
