use crate::error::ApiResult;
use crate::http::{ApiClient, RequestOptions};
use shared::client::MessageResponse;
use shared::models::{BloodInventory, InventoryCreate, InventoryUpdate};

impl ApiClient {
    pub async fn list_inventory(&self) -> ApiResult<Vec<BloodInventory>> {
        self.get("/blood-inventory/").await
    }

    /// Admin only; one slot per blood type
    pub async fn create_inventory(&self, slot: &InventoryCreate) -> ApiResult<BloodInventory> {
        self.post("/blood-inventory/", slot).await
    }

    /// Admin only
    pub async fn update_inventory(
        &self,
        inventory_id: &str,
        update: &InventoryUpdate,
    ) -> ApiResult<BloodInventory> {
        self.put(&format!("/blood-inventory/{inventory_id}"), update).await
    }

    /// Admin only; `units_change` may be negative, the backend refuses to go below zero
    pub async fn update_blood_units(&self, inventory_id: &str, units_change: i32) -> ApiResult<BloodInventory> {
        self.request(
            &format!("/blood-inventory/{inventory_id}/units"),
            RequestOptions::bodyless(reqwest::Method::PUT).query("units_change", units_change),
        )
        .await
    }

    /// Admin only
    pub async fn delete_inventory(&self, inventory_id: &str) -> ApiResult<MessageResponse> {
        self.delete(&format!("/blood-inventory/{inventory_id}")).await
    }
}
