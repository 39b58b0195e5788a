use crate::error::ApiResult;
use crate::http::ApiClient;
use shared::models::{DashboardStats, InventoryOverview};

impl ApiClient {
    /// Admin only
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get("/dashboard/stats").await
    }

    /// Inventory, donors and donation records fetched concurrently
    ///
    /// A failed leg contributes an empty list; the others still come back.
    pub async fn inventory_overview(&self) -> InventoryOverview {
        let (inventory, donors, donation_records) = tokio::join!(
            self.list_inventory(),
            self.list_donors(),
            self.list_donation_records(None),
        );

        InventoryOverview {
            inventory: inventory.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Inventory unavailable");
                Vec::new()
            }),
            donors: donors.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Donor list unavailable");
                Vec::new()
            }),
            donation_records: donation_records.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Donation records unavailable");
                Vec::new()
            }),
        }
    }
}
