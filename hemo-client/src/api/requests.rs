use crate::error::ApiResult;
use crate::http::{ApiClient, RequestOptions};
use shared::client::MessageResponse;
use shared::models::{
    BloodReceiver, BloodRequest, BloodRequestCreate, BloodRequestUpdate, RequestFilter,
    RequestStatus, StatusUpdate,
};

impl ApiClient {
    /// Open requests as receiver rows (admin view)
    pub async fn list_blood_requests(&self, filter: &RequestFilter) -> ApiResult<Vec<BloodReceiver>> {
        self.request(
            "/blood-requests/",
            RequestOptions::get().query_pairs(filter.query_pairs()),
        )
        .await
    }

    pub async fn my_blood_requests(&self) -> ApiResult<Vec<BloodRequest>> {
        self.get("/blood-requests/my-requests").await
    }

    pub async fn create_blood_request(&self, request: &BloodRequestCreate) -> ApiResult<BloodRequest> {
        tracing::debug!(
            blood_type = %request.blood_type,
            units = request.units_needed,
            urgency = request.urgency_level.as_str(),
            "Creating blood request"
        );
        self.post("/blood-requests/", request).await
    }

    pub async fn update_blood_request(
        &self,
        request_id: &str,
        update: &BloodRequestUpdate,
    ) -> ApiResult<BloodRequest> {
        self.put(&format!("/blood-requests/{request_id}"), update).await
    }

    /// Admin only
    pub async fn update_request_status(
        &self,
        request_id: &str,
        status: RequestStatus,
    ) -> ApiResult<BloodReceiver> {
        self.put(
            &format!("/blood-requests/{request_id}/status"),
            &StatusUpdate { new_status: status },
        )
        .await
    }

    pub async fn delete_blood_request(&self, request_id: &str) -> ApiResult<MessageResponse> {
        self.delete(&format!("/blood-requests/{request_id}")).await
    }
}
