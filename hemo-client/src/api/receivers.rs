use crate::error::ApiResult;
use crate::http::ApiClient;
use shared::models::{BloodReceiver, ReceiverCreate, ReceiverUpdate};

impl ApiClient {
    pub async fn list_receivers(&self) -> ApiResult<Vec<BloodReceiver>> {
        self.get("/receivers/").await
    }

    pub async fn get_receiver(&self, receiver_id: &str) -> ApiResult<BloodReceiver> {
        self.get(&format!("/receivers/{receiver_id}")).await
    }

    /// Receiver profile of the logged-in user
    pub async fn my_receiver_profile(&self) -> ApiResult<BloodReceiver> {
        self.get("/receivers/me").await
    }

    pub async fn create_receiver_profile(&self, receiver: &ReceiverCreate) -> ApiResult<BloodReceiver> {
        tracing::debug!(name = %receiver.name, blood_type = %receiver.blood_type, "Creating receiver profile");
        self.post("/receivers/", receiver).await
    }

    pub async fn update_receiver_profile(&self, update: &ReceiverUpdate) -> ApiResult<BloodReceiver> {
        self.put("/receivers/me", update).await
    }
}
