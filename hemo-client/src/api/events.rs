use crate::error::ApiResult;
use crate::http::{ApiClient, RequestOptions};
use shared::client::MessageResponse;
use shared::models::{DonationEvent, EventCreate, EventRegistration, EventStatus, EventUpdate};

impl ApiClient {
    pub async fn list_events(&self, status: Option<EventStatus>) -> ApiResult<Vec<DonationEvent>> {
        let mut options = RequestOptions::get();
        if let Some(status) = status {
            options = options.query("status", status.as_str());
        }
        self.request("/events/", options).await
    }

    pub async fn get_event(&self, event_id: &str) -> ApiResult<DonationEvent> {
        self.get(&format!("/events/{event_id}")).await
    }

    /// Admin only
    pub async fn create_event(&self, event: &EventCreate) -> ApiResult<DonationEvent> {
        self.post("/events/", event).await
    }

    /// Admin only
    pub async fn update_event(&self, event_id: &str, update: &EventUpdate) -> ApiResult<DonationEvent> {
        self.put(&format!("/events/{event_id}"), update).await
    }

    /// Admin only
    pub async fn delete_event(&self, event_id: &str) -> ApiResult<MessageResponse> {
        self.delete(&format!("/events/{event_id}")).await
    }

    pub async fn register_for_event(&self, event_id: &str, donor_id: &str) -> ApiResult<DonationEvent> {
        let body = EventRegistration {
            donor_id: donor_id.to_string(),
        };
        self.post(&format!("/events/{event_id}/register"), &body).await
    }

    pub async fn unregister_from_event(&self, event_id: &str, donor_id: &str) -> ApiResult<DonationEvent> {
        let body = EventRegistration {
            donor_id: donor_id.to_string(),
        };
        self.delete_with_body(&format!("/events/{event_id}/unregister"), &body)
            .await
    }
}
