use crate::error::ApiResult;
use crate::http::{ApiClient, RequestOptions};
use shared::client::MessageResponse;
use shared::models::{DonationRecord, DonationRecordCreate, DonationRecordUpdate, TestResults};

impl ApiClient {
    /// All records, optionally for one donor
    pub async fn list_donation_records(&self, donor_id: Option<&str>) -> ApiResult<Vec<DonationRecord>> {
        let mut options = RequestOptions::get();
        if let Some(donor_id) = donor_id {
            options = options.query("donor_id", donor_id);
        }
        self.request("/donation-records/", options).await
    }

    /// Records of the logged-in donor
    pub async fn my_donation_records(&self) -> ApiResult<Vec<DonationRecord>> {
        self.get("/donation-records/my-records").await
    }

    pub async fn get_donation_record(&self, record_id: &str) -> ApiResult<DonationRecord> {
        self.get(&format!("/donation-records/{record_id}")).await
    }

    pub async fn create_donation_record(&self, record: &DonationRecordCreate) -> ApiResult<DonationRecord> {
        self.post("/donation-records/", record).await
    }

    pub async fn update_donation_record(
        &self,
        record_id: &str,
        update: &DonationRecordUpdate,
    ) -> ApiResult<DonationRecord> {
        self.put(&format!("/donation-records/{record_id}"), update).await
    }

    /// Admin only; the backend approves or rejects the unit from the results
    pub async fn update_test_results(
        &self,
        record_id: &str,
        results: &TestResults,
    ) -> ApiResult<DonationRecord> {
        self.request(
            &format!("/donation-records/{record_id}/test-results"),
            RequestOptions::bodyless(reqwest::Method::PUT).query_pairs(results.query_pairs()),
        )
        .await
    }

    /// Admin only
    pub async fn delete_donation_record(&self, record_id: &str) -> ApiResult<MessageResponse> {
        self.delete(&format!("/donation-records/{record_id}")).await
    }
}
