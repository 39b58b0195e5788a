use crate::error::ApiResult;
use crate::http::ApiClient;
use shared::models::{Donor, DonorCreate, DonorUpdate, EligibilityUpdate};

impl ApiClient {
    pub async fn list_donors(&self) -> ApiResult<Vec<Donor>> {
        self.get("/donors/").await
    }

    pub async fn get_donor(&self, donor_id: &str) -> ApiResult<Donor> {
        self.get(&format!("/donors/{donor_id}")).await
    }

    /// Donor profile of the logged-in user
    pub async fn my_donor_profile(&self) -> ApiResult<Donor> {
        self.get("/donors/me").await
    }

    pub async fn create_donor_profile(&self, donor: &DonorCreate) -> ApiResult<Donor> {
        tracing::debug!(name = %donor.name, blood_type = %donor.blood_type, "Creating donor profile");
        self.post("/donors/", donor).await
    }

    pub async fn update_donor_profile(&self, update: &DonorUpdate) -> ApiResult<Donor> {
        self.put("/donors/me", update).await
    }

    /// Admin only
    pub async fn update_donor_eligibility(&self, donor_id: &str, is_eligible: bool) -> ApiResult<Donor> {
        self.put(
            &format!("/donors/{donor_id}/eligibility"),
            &EligibilityUpdate { is_eligible },
        )
        .await
    }

    pub async fn eligible_donors(&self) -> ApiResult<Vec<Donor>> {
        self.get("/donors/eligible").await
    }

    pub async fn ineligible_donors(&self) -> ApiResult<Vec<Donor>> {
        self.get("/donors/ineligible").await
    }
}
