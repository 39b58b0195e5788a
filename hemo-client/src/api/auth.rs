use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::storage::{TOKEN_KEY, remove_or_warn, set_or_warn};
use shared::client::{LoginRequest, RegisterRequest, TokenResponse};
use shared::models::{User, UserRole};

impl ApiClient {
    /// Exchange credentials for a bearer token and persist it
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: TokenResponse = self.post("/auth/login", &req).await?;

        self.set_token(Some(resp.access_token.clone()));
        set_or_warn(self.store(), TOKEN_KEY, &resp.access_token);
        tracing::info!(email, "Logged in");
        Ok(resp)
    }

    /// Create an account; `receiver` is sent as the backend's `recv`
    pub async fn register(&self, email: &str, password: &str, role: UserRole) -> ApiResult<User> {
        tracing::debug!(email, %role, "Registering account");
        let req = RegisterRequest::new(email, password, role);
        self.post("/auth/register", &req).await
    }

    /// Identity behind the current credential
    pub async fn get_current_user(&self) -> ApiResult<User> {
        self.get("/auth/me").await
    }

    /// Forget the credential; the backend is not contacted
    pub fn logout(&self) {
        self.set_token(None);
        remove_or_warn(self.store(), TOKEN_KEY);
    }
}
