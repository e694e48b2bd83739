use crate::api::traits::VillaApi;
use crate::api::types::{
    ApiErrorBody, CreateReservationRequest, CreateReservationResponse, ListKeysResponse,
    ListReservationsResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse,
};
use crate::models::{DigitalKey, Reservation};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

/// Base URL of the villa platform API, overridable via `VILLA_API_URL`
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client for the villa platform API.
///
/// The session credential is a server-set cookie, so the cookie store is
/// enabled and every request after login rides on it automatically.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Client pointed at `VILLA_API_URL`, or the local default
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("VILLA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-2xx response into an error carrying the API's `{error}`
    /// message, falling back to "Unknown error" when the body isn't one.
    async fn check(response: Response, operation: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "Unknown error".to_string(),
        };
        bail!("{operation} failed ({status}): {message}")
    }
}

#[async_trait]
impl VillaApi for ApiClient {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse> {
        debug!("POST /signup for {}", request.email);
        let response = self
            .client
            .post(self.url("/signup"))
            .json(request)
            .send()
            .await
            .context("Failed to reach /signup")?;
        let response = Self::check(response, "Signup").await?;
        response.json().await.context("Failed to parse signup response")
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        debug!("POST /login for {}", request.email);
        let response = self
            .client
            .post(self.url("/login"))
            .json(request)
            .send()
            .await
            .context("Failed to reach /login")?;
        let response = Self::check(response, "Login").await?;
        let login: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;
        info!("Logged in; session expires in {}s", login.expires_in);
        Ok(login)
    }

    async fn logout(&self) -> Result<()> {
        let response = self
            .client
            .post(self.url("/logout"))
            .send()
            .await
            .context("Failed to reach /logout")?;
        Self::check(response, "Logout").await?;
        Ok(())
    }

    async fn is_authenticated(&self) -> bool {
        match self.client.get(self.url("/me")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<CreateReservationResponse> {
        debug!(
            "POST /reservations for room {} ({} → {})",
            request.room_id, request.start_date, request.end_date
        );
        let response = self
            .client
            .post(self.url("/reservations"))
            .json(request)
            .send()
            .await
            .context("Failed to reach /reservations")?;
        let response = Self::check(response, "Reservation").await?;
        response
            .json()
            .await
            .context("Failed to parse reservation response")
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let response = self
            .client
            .get(self.url("/reservations"))
            .send()
            .await
            .context("Failed to reach /reservations")?;
        let response = Self::check(response, "Reservation list").await?;
        let list: ListReservationsResponse = response
            .json()
            .await
            .context("Failed to parse reservation list")?;
        Ok(list.reservations)
    }

    async fn list_keys(&self) -> Result<Vec<DigitalKey>> {
        let response = self
            .client
            .get(self.url("/keys"))
            .send()
            .await
            .context("Failed to reach /keys")?;
        let response = Self::check(response, "Key list").await?;
        let list: ListKeysResponse = response.json().await.context("Failed to parse key list")?;
        Ok(list.keys)
    }
}
