use crate::api::types::{
    CreateReservationRequest, CreateReservationResponse, LoginRequest, LoginResponse,
    SignupRequest, SignupResponse,
};
use crate::models::{DigitalKey, Reservation};
use anyhow::Result;
use async_trait::async_trait;

/// The remote villa platform as seen by this layer.
///
/// Kept behind a trait so views can be exercised against a mock backend
/// without a running server.
#[async_trait]
pub trait VillaApi: Send + Sync {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    async fn logout(&self) -> Result<()>;

    /// Whether GET /me succeeds. This probe is the sole authentication
    /// signal; transport errors count as "not authenticated".
    async fn is_authenticated(&self) -> bool;

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<CreateReservationResponse>;

    async fn list_reservations(&self) -> Result<Vec<Reservation>>;

    async fn list_keys(&self) -> Result<Vec<DigitalKey>>;
}
