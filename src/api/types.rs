use crate::models::{DigitalKey, Reservation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Session lifetime in seconds
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateReservationRequest {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationResponse {
    pub reservation_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListReservationsResponse {
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListKeysResponse {
    pub keys: Vec<DigitalKey>,
}

/// Error body the API sends on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
