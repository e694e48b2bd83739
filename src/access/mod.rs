use crate::api::VillaApi;
use crate::models::{DigitalKey, Reservation};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

/// Reservations and keys for the current user, fetched together.
///
/// The two fetches are independent: a failure in one slot degrades that
/// slot to empty without discarding the other.
#[derive(Debug, Default)]
pub struct AccessBundle {
    pub reservations: Vec<Reservation>,
    pub keys: Vec<DigitalKey>,
}

/// Fetch reservations and keys concurrently and join both
pub async fn fetch_access_bundle(api: &dyn VillaApi) -> AccessBundle {
    let (reservations, keys) = tokio::join!(api.list_reservations(), api.list_keys());

    let reservations = reservations.unwrap_or_else(|e| {
        warn!("Reservation fetch failed, showing none: {e:#}");
        Vec::new()
    });
    let keys = keys.unwrap_or_else(|e| {
        warn!("Key fetch failed, showing none: {e:#}");
        Vec::new()
    });

    AccessBundle { reservations, keys }
}

/// Keys whose activation window contains `now`, inclusive on both ends
pub fn active_keys(keys: &[DigitalKey], now: DateTime<Utc>) -> Vec<&DigitalKey> {
    keys.iter()
        .filter(|key| key.valid_from <= now && now <= key.valid_until)
        .collect()
}

/// Join a key to its reservation by reservation id
pub fn reservation_for_key<'a>(
    reservations: &'a [Reservation],
    key: &DigitalKey,
) -> Option<&'a Reservation> {
    reservations.iter().find(|r| r.id == key.reservation_id)
}

/// Whole-day span between two calendar dates, order-insensitive
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        CreateReservationRequest, CreateReservationResponse, LoginRequest, LoginResponse,
        SignupRequest, SignupResponse,
    };
    use crate::models::ReservationStatus;
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use chrono::TimeZone;

    fn key(reservation_id: &str, from: &str, until: &str) -> DigitalKey {
        DigitalKey {
            key_code: "1234-5678".to_string(),
            device_id: "lock-1".to_string(),
            reservation_id: reservation_id.to_string(),
            valid_from: from.parse().unwrap(),
            valid_until: until.parse().unwrap(),
        }
    }

    fn reservation(id: &str) -> Reservation {
        Reservation {
            id: id.to_string(),
            user_id: "u1".to_string(),
            room_id: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(),
            total_price: 428_400,
            status: ReservationStatus::Confirmed,
        }
    }

    #[test]
    fn active_keys_respect_the_window_inclusively() {
        let keys = vec![
            key("r1", "2025-11-01T15:00:00Z", "2025-11-04T11:00:00Z"),
            key("r2", "2025-12-01T15:00:00Z", "2025-12-04T11:00:00Z"),
        ];

        let during = Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0).unwrap();
        let active = active_keys(&keys, during);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].reservation_id, "r1");

        // Window edges count as active
        let at_start = Utc.with_ymd_and_hms(2025, 11, 1, 15, 0, 0).unwrap();
        assert_eq!(active_keys(&keys, at_start).len(), 1);

        let before = Utc.with_ymd_and_hms(2025, 10, 30, 0, 0, 0).unwrap();
        assert!(active_keys(&keys, before).is_empty());
    }

    #[test]
    fn keys_join_to_their_reservation() {
        let reservations = vec![reservation("r1"), reservation("r2")];
        let k = key("r2", "2025-11-01T15:00:00Z", "2025-11-04T11:00:00Z");
        assert_eq!(reservation_for_key(&reservations, &k).unwrap().id, "r2");

        let orphan = key("r9", "2025-11-01T15:00:00Z", "2025-11-04T11:00:00Z");
        assert!(reservation_for_key(&reservations, &orphan).is_none());
    }

    #[test]
    fn nights_between_is_order_insensitive() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
        assert_eq!(nights_between(start, end), 3);
        assert_eq!(nights_between(end, start), 3);
        assert_eq!(nights_between(start, start), 0);
    }

    /// Mock backend where either fetch can be made to fail
    struct FlakyApi {
        reservations_fail: bool,
        keys_fail: bool,
    }

    #[async_trait]
    impl VillaApi for FlakyApi {
        async fn signup(&self, _request: &SignupRequest) -> Result<SignupResponse> {
            bail!("not under test")
        }

        async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
            bail!("not under test")
        }

        async fn logout(&self) -> Result<()> {
            Ok(())
        }

        async fn is_authenticated(&self) -> bool {
            true
        }

        async fn create_reservation(
            &self,
            _request: &CreateReservationRequest,
        ) -> Result<CreateReservationResponse> {
            bail!("not under test")
        }

        async fn list_reservations(&self) -> Result<Vec<Reservation>> {
            if self.reservations_fail {
                bail!("Reservation list failed (500 Internal Server Error): Unknown error")
            }
            Ok(vec![reservation("r1")])
        }

        async fn list_keys(&self) -> Result<Vec<DigitalKey>> {
            if self.keys_fail {
                bail!("Key list failed (500 Internal Server Error): Unknown error")
            }
            Ok(vec![key(
                "r1",
                "2025-11-01T15:00:00Z",
                "2025-11-04T11:00:00Z",
            )])
        }
    }

    #[tokio::test]
    async fn bundle_populates_both_slots_on_success() {
        let api = FlakyApi {
            reservations_fail: false,
            keys_fail: false,
        };
        let bundle = fetch_access_bundle(&api).await;
        assert_eq!(bundle.reservations.len(), 1);
        assert_eq!(bundle.keys.len(), 1);
    }

    #[tokio::test]
    async fn failed_key_fetch_keeps_reservations() {
        let api = FlakyApi {
            reservations_fail: false,
            keys_fail: true,
        };
        let bundle = fetch_access_bundle(&api).await;
        assert_eq!(bundle.reservations.len(), 1);
        assert!(bundle.keys.is_empty());
    }

    #[tokio::test]
    async fn failed_reservation_fetch_keeps_keys() {
        let api = FlakyApi {
            reservations_fail: true,
            keys_fail: false,
        };
        let bundle = fetch_access_bundle(&api).await;
        assert!(bundle.reservations.is_empty());
        assert_eq!(bundle.keys.len(), 1);
    }
}
