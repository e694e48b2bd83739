use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Availability status of a villa in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyStatus {
    Available,
    Reserved,
    Owned,
    /// Anything the catalog ships that we don't recognize yet.
    /// Such entries are kept out of both display partitions.
    #[serde(other)]
    Unknown,
}

/// Core villa data model, loaded from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub status: PropertyStatus,
    pub price_per_night: i64,
    pub capacity: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Primary/cover image
    pub image: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    // Access metadata, display-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_info: Option<String>,
}

/// Lifecycle status of a reservation as reported by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(other)]
    Other,
}

/// A reservation fetched from the remote API, read-only in this layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    /// Numeric room id; maps to `Property.id` via string conversion
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: i64,
    pub status: ReservationStatus,
}

impl Reservation {
    /// The catalog id this reservation points at
    pub fn property_id(&self) -> String {
        self.room_id.to_string()
    }
}

/// A smart-lock digital key fetched from the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitalKey {
    pub key_code: String,
    pub device_id: String,
    pub reservation_id: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_deserializes_from_camel_case_catalog_row() {
        let json = r#"{
            "id": "1",
            "name": "Villa Serenity",
            "location": "Bali, Indonesia",
            "description": "Clifftop villa",
            "status": "Available",
            "pricePerNight": 127500,
            "capacity": 8,
            "bedrooms": 4,
            "bathrooms": 4,
            "image": "https://example.com/cover.jpg",
            "images": ["https://example.com/cover.jpg"],
            "amenities": ["Infinity Pool"],
            "nearestAirport": "Ngurah Rai International Airport"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.price_per_night, 127500);
        assert_eq!(
            property.nearest_airport.as_deref(),
            Some("Ngurah Rai International Airport")
        );
        assert!(property.address.is_none());
    }

    #[test]
    fn unrecognized_status_becomes_unknown() {
        let status: PropertyStatus = serde_json::from_str(r#""UnderRenovation""#).unwrap();
        assert_eq!(status, PropertyStatus::Unknown);
    }

    #[test]
    fn reservation_deserializes_from_wire_shape() {
        let json = r#"{
            "id": "res-42",
            "user_id": "user-7",
            "room_id": 3,
            "start_date": "2025-11-01",
            "end_date": "2025-11-04",
            "total_price": 428400,
            "status": "CONFIRMED"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.property_id(), "3");
        assert_eq!(
            reservation.end_date - reservation.start_date,
            chrono::Duration::days(3)
        );
    }

    #[test]
    fn key_deserializes_with_utc_window() {
        let json = r#"{
            "key_code": "8841-2290",
            "device_id": "lock-onsen-2",
            "reservation_id": "res-42",
            "valid_from": "2025-11-01T15:00:00Z",
            "valid_until": "2025-11-04T11:00:00Z"
        }"#;
        let key: DigitalKey = serde_json::from_str(json).unwrap();
        assert!(key.valid_from < key.valid_until);
    }
}
