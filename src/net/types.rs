//! Wire types for the NDAREHE REST API.
//!
//! The backend wraps every response in a `{ success, message, data }`
//! envelope and uses camelCase field names; models here map that shape
//! onto typed structs with `serde`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Authenticated user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_verified: bool,
}

/// Payload of a successful login.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// An accommodation listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: u32,
    pub max_guests: u32,
}

/// A transportation vehicle listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub vehicle_type: String,
    pub capacity: u32,
    pub price_per_trip: u32,
    pub price_per_hour: u32,
}

/// A tour listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_person: u32,
}

/// A booking as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub service_type: String,
    pub service_id: String,
    pub status: String,
    #[serde(default)]
    pub total_amount: Option<u32>,
}

/// A payment as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount: u32,
    pub status: String,
}

/// Booking-creation payload. The `serviceType` tag selects the shape the
/// backend expects for each service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "serviceType")]
pub enum CreateBookingRequest {
    #[serde(rename = "ACCOMMODATION", rename_all = "camelCase")]
    Accommodation {
        accommodation_id: String,
        check_in: String,
        check_out: String,
        guests: u32,
    },
    #[serde(rename = "TRANSPORTATION", rename_all = "camelCase")]
    Transportation {
        transportation_id: String,
        date: String,
        time: String,
        pickup: String,
        dropoff: String,
        passengers: u32,
    },
    #[serde(rename = "TOUR", rename_all = "camelCase")]
    Tour {
        tour_id: String,
        date: String,
        participants: u32,
    },
}

/// Payment-method fields; the `method` tag selects card or mobile money.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "method")]
pub enum PaymentMethodFields {
    #[serde(rename = "CARD", rename_all = "camelCase")]
    Card {
        holder: String,
        number: String,
        expiry: String,
        cvc: String,
    },
    #[serde(rename = "MOBILE_MONEY", rename_all = "camelCase")]
    MobileMoney { phone: String, account_name: String },
}

/// Payment-creation payload referencing an existing booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub booking_id: String,
    pub amount: u32,
    #[serde(flatten)]
    pub method: PaymentMethodFields,
}
