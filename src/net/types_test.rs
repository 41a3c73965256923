use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn envelope_decodes_success_with_data() {
    let env: ApiEnvelope<Vec<Tour>> = serde_json::from_str(
        r#"{
            "success": true,
            "data": [
                { "id": "t-1", "name": "Akagera Day Trip", "location": "Akagera", "pricePerPerson": 95000 }
            ]
        }"#,
    )
    .expect("envelope");

    assert!(env.success);
    assert!(env.message.is_none());
    let tours = env.data.expect("data");
    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0].price_per_person, 95_000);
    assert!(tours[0].description.is_none());
}

#[test]
fn envelope_decodes_failure_message_without_data() {
    let env: ApiEnvelope<LoginData> = serde_json::from_str(
        r#"{ "success": false, "message": "Invalid email or password" }"#,
    )
    .expect("envelope");

    assert!(!env.success);
    assert_eq!(env.message.as_deref(), Some("Invalid email or password"));
    assert!(env.data.is_none());
}

// =============================================================
// Profile and login payloads
// =============================================================

#[test]
fn user_decodes_camel_case_fields() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u-7",
            "firstName": "Diane",
            "lastName": "Ingabire",
            "email": "diane@example.rw",
            "role": "PROVIDER",
            "isVerified": false
        }"#,
    )
    .expect("user");

    assert_eq!(user.first_name, "Diane");
    assert_eq!(user.role, "PROVIDER");
    assert!(!user.is_verified);
}

#[test]
fn login_data_carries_token_and_user() {
    let data: LoginData = serde_json::from_str(
        r#"{
            "token": "bearer-token",
            "user": {
                "id": "u-1", "firstName": "A", "lastName": "B",
                "email": "a@b.rw", "role": "USER", "isVerified": true
            }
        }"#,
    )
    .expect("login data");

    assert_eq!(data.token, "bearer-token");
    assert_eq!(data.user.role, "USER");
}

// =============================================================
// Listings
// =============================================================

#[test]
fn vehicle_decodes_capacity_and_rates() {
    let vehicle: Vehicle = serde_json::from_str(
        r#"{
            "id": "v-3",
            "name": "Safari Land Cruiser",
            "vehicleType": "SUV",
            "capacity": 6,
            "pricePerTrip": 40000,
            "pricePerHour": 15000
        }"#,
    )
    .expect("vehicle");

    assert_eq!(vehicle.capacity, 6);
    assert_eq!(vehicle.price_per_trip, 40_000);
    assert_eq!(vehicle.price_per_hour, 15_000);
}

#[test]
fn booking_total_amount_is_optional() {
    let booking: Booking = serde_json::from_str(
        r#"{
            "id": "b-9",
            "serviceType": "ACCOMMODATION",
            "serviceId": "a-2",
            "status": "CONFIRMED"
        }"#,
    )
    .expect("booking");

    assert_eq!(booking.status, "CONFIRMED");
    assert!(booking.total_amount.is_none());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn booking_request_is_tagged_with_service_type() {
    let request = CreateBookingRequest::Accommodation {
        accommodation_id: "a-2".to_owned(),
        check_in: "2026-09-01".to_owned(),
        check_out: "2026-09-04".to_owned(),
        guests: 2,
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["serviceType"], "ACCOMMODATION");
    assert_eq!(value["accommodationId"], "a-2");
    assert_eq!(value["checkOut"], "2026-09-04");
}

#[test]
fn transportation_request_uses_camel_case_fields() {
    let request = CreateBookingRequest::Transportation {
        transportation_id: "v-3".to_owned(),
        date: "2026-09-01".to_owned(),
        time: "08:30".to_owned(),
        pickup: "Kigali Airport".to_owned(),
        dropoff: "Musanze".to_owned(),
        passengers: 4,
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["serviceType"], "TRANSPORTATION");
    assert_eq!(value["transportationId"], "v-3");
    assert_eq!(value["passengers"], 4);
}

#[test]
fn payment_request_flattens_the_method_fields() {
    let request = CreatePaymentRequest {
        booking_id: "b-9".to_owned(),
        amount: 40_000,
        method: PaymentMethodFields::MobileMoney {
            phone: "+250780000000".to_owned(),
            account_name: "Diane Ingabire".to_owned(),
        },
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["bookingId"], "b-9");
    assert_eq!(value["amount"], 40_000);
    assert_eq!(value["method"], "MOBILE_MONEY");
    assert_eq!(value["phone"], "+250780000000");
    assert_eq!(value["accountName"], "Diane Ingabire");
}

#[test]
fn card_payment_serializes_card_fields() {
    let request = CreatePaymentRequest {
        booking_id: "b-1".to_owned(),
        amount: 120_000,
        method: PaymentMethodFields::Card {
            holder: "ERIC MUGISHA".to_owned(),
            number: "4242424242424242".to_owned(),
            expiry: "12/27".to_owned(),
            cvc: "123".to_owned(),
        },
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["method"], "CARD");
    assert_eq!(value["holder"], "ERIC MUGISHA");
    assert_eq!(value["number"], "4242424242424242");
}
