use super::*;

fn vehicle() -> Vehicle {
    Vehicle {
        id: "v-1".to_owned(),
        name: "Coaster Bus".to_owned(),
        vehicle_type: "BUS".to_owned(),
        capacity: 18,
        price_per_trip: 60_000,
        price_per_hour: 20_000,
    }
}

fn transportation_draft() -> TransportationDraft {
    TransportationDraft {
        date: "2026-09-01".to_owned(),
        time: "08:30".to_owned(),
        pickup: "Kigali".to_owned(),
        dropoff: "Huye".to_owned(),
        passengers: 4,
        rate: RateSelection::PerTrip,
    }
}

// =============================================================
// Accommodation drafts
// =============================================================

#[test]
fn accommodation_valid_stay_passes() {
    let draft = AccommodationDraft {
        check_in: "2026-09-01".to_owned(),
        check_out: "2026-09-03".to_owned(),
        guests: 2,
    };
    assert!(draft.validate(4).is_ok());
}

#[test]
fn accommodation_rejects_check_out_not_after_check_in() {
    let mut draft = AccommodationDraft {
        check_in: "2026-09-03".to_owned(),
        check_out: "2026-09-03".to_owned(),
        guests: 2,
    };
    assert!(draft.validate(4).is_err());

    draft.check_out = "2026-09-01".to_owned();
    assert!(draft.validate(4).is_err());
}

#[test]
fn accommodation_rejects_missing_dates() {
    let draft = AccommodationDraft {
        check_in: String::new(),
        check_out: "2026-09-03".to_owned(),
        guests: 2,
    };
    assert!(draft.validate(4).is_err());

    let draft = AccommodationDraft {
        check_in: "2026-09-01".to_owned(),
        check_out: String::new(),
        guests: 2,
    };
    assert!(draft.validate(4).is_err());
}

#[test]
fn accommodation_bounds_guest_count() {
    let mut draft = AccommodationDraft {
        check_in: "2026-09-01".to_owned(),
        check_out: "2026-09-03".to_owned(),
        guests: 0,
    };
    assert!(draft.validate(4).is_err());

    draft.guests = 5;
    assert!(draft.validate(4).is_err());

    draft.guests = 4;
    assert!(draft.validate(4).is_ok());
}

#[test]
fn accommodation_request_carries_the_listing_id() {
    let draft = AccommodationDraft {
        check_in: "2026-09-01".to_owned(),
        check_out: "2026-09-03".to_owned(),
        guests: 2,
    };
    let request = draft.to_request("a-5");
    assert_eq!(
        request,
        CreateBookingRequest::Accommodation {
            accommodation_id: "a-5".to_owned(),
            check_in: "2026-09-01".to_owned(),
            check_out: "2026-09-03".to_owned(),
            guests: 2,
        }
    );
}

// =============================================================
// Transportation drafts
// =============================================================

#[test]
fn transportation_valid_draft_passes() {
    assert!(transportation_draft().validate(18).is_ok());
}

#[test]
fn transportation_rejects_missing_required_fields() {
    let mut draft = transportation_draft();
    draft.date = String::new();
    assert!(draft.validate(18).is_err());

    let mut draft = transportation_draft();
    draft.time = String::new();
    assert!(draft.validate(18).is_err());

    let mut draft = transportation_draft();
    draft.pickup = "   ".to_owned();
    assert!(draft.validate(18).is_err());

    let mut draft = transportation_draft();
    draft.dropoff = String::new();
    assert!(draft.validate(18).is_err());
}

#[test]
fn transportation_bounds_passengers_by_capacity() {
    let mut draft = transportation_draft();
    draft.passengers = 0;
    assert!(draft.validate(18).is_err());

    draft.passengers = 19;
    assert!(draft.validate(18).is_err());

    draft.passengers = 18;
    assert!(draft.validate(18).is_ok());
}

#[test]
fn transportation_hourly_rate_needs_hours() {
    let mut draft = transportation_draft();
    draft.rate = RateSelection::PerHour { hours: 0 };
    assert!(draft.validate(18).is_err());

    draft.rate = RateSelection::PerHour { hours: 3 };
    assert!(draft.validate(18).is_ok());
}

#[test]
fn amount_due_per_trip_uses_the_flat_price() {
    let draft = transportation_draft();
    assert_eq!(draft.amount_due(&vehicle()), 60_000);
}

#[test]
fn amount_due_per_hour_multiplies_by_hours() {
    let mut draft = transportation_draft();
    draft.rate = RateSelection::PerHour { hours: 3 };
    assert_eq!(draft.amount_due(&vehicle()), 60_000);

    draft.rate = RateSelection::PerHour { hours: 1 };
    assert_eq!(draft.amount_due(&vehicle()), 20_000);
}

#[test]
fn transportation_request_trims_locations() {
    let mut draft = transportation_draft();
    draft.pickup = " Kigali Airport ".to_owned();
    let request = draft.to_request("v-1");
    let CreateBookingRequest::Transportation { pickup, passengers, .. } = request else {
        panic!("expected a transportation request");
    };
    assert_eq!(pickup, "Kigali Airport");
    assert_eq!(passengers, 4);
}

// =============================================================
// Tour drafts
// =============================================================

#[test]
fn tour_draft_requires_date_and_participants() {
    let draft = TourDraft::default();
    assert!(draft.validate().is_err());

    let draft = TourDraft {
        date: "2026-09-10".to_owned(),
        participants: 0,
    };
    assert!(draft.validate().is_err());

    let draft = TourDraft {
        date: "2026-09-10".to_owned(),
        participants: 3,
    };
    assert!(draft.validate().is_ok());
}

// =============================================================
// Payment drafts
// =============================================================

#[test]
fn card_payment_requires_every_field() {
    let draft = PaymentDraft::Card {
        holder: "ERIC MUGISHA".to_owned(),
        number: "4242424242424242".to_owned(),
        expiry: "12/27".to_owned(),
        cvc: String::new(),
    };
    assert!(draft.validate().is_err());

    let draft = PaymentDraft::Card {
        holder: "ERIC MUGISHA".to_owned(),
        number: "4242424242424242".to_owned(),
        expiry: "12/27".to_owned(),
        cvc: "123".to_owned(),
    };
    assert!(draft.validate().is_ok());
}

#[test]
fn mobile_money_requires_phone_and_name() {
    let draft = PaymentDraft::MobileMoney {
        phone: String::new(),
        account_name: "Diane".to_owned(),
    };
    assert!(draft.validate().is_err());

    let draft = PaymentDraft::MobileMoney {
        phone: "+250780000000".to_owned(),
        account_name: " ".to_owned(),
    };
    assert!(draft.validate().is_err());

    let draft = PaymentDraft::MobileMoney {
        phone: "+250780000000".to_owned(),
        account_name: "Diane".to_owned(),
    };
    assert!(draft.validate().is_ok());
}

#[test]
fn payment_fields_are_trimmed_for_the_wire() {
    let draft = PaymentDraft::MobileMoney {
        phone: " +250780000000 ".to_owned(),
        account_name: " Diane ".to_owned(),
    };
    let fields = draft.to_request_fields();
    assert_eq!(
        fields,
        crate::net::types::PaymentMethodFields::MobileMoney {
            phone: "+250780000000".to_owned(),
            account_name: "Diane".to_owned(),
        }
    );
}

// =============================================================
// Flow stages
// =============================================================

#[test]
fn flow_starts_on_details() {
    assert_eq!(FlowStage::default(), FlowStage::Details);
}

#[test]
fn flow_stages_are_distinct() {
    let payment = FlowStage::Payment {
        booking_id: "b-1".to_owned(),
        amount: 60_000,
    };
    let confirmed = FlowStage::Confirmed {
        booking_id: "b-1".to_owned(),
    };
    assert_ne!(FlowStage::Details, payment);
    assert_ne!(payment, confirmed);
}
