#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::net::types::{CreateBookingRequest, PaymentMethodFields, Vehicle};

/// Draft for an accommodation stay. Dates are ISO `YYYY-MM-DD` strings as
/// produced by the date inputs; ISO dates compare lexicographically.
#[derive(Clone, Debug, Default)]
pub struct AccommodationDraft {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl AccommodationDraft {
    /// Validate the draft against the listing's guest capacity.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for the first failed check.
    pub fn validate(&self, max_guests: u32) -> Result<(), String> {
        if self.check_in.is_empty() {
            return Err("Select a check-in date".to_owned());
        }
        if self.check_out.is_empty() {
            return Err("Select a check-out date".to_owned());
        }
        if self.check_out <= self.check_in {
            return Err("Check-out must be after check-in".to_owned());
        }
        if self.guests == 0 {
            return Err("At least one guest is required".to_owned());
        }
        if self.guests > max_guests {
            return Err(format!("This accommodation sleeps at most {max_guests} guests"));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_request(&self, accommodation_id: &str) -> CreateBookingRequest {
        CreateBookingRequest::Accommodation {
            accommodation_id: accommodation_id.to_owned(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            guests: self.guests,
        }
    }
}

/// Trip-vs-hourly rate selection for a transportation booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateSelection {
    PerTrip,
    PerHour { hours: u32 },
}

/// Draft for a transportation booking.
#[derive(Clone, Debug)]
pub struct TransportationDraft {
    pub date: String,
    pub time: String,
    pub pickup: String,
    pub dropoff: String,
    pub passengers: u32,
    pub rate: RateSelection,
}

impl Default for TransportationDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            pickup: String::new(),
            dropoff: String::new(),
            passengers: 1,
            rate: RateSelection::PerTrip,
        }
    }
}

impl TransportationDraft {
    /// Validate the draft against the vehicle's passenger capacity.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for the first failed check.
    pub fn validate(&self, capacity: u32) -> Result<(), String> {
        if self.date.is_empty() {
            return Err("Select a travel date".to_owned());
        }
        if self.time.is_empty() {
            return Err("Select a pickup time".to_owned());
        }
        if self.pickup.trim().is_empty() {
            return Err("Enter a pickup location".to_owned());
        }
        if self.dropoff.trim().is_empty() {
            return Err("Enter a dropoff location".to_owned());
        }
        if self.passengers == 0 {
            return Err("At least one passenger is required".to_owned());
        }
        if self.passengers > capacity {
            return Err(format!("This vehicle seats at most {capacity} passengers"));
        }
        if let RateSelection::PerHour { hours } = self.rate {
            if hours == 0 {
                return Err("Hourly bookings need at least one hour".to_owned());
            }
        }
        Ok(())
    }

    /// Total due for the selected rate.
    #[must_use]
    pub fn amount_due(&self, vehicle: &Vehicle) -> u32 {
        match self.rate {
            RateSelection::PerTrip => vehicle.price_per_trip,
            RateSelection::PerHour { hours } => vehicle.price_per_hour.saturating_mul(hours),
        }
    }

    #[must_use]
    pub fn to_request(&self, transportation_id: &str) -> CreateBookingRequest {
        CreateBookingRequest::Transportation {
            transportation_id: transportation_id.to_owned(),
            date: self.date.clone(),
            time: self.time.clone(),
            pickup: self.pickup.trim().to_owned(),
            dropoff: self.dropoff.trim().to_owned(),
            passengers: self.passengers,
        }
    }
}

/// Draft for a tour booking.
#[derive(Clone, Debug)]
pub struct TourDraft {
    pub date: String,
    pub participants: u32,
}

impl Default for TourDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            participants: 1,
        }
    }
}

impl TourDraft {
    /// # Errors
    ///
    /// Returns a user-facing message for the first failed check.
    pub fn validate(&self) -> Result<(), String> {
        if self.date.is_empty() {
            return Err("Select a tour date".to_owned());
        }
        if self.participants == 0 {
            return Err("At least one participant is required".to_owned());
        }
        Ok(())
    }

    #[must_use]
    pub fn to_request(&self, tour_id: &str) -> CreateBookingRequest {
        CreateBookingRequest::Tour {
            tour_id: tour_id.to_owned(),
            date: self.date.clone(),
            participants: self.participants,
        }
    }
}

/// Payment-method draft for the transportation flow. Exactly the selected
/// method's fields are validated.
#[derive(Clone, Debug)]
pub enum PaymentDraft {
    Card {
        holder: String,
        number: String,
        expiry: String,
        cvc: String,
    },
    MobileMoney {
        phone: String,
        account_name: String,
    },
}

impl PaymentDraft {
    /// # Errors
    ///
    /// Returns a user-facing message for the first missing field.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Card {
                holder,
                number,
                expiry,
                cvc,
            } => {
                if holder.trim().is_empty() {
                    return Err("Enter the cardholder name".to_owned());
                }
                if number.trim().is_empty() {
                    return Err("Enter the card number".to_owned());
                }
                if expiry.trim().is_empty() {
                    return Err("Enter the card expiry".to_owned());
                }
                if cvc.trim().is_empty() {
                    return Err("Enter the card security code".to_owned());
                }
            }
            Self::MobileMoney { phone, account_name } => {
                if phone.trim().is_empty() {
                    return Err("Enter the mobile money phone number".to_owned());
                }
                if account_name.trim().is_empty() {
                    return Err("Enter the account holder name".to_owned());
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_request_fields(&self) -> PaymentMethodFields {
        match self {
            Self::Card {
                holder,
                number,
                expiry,
                cvc,
            } => PaymentMethodFields::Card {
                holder: holder.trim().to_owned(),
                number: number.trim().to_owned(),
                expiry: expiry.trim().to_owned(),
                cvc: cvc.trim().to_owned(),
            },
            Self::MobileMoney { phone, account_name } => PaymentMethodFields::MobileMoney {
                phone: phone.trim().to_owned(),
                account_name: account_name.trim().to_owned(),
            },
        }
    }
}

/// Stage of the two-step transportation flow. Booking creation moves the
/// dialog from `Details` to `Payment`; a successful payment moves it to
/// `Confirmed`. A failed payment stays on `Payment` so the booking is
/// visibly unpaid and the form can be resubmitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowStage {
    #[default]
    Details,
    Payment { booking_id: String, amount: u32 },
    Confirmed { booking_id: String },
}
