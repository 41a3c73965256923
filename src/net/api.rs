//! REST client for the NDAREHE booking API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached to authenticated requests.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; failures degrade to toasts or
//! redirects in the UI, never panics. A `success: false` envelope maps to
//! `ApiError::Api` carrying the server's message.

#![allow(clippy::unused_async)]

use crate::net::types::{
    Accommodation, Booking, CreateBookingRequest, CreatePaymentRequest, LoginData, Payment, Tour,
    User, Vehicle,
};

/// Failure of a REST call. `Clone` because listing results are held in
/// reactive resources.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    /// The server answered with `success: false` and a message.
    #[error("{0}")]
    Api(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Base URL of the booking API. Overridable at compile time.
#[cfg(feature = "hydrate")]
fn api_base() -> &'static str {
    option_env!("NDAREHE_API_URL").unwrap_or("/api/v1")
}

/// Read the body once and unwrap the `{ success, message, data }` envelope.
#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    use crate::net::types::ApiEnvelope;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|env| env.message);
        return Err(message.map_or(ApiError::Status(status), ApiError::Api));
    }

    let envelope: ApiEnvelope<T> =
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Api(envelope.message.unwrap_or_else(|| {
            format!("request failed with status {status}")
        })));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("missing data".to_owned()))
}

/// Like [`decode`] but for endpoints whose envelope carries no data.
#[cfg(feature = "hydrate")]
async fn decode_empty(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    use crate::net::types::ApiEnvelope;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let envelope = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body).ok();

    if !resp.ok() || !envelope.as_ref().is_some_and(|env| env.success) {
        let message = envelope.and_then(|env| env.message);
        return Err(message.map_or(ApiError::Status(status), ApiError::Api));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `POST /auth/login` — exchange credentials for a token and profile.
///
/// # Errors
///
/// Fails on network errors, a rejected login, or a malformed response.
pub async fn login(email: &str, password: &str) -> Result<LoginData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/auth/login", api_base()))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /auth/resend-verification` — re-send the verification email.
///
/// # Errors
///
/// Fails on network errors or a rejected request.
pub async fn resend_verification(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::post(&format!("{}/auth/resend-verification", api_base()))
                .json(&serde_json::json!({ "email": email }))
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_empty(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// `GET /auth/me` — fetch the profile for a bearer token. Used to restore
/// a persisted session at startup.
///
/// # Errors
///
/// Fails on network errors or a stale/invalid token.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/auth/me", api_base()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /accommodations` — public accommodation listings.
///
/// # Errors
///
/// Fails on network errors or a malformed response.
pub async fn fetch_accommodations() -> Result<Vec<Accommodation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/accommodations", api_base()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /transportation` — public vehicle listings.
///
/// # Errors
///
/// Fails on network errors or a malformed response.
pub async fn fetch_transportation() -> Result<Vec<Vehicle>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/transportation", api_base()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /tours` — public tour listings.
///
/// # Errors
///
/// Fails on network errors or a malformed response.
pub async fn fetch_tours() -> Result<Vec<Tour>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/tours", api_base()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /bookings` — the session user's bookings.
///
/// # Errors
///
/// Fails on network errors or an invalid token.
pub async fn fetch_my_bookings(token: &str) -> Result<Vec<Booking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/bookings", api_base()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `POST /bookings` — create a booking.
///
/// # Errors
///
/// Fails on network errors, validation rejections, or an invalid token.
pub async fn create_booking(
    token: &str,
    request: &CreateBookingRequest,
) -> Result<Booking, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/bookings", api_base()))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// `POST /payments` — create a payment referencing an existing booking.
///
/// # Errors
///
/// Fails on network errors, a declined payment, or an invalid token.
pub async fn create_payment(
    token: &str,
    request: &CreatePaymentRequest,
) -> Result<Payment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/payments", api_base()))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}
