//! Networking: REST client and wire types for the booking API.

pub mod api;
pub mod types;
