//! Traits describing backend capabilities and shared error types.

use async_trait::async_trait;
use reqwest::{Error as ReqwestError, StatusCode};

use crate::model::{BookingRequest, BookingResult, SkipRecord};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to catalog or booking backends.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Backend answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    /// Response body did not match the expected schema.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    /// Internal backend error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for catalog backends serving raw skip records.
pub trait CatalogPort: Send + Sync {
    /// Fetch the full list of skip records, in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the request fails, the backend answers
    /// with a non-success status, or the payload cannot be decoded.
    async fn fetch(&self) -> Result<Vec<SkipRecord>, PortError>;
}

#[async_trait]
/// Trait for booking backends accepting a booking request.
///
/// The contract is transport-agnostic: the shipped implementation simulates
/// the call in-process, and a real HTTP backend can replace it without
/// touching any calling code.
pub trait BookingGateway: Send + Sync {
    /// Submit a booking and wait for the outcome.
    ///
    /// A rejected booking is reported as `Ok` with `success == false`; an
    /// `Err` means the backend could not be reached at all.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the transport itself fails.
    async fn submit(&self, request: &BookingRequest) -> Result<BookingResult, PortError>;
}
