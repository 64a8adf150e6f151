//! Simulated booking gateway.
//!
//! Stands in for a real booking endpoint: it sleeps for a fixed latency and
//! resolves the outcome from an injectable [`OutcomeSource`], so a production
//! HTTP gateway can replace it without touching the workflow, and tests can
//! force either outcome deterministically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use skipyard_core::model::{BookingRequest, BookingResult};
use skipyard_core::ports::{BookingGateway, PortError};

/// Latency applied to every simulated submission.
const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Probability that a simulated submission is accepted.
const DEFAULT_SUCCESS_RATE: f64 = 0.9;

const CONFIRMED_MESSAGE: &str = "Your skip booking has been confirmed successfully!";
const REJECTED_MESSAGE: &str = "Booking failed. Please try again.";

/// Source deciding whether a simulated submission is accepted.
pub trait OutcomeSource: Send + Sync {
    /// Decide the outcome of one submission.
    fn accept(&self) -> bool;
}

/// Outcome source accepting with a fixed probability.
pub struct RandomOutcome {
    success_rate: f64,
}

impl RandomOutcome {
    /// Accept with the given probability in `0.0..=1.0`.
    #[must_use]
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl OutcomeSource for RandomOutcome {
    fn accept(&self) -> bool {
        rand::thread_rng().gen_bool(self.success_rate)
    }
}

/// In-process stand-in for a real booking backend.
pub struct SimulatedBookingGateway {
    latency: Duration,
    outcome: Arc<dyn OutcomeSource>,
}

impl SimulatedBookingGateway {
    /// Gateway with production-like latency and a 90% success rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_outcome(DEFAULT_LATENCY, Arc::new(RandomOutcome::new(DEFAULT_SUCCESS_RATE)))
    }

    /// Gateway with explicit latency and outcome source.
    #[must_use]
    pub fn with_outcome(latency: Duration, outcome: Arc<dyn OutcomeSource>) -> Self {
        Self { latency, outcome }
    }
}

impl Default for SimulatedBookingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingGateway for SimulatedBookingGateway {
    async fn submit(&self, request: &BookingRequest) -> Result<BookingResult, PortError> {
        tokio::time::sleep(self.latency).await;

        if self.outcome.accept() {
            let booking_id = format!("WW-{}", Utc::now().timestamp_millis());
            tracing::debug!(
                %booking_id,
                lines = request.lines.len(),
                delivery_date = %request.delivery_date,
                "simulated booking accepted"
            );
            Ok(BookingResult {
                success: true,
                booking_id: Some(booking_id),
                message: CONFIRMED_MESSAGE.to_owned(),
            })
        } else {
            tracing::debug!(lines = request.lines.len(), "simulated booking rejected");
            Ok(BookingResult {
                success: false,
                booking_id: None,
                message: REJECTED_MESSAGE.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use skipyard_core::model::CustomerDetails;

    use super::*;

    struct FixedOutcome(bool);

    impl OutcomeSource for FixedOutcome {
        fn accept(&self) -> bool {
            self.0
        }
    }

    fn request() -> BookingRequest {
        BookingRequest {
            lines: Vec::new(),
            customer: CustomerDetails::default(),
            delivery_date: NaiveDate::from_ymd_opt(2030, 6, 1).expect("valid date"),
            notes: None,
        }
    }

    #[tokio::test]
    async fn forced_success_carries_a_booking_id() {
        let gateway =
            SimulatedBookingGateway::with_outcome(Duration::ZERO, Arc::new(FixedOutcome(true)));

        let result = gateway.submit(&request()).await.expect("should resolve");

        assert!(result.success);
        let id = result.booking_id.expect("should have an id");
        assert!(id.starts_with("WW-"), "unexpected id {id}");
        assert_eq!(result.message, CONFIRMED_MESSAGE);
    }

    #[tokio::test]
    async fn forced_failure_carries_the_fixed_message() {
        let gateway =
            SimulatedBookingGateway::with_outcome(Duration::ZERO, Arc::new(FixedOutcome(false)));

        let result = gateway.submit(&request()).await.expect("should resolve");

        assert!(!result.success);
        assert!(result.booking_id.is_none());
        assert_eq!(result.message, REJECTED_MESSAGE);
    }
}
