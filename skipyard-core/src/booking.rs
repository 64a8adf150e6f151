//! Booking workflow state machine.
//!
//! Drives a single booking modal session: `Idle` until opened, `Open` while
//! the form is visible, `Submitting` while the gateway call is in flight,
//! then `Succeeded` or `Failed` until the modal is closed back to `Idle`.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::{BookingRequest, BookingResult, CartLine, CustomerDetails};
use crate::ports::BookingGateway;

/// Message shown when the submission itself could not be delivered.
const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit booking";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Current position in the booking lifecycle.
pub enum BookingPhase {
    /// No booking modal is open.
    Idle,
    /// The form is visible and accepting input.
    Open,
    /// A submission is in flight.
    Submitting,
    /// The last submission was accepted.
    Succeeded(BookingResult),
    /// The last submission was rejected; the form stays open for a retry.
    Failed(String),
}

/// State machine wrapping a [`BookingGateway`].
pub struct BookingWorkflow {
    phase: BookingPhase,
    gateway: Arc<dyn BookingGateway>,
}

impl BookingWorkflow {
    /// Create a workflow in the `Idle` phase.
    #[must_use]
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            phase: BookingPhase::Idle,
            gateway,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    /// Whether the modal should be visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, BookingPhase::Idle)
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, BookingPhase::Submitting)
    }

    /// Result of the last submission, if it succeeded.
    #[must_use]
    pub fn succeeded(&self) -> Option<&BookingResult> {
        match &self.phase {
            BookingPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Error message of the last submission, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            BookingPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Open the booking form, clearing any previous outcome.
    pub fn open(&mut self) {
        self.phase = BookingPhase::Open;
    }

    /// Close the form and return to `Idle`, clearing any outcome.
    pub fn close(&mut self) {
        self.phase = BookingPhase::Idle;
    }

    /// Submit the cart as a booking and wait for the outcome.
    ///
    /// A call with an empty cart, from `Idle`, or while another submission
    /// is in flight is a no-op; the guard keeps re-entrant submits from
    /// ever starting a second gateway call. The caller is expected to have
    /// validated the form first (see [`crate::validate`]) and to clear the
    /// cart when the workflow lands in `Succeeded`.
    pub async fn submit(
        &mut self,
        lines: &[CartLine],
        customer: &CustomerDetails,
        delivery_date: NaiveDate,
        notes: Option<String>,
    ) {
        if lines.is_empty() {
            return;
        }
        if matches!(self.phase, BookingPhase::Idle | BookingPhase::Submitting) {
            return;
        }

        self.phase = BookingPhase::Submitting;

        let request = BookingRequest {
            lines: lines.to_vec(),
            customer: customer.clone(),
            delivery_date,
            notes,
        };

        // Whatever the gateway does, the workflow must leave `Submitting`.
        self.phase = match self.gateway.submit(&request).await {
            Ok(result) if result.success => {
                tracing::info!(booking_id = ?result.booking_id, "booking confirmed");
                BookingPhase::Succeeded(result)
            }
            Ok(result) => BookingPhase::Failed(result.message),
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed to reach the gateway");
                BookingPhase::Failed(SUBMIT_FAILED_MESSAGE.to_owned())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::catalog::{enrich_skip, fallback_catalog};
    use crate::ports::PortError;

    struct StubGateway {
        outcome: Result<BookingResult, PortError>,
        calls: AtomicUsize,
    }

    impl StubGateway {
        fn succeeding() -> Self {
            Self {
                outcome: Ok(BookingResult {
                    success: true,
                    booking_id: Some("WW-1".to_owned()),
                    message: "Your skip booking has been confirmed successfully!".to_owned(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                outcome: Ok(BookingResult {
                    success: false,
                    booking_id: None,
                    message: "Booking failed. Please try again.".to_owned(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                outcome: Err(PortError::Internal("gateway offline".to_owned())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BookingGateway for StubGateway {
        async fn submit(&self, _request: &BookingRequest) -> Result<BookingResult, PortError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(result) => Ok(result.clone()),
                Err(_) => Err(PortError::Internal("gateway offline".to_owned())),
            }
        }
    }

    fn one_line() -> Vec<CartLine> {
        let skip = fallback_catalog()
            .into_iter()
            .map(enrich_skip)
            .next()
            .unwrap();
        vec![CartLine {
            skip,
            quantity: 1,
            added_at: chrono::Utc::now(),
        }]
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "01455 000000".to_owned(),
            address: "1 Mill Lane".to_owned(),
            postcode: "LE10".to_owned(),
        }
    }

    fn delivery_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn empty_cart_submit_is_a_noop() {
        let gateway = Arc::new(StubGateway::succeeding());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);
        workflow.open();

        workflow.submit(&[], &customer(), delivery_date(), None).await;

        assert_eq!(workflow.phase(), &BookingPhase::Open);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submit_from_idle_is_rejected() {
        let gateway = Arc::new(StubGateway::succeeding());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);

        workflow
            .submit(&one_line(), &customer(), delivery_date(), None)
            .await;

        assert_eq!(workflow.phase(), &BookingPhase::Idle);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submission_lands_in_succeeded() {
        let gateway = Arc::new(StubGateway::succeeding());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);
        workflow.open();

        workflow
            .submit(&one_line(), &customer(), delivery_date(), Some("side gate".to_owned()))
            .await;

        let result = workflow.succeeded().expect("should have succeeded");
        assert_eq!(result.booking_id.as_deref(), Some("WW-1"));
        assert!(!workflow.is_submitting());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejected_submission_lands_in_failed_and_stays_open() {
        let gateway = Arc::new(StubGateway::rejecting());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);
        workflow.open();

        workflow
            .submit(&one_line(), &customer(), delivery_date(), None)
            .await;

        assert_eq!(workflow.error(), Some("Booking failed. Please try again."));
        assert!(workflow.is_open());

        // A retry goes straight through the Failed phase.
        workflow
            .submit(&one_line(), &customer(), delivery_date(), None)
            .await;
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unreachable_gateway_lands_in_failed() {
        let gateway = Arc::new(StubGateway::unreachable());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);
        workflow.open();

        workflow
            .submit(&one_line(), &customer(), delivery_date(), None)
            .await;

        assert_eq!(workflow.error(), Some("Failed to submit booking"));
        assert!(!workflow.is_submitting());
    }

    #[tokio::test]
    async fn open_clears_previous_outcome_and_close_returns_to_idle() {
        let gateway = Arc::new(StubGateway::rejecting());
        let mut workflow = BookingWorkflow::new(Arc::clone(&gateway) as Arc<dyn BookingGateway>);
        workflow.open();
        workflow
            .submit(&one_line(), &customer(), delivery_date(), None)
            .await;
        assert!(workflow.error().is_some());

        workflow.open();
        assert_eq!(workflow.phase(), &BookingPhase::Open);
        assert!(workflow.error().is_none());

        workflow.close();
        assert_eq!(workflow.phase(), &BookingPhase::Idle);
        assert!(!workflow.is_open());
    }
}
