//! Domain data structures for skips, cart lines, and bookings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Raw skip record as returned by the catalog backend.
pub struct SkipRecord {
    /// Unique identifier within the catalog.
    pub id: u32,
    /// Skip size in cubic yards, e.g. "8". Kept as a string to match the wire format.
    pub size: String,
    /// Hire price excluding VAT.
    pub price_before_vat: f64,
    /// VAT surcharge for this skip.
    pub vat: f64,
    /// Whether the skip can currently be booked.
    pub availability: bool,
    /// Human-friendly delivery estimate, e.g. "2-3 days".
    pub delivery_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Catalog record enriched with display-ready fields.
pub struct EnrichedSkip {
    /// The raw record this was derived from.
    #[serde(flatten)]
    pub record: SkipRecord,
    /// Display name, e.g. "8 Yard Skip".
    pub name: String,
    /// Canned description chosen by skip size.
    pub description: String,
    /// Path to the image asset for this size.
    pub image: String,
    /// Price including VAT.
    pub total_price: f64,
}

impl EnrichedSkip {
    /// Identifier of the underlying record.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.record.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One skip type plus the quantity currently selected for booking.
pub struct CartLine {
    /// The skip being booked.
    pub skip: EnrichedSkip,
    /// Number of skips of this type. Always at least 1.
    pub quantity: u32,
    /// When the line was first added to the cart.
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Aggregated cart totals, derived on demand and never stored.
pub struct CartSummary {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of pre-VAT prices weighted by quantity.
    pub subtotal: f64,
    /// Sum of VAT surcharges weighted by quantity.
    pub total_vat: f64,
    /// Subtotal plus VAT.
    pub grand_total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Customer contact details collected by the booking form.
pub struct CustomerDetails {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery street address.
    pub address: String,
    /// Delivery postcode.
    pub postcode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Snapshot of everything needed to place a booking, built at submit time.
pub struct BookingRequest {
    /// Cart lines captured at submission.
    pub lines: Vec<CartLine>,
    /// Customer contact details.
    pub customer: CustomerDetails,
    /// Requested delivery date. Must be after today.
    pub delivery_date: NaiveDate,
    /// Optional free-text notes for the driver.
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of a booking submission.
pub struct BookingResult {
    /// Whether the booking was accepted.
    pub success: bool,
    /// Reference assigned by the backend, present on success.
    pub booking_id: Option<String>,
    /// Human-readable confirmation or error message.
    pub message: String,
}
