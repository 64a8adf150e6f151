//! Catalog loading and enrichment.
//!
//! The loader fetches raw records through a [`CatalogPort`] and recovers from
//! any backend failure by substituting a fixed fallback catalog, so loading
//! never surfaces an error to the caller.

use std::sync::Arc;

use crate::model::{EnrichedSkip, SkipRecord};
use crate::ports::CatalogPort;

/// Image asset used for sizes without a dedicated photo.
const DEFAULT_IMAGE: &str = "/default-skip.jpg";

/// Service facade loading and enriching the skip catalog.
pub struct CatalogService {
    port: Arc<dyn CatalogPort>,
}

impl CatalogService {
    /// Create a new service bound to the provided catalog backend.
    #[must_use]
    pub fn new(port: Arc<dyn CatalogPort>) -> Self {
        Self { port }
    }

    /// Load the catalog, enriched and in source order.
    ///
    /// Falls back to [`fallback_catalog`] when the backend fails for any
    /// reason (transport, status, schema), logging a warning instead of
    /// surfacing the error.
    pub async fn load(&self) -> Vec<EnrichedSkip> {
        let records = match self.port.fetch().await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed, using fallback data");
                fallback_catalog()
            }
        };

        records.into_iter().map(enrich_skip).collect()
    }
}

/// Derive the display fields for a raw catalog record.
///
/// The derivation is pure: name from the size, description from a fixed
/// size ladder, image from an exact-size lookup, total price as the pre-VAT
/// price plus VAT.
#[must_use]
pub fn enrich_skip(record: SkipRecord) -> EnrichedSkip {
    let name = format!("{} Yard Skip", record.size);
    let description = skip_description(&record.size).to_owned();
    let image = skip_image(&record.size).to_owned();
    let total_price = record.price_before_vat + record.vat;

    EnrichedSkip {
        record,
        name,
        description,
        image,
        total_price,
    }
}

/// Image asset for a skip size. Only a few sizes have dedicated photos.
#[must_use]
pub fn skip_image(size: &str) -> &'static str {
    match parsed_size(size) {
        Some(4) => "/4-yarder-skip.jpg",
        Some(16) => "/16-yarder-skip.jpg",
        Some(20) => "/20-yarder-skip.jpg",
        Some(40) => "/40-yarder-skip.jpg",
        _ => DEFAULT_IMAGE,
    }
}

/// Canned description for a skip size, chosen by a fixed threshold ladder.
///
/// Unparseable sizes fall through to the largest tier, matching the image
/// lookup falling through to the default asset.
#[must_use]
pub fn skip_description(size: &str) -> &'static str {
    match parsed_size(size) {
        Some(yards) if yards <= 2 => "Perfect for small household clearouts and garden waste",
        Some(yards) if yards <= 4 => "Ideal for medium renovations and garage clearouts",
        Some(yards) if yards <= 6 => "Great for larger home projects and construction waste",
        Some(yards) if yards <= 8 => "Suitable for major renovations and commercial projects",
        Some(yards) if yards <= 12 => "Perfect for large home renovations and office clearouts",
        Some(yards) if yards <= 16 => "Ideal for major construction projects and large-scale clearouts",
        Some(yards) if yards <= 20 => "Great for commercial construction and industrial waste",
        _ => "Perfect for large-scale commercial and industrial projects",
    }
}

fn parsed_size(size: &str) -> Option<u32> {
    size.trim().parse().ok()
}

/// The static catalog used whenever the backend is unavailable.
///
/// This is the only definition of the fallback data; sizes span 2 to 40
/// yards and the 8-yard skip is marked unavailable.
#[must_use]
pub fn fallback_catalog() -> Vec<SkipRecord> {
    let record = |id, size: &str, price_before_vat, vat, availability, delivery_time: &str| {
        SkipRecord {
            id,
            size: size.to_owned(),
            price_before_vat,
            vat,
            availability,
            delivery_time: delivery_time.to_owned(),
        }
    };

    vec![
        record(1, "2", 120.0, 24.0, true, "2-3 days"),
        record(2, "4", 180.0, 36.0, true, "1-2 days"),
        record(3, "6", 240.0, 48.0, true, "2-3 days"),
        record(4, "8", 300.0, 60.0, false, "3-4 days"),
        record(5, "12", 420.0, 84.0, true, "1-2 days"),
        record(6, "16", 520.0, 104.0, true, "2-3 days"),
        record(7, "20", 650.0, 130.0, true, "3-4 days"),
        record(8, "40", 1200.0, 240.0, true, "5-7 days"),
    ]
}
