//! In-memory shopping cart.
//!
//! Lines are kept in insertion order and keyed by skip id. All operations are
//! synchronous and touch nothing but the store itself; the summary is folded
//! from the current lines on every call rather than cached.

use chrono::Utc;

use crate::model::{CartLine, CartSummary, EnrichedSkip};

/// Ordered collection of cart lines, one per skip id.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a skip to the cart, merging into an existing line for the same id.
    ///
    /// Availability is not checked here; refusing unavailable skips is the
    /// caller's policy.
    pub fn add(&mut self, skip: EnrichedSkip, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.line_mut(skip.id()) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            skip,
            quantity,
            added_at: Utc::now(),
        });
    }

    /// Remove the line for the given skip id, if present.
    pub fn remove(&mut self, skip_id: u32) {
        self.lines.retain(|line| line.skip.id() != skip_id);
    }

    /// Set the line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero removes the line, preserving the invariant that
    /// every stored line has quantity at least 1.
    pub fn update_quantity(&mut self, skip_id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(skip_id);
            return;
        }

        if let Some(line) = self.line_mut(skip_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether a line exists for the given skip id.
    #[must_use]
    pub fn contains(&self, skip_id: u32) -> bool {
        self.lines.iter().any(|line| line.skip.id() == skip_id)
    }

    /// Quantity currently in the cart for the given skip id, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, skip_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.skip.id() == skip_id)
            .map_or(0, |line| line.quantity)
    }

    /// Fold the current lines into totals.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let total_items = self
            .lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity));
        let subtotal: f64 = self
            .lines
            .iter()
            .map(|line| line.skip.record.price_before_vat * f64::from(line.quantity))
            .sum();
        let total_vat: f64 = self
            .lines
            .iter()
            .map(|line| line.skip.record.vat * f64::from(line.quantity))
            .sum();

        CartSummary {
            total_items,
            subtotal,
            total_vat,
            grand_total: subtotal + total_vat,
        }
    }

    fn line_mut(&mut self, skip_id: u32) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.skip.id() == skip_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::enrich_skip;
    use crate::model::SkipRecord;

    fn skip(id: u32, price_before_vat: f64, vat: f64) -> EnrichedSkip {
        enrich_skip(SkipRecord {
            id,
            size: "6".to_owned(),
            price_before_vat,
            vat,
            availability: true,
            delivery_time: "2-3 days".to_owned(),
        })
    }

    #[test]
    fn adding_same_skip_merges_into_one_line() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 2);
        cart.add(skip(1, 120.0, 24.0), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), 5);
    }

    #[test]
    fn total_items_matches_sum_of_quantities() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 1);
        cart.add(skip(2, 180.0, 36.0), 4);
        cart.update_quantity(2, 2);
        cart.add(skip(3, 240.0, 48.0), 1);
        cart.remove(3);

        let expected: u32 = cart.lines().iter().map(|line| line.quantity).sum();
        assert_eq!(cart.summary().total_items, expected);
        assert!(cart.lines().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn update_to_zero_removes_the_line() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 2);
        cart.update_quantity(1, 0);

        assert!(!cart.contains(1));
        assert_eq!(cart.quantity_of(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_sets_quantity_exactly() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 2);
        cart.update_quantity(1, 7);

        assert_eq!(cart.quantity_of(1), 7);
    }

    #[test]
    fn update_of_absent_line_is_a_noop() {
        let mut cart = CartStore::new();
        cart.update_quantity(9, 3);

        assert!(cart.is_empty());
    }

    #[test]
    fn summary_folds_prices_and_vat() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 1);
        cart.add(skip(2, 180.0, 36.0), 2);

        let summary = cart.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.subtotal, 480.0);
        assert_eq!(summary.total_vat, 96.0);
        assert_eq!(summary.grand_total, 576.0);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = CartStore::new();
        cart.add(skip(1, 120.0, 24.0), 1);
        cart.add(skip(2, 180.0, 36.0), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.summary().total_items, 0);
        assert_eq!(cart.summary().grand_total, 0.0);
    }
}
