use std::io::Write;

use bookstore_catalog::{PaperBook, Shippable};

use crate::error::ServiceError;

/// Flat shipping rate applied per kilogram.
pub const DEFAULT_SHIPPING_RATE_PER_KG: f64 = 5.0;

/// Prices and labels shipments of paper books.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingService {
    rate_per_kg: f64,
}

impl Default for ShippingService {
    fn default() -> Self {
        Self::new(DEFAULT_SHIPPING_RATE_PER_KG)
    }
}

impl ShippingService {
    pub fn new(rate_per_kg: f64) -> Self {
        Self { rate_per_kg }
    }

    pub fn rate_per_kg(&self) -> f64 {
        self.rate_per_kg
    }

    /// Weight times the per-kilogram rate. Depends on nothing but the weight.
    pub fn shipping_cost(&self, book: &PaperBook) -> f64 {
        book.weight().kg() * self.rate_per_kg
    }

    pub fn print_label<W: Write + ?Sized>(
        &self,
        out: &mut W,
        book: &PaperBook,
        recipient: &str,
        address: &str,
    ) -> Result<(), ServiceError> {
        let cost = self.shipping_cost(book);
        tracing::info!(isbn = %book.details().isbn(), recipient, cost, "printing shipping label");

        writeln!(out, "=== Shipping Label ===")?;
        writeln!(out, "Recipient: {recipient}")?;
        writeln!(out, "Address: {address}")?;
        writeln!(out, "Book Title: {}", book.details().title())?;
        writeln!(out, "Author: {}", book.details().author())?;
        writeln!(out, "Weight: {}", book.weight())?;
        writeln!(out, "Shipping Cost: ${cost:.2}")?;
        writeln!(out, "======================")?;
        Ok(())
    }
}
