use std::sync::Arc;

use serde::Serialize;

use bookstore_catalog::{Book, BookKind};
use bookstore_core::{DomainError, DomainResult, Isbn};

/// One book and how many copies of it are on hand.
///
/// The book is shared, not copied: callers holding the same `Arc<Book>` see
/// the exact variant the inventory stores. The quantity is private and only
/// moves through [`add_stock`](Self::add_stock) and
/// [`remove_stock`](Self::remove_stock).
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    book: Arc<Book>,
    quantity: u32,
}

impl StockRecord {
    pub fn new(book: Arc<Book>, quantity: u32) -> Self {
        Self { book, quantity }
    }

    pub fn book(&self) -> &Arc<Book> {
        &self.book
    }

    pub fn isbn(&self) -> &Isbn {
        self.book.isbn()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add copies. Fails without touching the quantity if the count would
    /// overflow.
    pub fn add_stock(&mut self, amount: u32) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invariant("stock overflow"))?;
        Ok(())
    }

    /// Take copies out of stock.
    ///
    /// Returns `false` and leaves the quantity unchanged when fewer than
    /// `amount` copies are on hand.
    pub fn remove_stock(&mut self, amount: u32) -> bool {
        match self.quantity.checked_sub(amount) {
            Some(rest) => {
                self.quantity = rest;
                true
            }
            None => false,
        }
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary {
            isbn: self.isbn().clone(),
            title: self.book.title().to_string(),
            author: self.book.author().to_string(),
            kind: self.book.kind(),
            quantity: self.quantity,
        }
    }
}

/// Read-only listing row for one stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub kind: BookKind,
    pub quantity: u32,
}

impl core::fmt::Display for StockSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} by {} ({}) - Stock: {}",
            self.title, self.author, self.kind, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_catalog::{BookDetails, FileFormat, PaidEbook, Price};
    use chrono::NaiveDate;

    fn record(quantity: u32) -> StockRecord {
        let book = Book::from(PaidEbook::new(
            BookDetails::new(
                "Introduction to Algorithms",
                "Thomas H. Cormen",
                1312,
                "9780262033848",
                NaiveDate::from_ymd_opt(2009, 7, 31).unwrap(),
            ),
            FileFormat::Epub,
            Price::new(49.99),
        ));
        StockRecord::new(Arc::new(book), quantity)
    }

    #[test]
    fn add_stock_accumulates() {
        let mut stock = record(2);
        stock.add_stock(3).unwrap();
        stock.add_stock(0).unwrap();
        assert_eq!(stock.quantity(), 5);
    }

    #[test]
    fn add_stock_overflow_fails_and_keeps_quantity() {
        let mut stock = record(u32::MAX - 1);
        let err = stock.add_stock(2).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("stock overflow") => {}
            _ => panic!("Expected InvariantViolation for overflowing stock"),
        }
        assert_eq!(stock.quantity(), u32::MAX - 1);
    }

    #[test]
    fn remove_stock_succeeds_down_to_zero() {
        let mut stock = record(2);
        assert!(stock.remove_stock(1));
        assert!(stock.remove_stock(1));
        assert_eq!(stock.quantity(), 0);
    }

    #[test]
    fn remove_stock_rejects_overdraw_without_change() {
        let mut stock = record(1);
        assert!(!stock.remove_stock(2));
        assert_eq!(stock.quantity(), 1);
    }

    #[test]
    fn summary_renders_listing_line() {
        let line = record(2).summary().to_string();
        assert_eq!(
            line,
            "Introduction to Algorithms by Thomas H. Cormen (PayedElectronicBook) - Stock: 2"
        );
    }

    #[test]
    fn summary_serializes_for_structured_output() {
        let value = serde_json::to_value(record(4).summary()).unwrap();
        assert_eq!(value["isbn"], "9780262033848");
        assert_eq!(value["kind"], "paid_ebook");
        assert_eq!(value["quantity"], 4);
    }
}
