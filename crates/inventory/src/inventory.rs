use std::sync::Arc;

use chrono::{DateTime, Months, NaiveTime, Utc};

use bookstore_catalog::Book;
use bookstore_core::{DomainError, DomainResult, Isbn};

use crate::event::{
    BookAdded, BookRemoved, BookSold, InventoryEvent, RejectionReason, SaleRejected,
    StockReplenished,
};
use crate::stock::{StockRecord, StockSummary};

/// Result of a sale attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleOutcome {
    Sold { remaining: u32 },
    NotFound,
    InsufficientStock { available: u32, requested: u32 },
}

impl SaleOutcome {
    pub fn is_sold(self) -> bool {
        matches!(self, SaleOutcome::Sold { .. })
    }
}

/// Stock records keyed by ISBN, in insertion order.
///
/// At most one record exists per ISBN. Lookups are a linear scan; catalogs
/// handled here are small and listing order must stay stable.
#[derive(Debug, Default)]
pub struct Inventory {
    stocks: Vec<StockRecord>,
    pending: Vec<InventoryEvent>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.stocks
    }

    pub fn quantity_of(&self, isbn: &Isbn) -> Option<u32> {
        self.record(isbn).map(StockRecord::quantity)
    }

    fn record(&self, isbn: &Isbn) -> Option<&StockRecord> {
        self.stocks.iter().find(|s| s.isbn() == isbn)
    }

    fn position(&self, isbn: &Isbn) -> Option<usize> {
        self.stocks.iter().position(|s| s.isbn() == isbn)
    }

    /// Add `quantity` copies of `book`.
    ///
    /// If the ISBN is already stocked, its quantity grows and the book stored
    /// first is kept; the variant passed here is dropped. A zero quantity is
    /// rejected.
    pub fn add_book(&mut self, book: impl Into<Arc<Book>>, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let book = book.into();
        let occurred_at = Utc::now();

        match self.stocks.iter_mut().find(|s| s.isbn() == book.isbn()) {
            Some(record) => {
                record.add_stock(quantity)?;
                if !Arc::ptr_eq(record.book(), &book) && **record.book() != *book {
                    tracing::debug!(
                        isbn = %book.isbn(),
                        "ignoring differing variant for an ISBN already in stock"
                    );
                }
                tracing::debug!(isbn = %book.isbn(), added = quantity, quantity = record.quantity(), "stock replenished");
                self.pending
                    .push(InventoryEvent::StockReplenished(StockReplenished {
                        isbn: record.isbn().clone(),
                        added: quantity,
                        quantity: record.quantity(),
                        occurred_at,
                    }));
            }
            None => {
                tracing::debug!(isbn = %book.isbn(), kind = %book.kind(), quantity, "book added");
                self.pending.push(InventoryEvent::BookAdded(BookAdded {
                    isbn: book.isbn().clone(),
                    title: book.title().to_string(),
                    kind: book.kind(),
                    quantity,
                    occurred_at,
                }));
                self.stocks.push(StockRecord::new(book, quantity));
            }
        }

        Ok(())
    }

    /// Sell `quantity` copies, reporting why a sale could not go through.
    ///
    /// Unlike [`add_book`](Self::add_book), a zero quantity is accepted: it
    /// always succeeds on a stocked ISBN, leaves the stock as is and still
    /// records a [`BookSold`] event.
    pub fn sell(&mut self, isbn: &Isbn, quantity: u32) -> SaleOutcome {
        let occurred_at = Utc::now();

        let Some(record) = self.stocks.iter_mut().find(|s| s.isbn() == isbn) else {
            tracing::warn!(%isbn, requested = quantity, "Not enough stock for ISBN: {isbn}.");
            self.pending.push(InventoryEvent::SaleRejected(SaleRejected {
                isbn: isbn.clone(),
                requested: quantity,
                reason: RejectionReason::NotFound,
                occurred_at,
            }));
            return SaleOutcome::NotFound;
        };

        let available = record.quantity();
        if !record.remove_stock(quantity) {
            tracing::warn!(%isbn, requested = quantity, available, "Not enough stock for ISBN: {isbn}.");
            self.pending.push(InventoryEvent::SaleRejected(SaleRejected {
                isbn: isbn.clone(),
                requested: quantity,
                reason: RejectionReason::InsufficientStock,
                occurred_at,
            }));
            return SaleOutcome::InsufficientStock {
                available,
                requested: quantity,
            };
        }

        let remaining = record.quantity();
        let title = record.book().title().to_string();
        tracing::info!(%isbn, quantity, remaining, "Sold {quantity} copy of '{title}'.");
        self.pending.push(InventoryEvent::BookSold(BookSold {
            isbn: isbn.clone(),
            title,
            quantity,
            remaining,
            occurred_at,
        }));

        SaleOutcome::Sold { remaining }
    }

    /// Sell `quantity` copies. `false` means the ISBN is unknown *or* there is
    /// not enough stock; use [`sell`](Self::sell) to tell the two apart.
    pub fn sell_book(&mut self, isbn: &Isbn, quantity: u32) -> bool {
        self.sell(isbn, quantity).is_sold()
    }

    /// Sell a single copy.
    pub fn sell_one(&mut self, isbn: &Isbn) -> bool {
        self.sell_book(isbn, 1)
    }

    /// The stored variant for `isbn`, if stocked.
    pub fn find_book(&self, isbn: &Isbn) -> Option<Arc<Book>> {
        self.record(isbn).map(|s| Arc::clone(s.book()))
    }

    /// Delete the record for `isbn` regardless of its quantity.
    pub fn remove_book(&mut self, isbn: &Isbn) -> bool {
        let Some(idx) = self.position(isbn) else {
            return false;
        };

        let record = self.stocks.remove(idx);
        tracing::debug!(%isbn, quantity = record.quantity(), "book removed");
        self.pending.push(InventoryEvent::BookRemoved(BookRemoved {
            isbn: isbn.clone(),
            title: record.book().title().to_string(),
            occurred_at: Utc::now(),
        }));
        true
    }

    /// Remove every book published more than `max_age_years` years ago.
    pub fn remove_outdated_books(&mut self, max_age_years: u32) -> Vec<Arc<Book>> {
        self.remove_outdated_books_as_of(max_age_years, Utc::now())
    }

    /// [`remove_outdated_books`](Self::remove_outdated_books) against an
    /// explicit clock reading.
    ///
    /// Books whose publication date (midnight UTC) is strictly before
    /// [`outdated_cutoff`] are removed and returned in listing order.
    pub fn remove_outdated_books_as_of(
        &mut self,
        max_age_years: u32,
        now: DateTime<Utc>,
    ) -> Vec<Arc<Book>> {
        let Some(cutoff) = outdated_cutoff(max_age_years, now) else {
            tracing::debug!(max_age_years, "cutoff out of calendar range; nothing is outdated");
            return Vec::new();
        };

        let outdated: Vec<Arc<Book>> = self
            .stocks
            .iter()
            .filter(|s| published_at(s.book()) < cutoff)
            .map(|s| Arc::clone(s.book()))
            .collect();

        for book in &outdated {
            self.remove_book(book.isbn());
        }

        if !outdated.is_empty() {
            tracing::info!(removed = outdated.len(), max_age_years, %cutoff, "removed outdated books");
        }

        outdated
    }

    /// Listing rows in insertion order.
    pub fn list_inventory(&self) -> Vec<StockSummary> {
        self.stocks.iter().map(StockRecord::summary).collect()
    }

    /// Events recorded since the last drain.
    pub fn pending_events(&self) -> &[InventoryEvent] {
        &self.pending
    }

    /// Hand recorded events to the caller and clear the buffer.
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.pending)
    }
}

/// `now` minus `max_age_years` calendar years (Feb 29 falls back to Feb 28).
///
/// `None` if the result is outside chrono's representable range.
pub fn outdated_cutoff(max_age_years: u32, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    max_age_years
        .checked_mul(12)
        .and_then(|months| now.checked_sub_months(Months::new(months)))
}

fn published_at(book: &Book) -> DateTime<Utc> {
    book.published_on().and_time(NaiveTime::MIN).and_utc()
}
