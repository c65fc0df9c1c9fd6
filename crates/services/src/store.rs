//! Bookstore facade: inventory operations followed by event publication.
//!
//! Each mutating call runs against the [`Inventory`], then drains the events
//! it recorded and publishes them, in order, on the bus. The inventory change
//! is applied before anything is published, so a bus failure never hides its
//! outcome: every call returns an [`Applied`] carrying both.

use std::sync::Arc;

use bookstore_catalog::Book;
use bookstore_core::Isbn;
use bookstore_events::{Event, EventBus, Subscription};
use bookstore_inventory::{Inventory, InventoryEvent, SaleOutcome, StockSummary};

use crate::error::ServiceError;

/// An inventory change that has taken effect, and whether its events reached
/// the bus.
///
/// `published` failing does not undo `outcome`; retrying the operation would
/// apply it a second time.
#[must_use]
#[derive(Debug)]
pub struct Applied<T> {
    pub outcome: T,
    pub published: Result<(), ServiceError>,
}

impl<T> Applied<T> {
    pub fn is_published(&self) -> bool {
        self.published.is_ok()
    }
}

#[derive(Debug)]
pub struct Bookstore<B> {
    inventory: Inventory,
    bus: B,
}

impl<B> Bookstore<B>
where
    B: EventBus<InventoryEvent>,
{
    pub fn new(bus: B) -> Self {
        Self::with_inventory(Inventory::new(), bus)
    }

    /// Wrap an existing inventory. Events it already holds are published on
    /// the next mutating call.
    pub fn with_inventory(inventory: Inventory, bus: B) -> Self {
        Self { inventory, bus }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    /// Rejected additions change nothing and publish nothing.
    pub fn add_book(
        &mut self,
        book: impl Into<Arc<Book>>,
        quantity: u32,
    ) -> Result<Applied<()>, ServiceError> {
        self.inventory.add_book(book, quantity)?;
        Ok(self.publish_pending(()))
    }

    pub fn sell_book(&mut self, isbn: &Isbn, quantity: u32) -> Applied<SaleOutcome> {
        let outcome = self.inventory.sell(isbn, quantity);
        self.publish_pending(outcome)
    }

    pub fn find_book(&self, isbn: &Isbn) -> Option<Arc<Book>> {
        self.inventory.find_book(isbn)
    }

    pub fn remove_book(&mut self, isbn: &Isbn) -> Applied<bool> {
        let removed = self.inventory.remove_book(isbn);
        self.publish_pending(removed)
    }

    pub fn remove_outdated_books(&mut self, max_age_years: u32) -> Applied<Vec<Arc<Book>>> {
        let removed = self.inventory.remove_outdated_books(max_age_years);
        self.publish_pending(removed)
    }

    pub fn list_inventory(&self) -> Vec<StockSummary> {
        self.inventory.list_inventory()
    }

    fn publish_pending<T>(&mut self, outcome: T) -> Applied<T> {
        let published = self.inventory.drain_events().into_iter().try_for_each(|event| {
            let event_type = event.event_type();
            self.bus.publish(event).map_err(|e| {
                tracing::error!(event_type, "failed to publish inventory event: {e}");
                ServiceError::Publish(e.to_string())
            })
        });
        Applied { outcome, published }
    }
}
