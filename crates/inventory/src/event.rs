use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookstore_catalog::BookKind;
use bookstore_core::Isbn;
use bookstore_events::Event;

/// Event: BookAdded (first stock record for an ISBN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub isbn: Isbn,
    pub title: String,
    pub kind: BookKind,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockReplenished (more copies of an ISBN already on record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReplenished {
    pub isbn: Isbn,
    pub added: u32,
    /// Quantity after the replenishment.
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookSold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSold {
    pub isbn: Isbn,
    pub title: String,
    pub quantity: u32,
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    NotFound,
    InsufficientStock,
}

/// Event: SaleRejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRejected {
    pub isbn: Isbn,
    pub requested: u32,
    pub reason: RejectionReason,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookRemoved (record deleted, whatever its quantity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRemoved {
    pub isbn: Isbn,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    BookAdded(BookAdded),
    StockReplenished(StockReplenished),
    BookSold(BookSold),
    SaleRejected(SaleRejected),
    BookRemoved(BookRemoved),
}

impl InventoryEvent {
    pub fn isbn(&self) -> &Isbn {
        match self {
            InventoryEvent::BookAdded(e) => &e.isbn,
            InventoryEvent::StockReplenished(e) => &e.isbn,
            InventoryEvent::BookSold(e) => &e.isbn,
            InventoryEvent::SaleRejected(e) => &e.isbn,
            InventoryEvent::BookRemoved(e) => &e.isbn,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::BookAdded(_) => "inventory.book.added",
            InventoryEvent::StockReplenished(_) => "inventory.book.stock_replenished",
            InventoryEvent::BookSold(_) => "inventory.book.sold",
            InventoryEvent::SaleRejected(_) => "inventory.book.sale_rejected",
            InventoryEvent::BookRemoved(_) => "inventory.book.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::BookAdded(e) => e.occurred_at,
            InventoryEvent::StockReplenished(e) => e.occurred_at,
            InventoryEvent::BookSold(e) => e.occurred_at,
            InventoryEvent::SaleRejected(e) => e.occurred_at,
            InventoryEvent::BookRemoved(e) => e.occurred_at,
        }
    }
}
