//! Inventory domain module.
//!
//! Tracks stock levels per ISBN for the books a store carries. Everything here
//! is deterministic in-memory logic (no IO, no storage). Misses and unfillable
//! sales are reported through return values; every state change is also
//! recorded as an [`InventoryEvent`] the caller can drain and publish.

pub mod event;
pub mod inventory;
pub mod stock;

pub use event::{
    BookAdded, BookRemoved, BookSold, InventoryEvent, RejectionReason, SaleRejected,
    StockReplenished,
};
pub use inventory::{Inventory, SaleOutcome, outdated_cutoff};
pub use stock::{StockRecord, StockSummary};
