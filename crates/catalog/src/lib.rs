//! Catalog domain module: the book variants a store can stock.
//!
//! Variants share [`BookDetails`] and opt into orthogonal capabilities
//! ([`Priceable`], [`Shippable`], [`Electronic`]). [`Book`] is the closed sum
//! type the inventory stores, so every `match` over variants is exhaustive.

pub mod book;
pub mod capability;

pub use book::{Book, BookDetails, BookKind, DemoEbook, PaidEbook, PaperBook, DEFAULT_DEMO_NOTE};
pub use capability::{Electronic, FileFormat, Price, Priceable, Shippable, Weight};
