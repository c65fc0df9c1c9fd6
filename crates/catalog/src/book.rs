use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bookstore_core::{Entity, Isbn, ValueObject};

use crate::capability::{Electronic, FileFormat, Price, Priceable, Shippable, Weight};

/// Note attached to demo e-books when none is given.
pub const DEFAULT_DEMO_NOTE: &str = "Sample Preview";

/// Attributes every book variant carries.
///
/// Immutable after construction: fields are private and only exposed through
/// getters. Values are taken as given (no range checks on page counts etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    title: String,
    author: String,
    pages: u32,
    isbn: Isbn,
    published_on: NaiveDate,
}

impl BookDetails {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        isbn: impl Into<Isbn>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            isbn: isbn.into(),
            published_on,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }
}

impl ValueObject for BookDetails {}

/// Printed book: priced and shippable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperBook {
    details: BookDetails,
    price: Price,
    weight: Weight,
}

impl PaperBook {
    pub fn new(details: BookDetails, price: Price, weight: Weight) -> Self {
        Self {
            details,
            price,
            weight,
        }
    }

    pub fn details(&self) -> &BookDetails {
        &self.details
    }
}

impl Priceable for PaperBook {
    fn price(&self) -> Price {
        self.price
    }
}

impl Shippable for PaperBook {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// Electronic book sold for a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidEbook {
    details: BookDetails,
    format: FileFormat,
    price: Price,
}

impl PaidEbook {
    pub fn new(details: BookDetails, format: FileFormat, price: Price) -> Self {
        Self {
            details,
            format,
            price,
        }
    }

    pub fn details(&self) -> &BookDetails {
        &self.details
    }
}

impl Priceable for PaidEbook {
    fn price(&self) -> Price {
        self.price
    }
}

impl Electronic for PaidEbook {
    fn file_format(&self) -> FileFormat {
        self.format
    }
}

/// Free electronic preview. Not priceable, so it can be distributed but never
/// carries a sale price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEbook {
    details: BookDetails,
    format: FileFormat,
    demo_note: String,
}

impl DemoEbook {
    /// Demo e-book with the default note ([`DEFAULT_DEMO_NOTE`]).
    pub fn new(details: BookDetails, format: FileFormat) -> Self {
        Self::with_note(details, format, DEFAULT_DEMO_NOTE)
    }

    pub fn with_note(details: BookDetails, format: FileFormat, demo_note: impl Into<String>) -> Self {
        Self {
            details,
            format,
            demo_note: demo_note.into(),
        }
    }

    pub fn details(&self) -> &BookDetails {
        &self.details
    }

    pub fn demo_note(&self) -> &str {
        &self.demo_note
    }
}

impl Electronic for DemoEbook {
    fn file_format(&self) -> FileFormat {
        self.format
    }
}

macro_rules! impl_book_entity {
    ($t:ty) => {
        impl Entity for $t {
            type Id = Isbn;

            fn id(&self) -> &Isbn {
                self.details.isbn()
            }
        }
    };
}

impl_book_entity!(PaperBook);
impl_book_entity!(PaidEbook);
impl_book_entity!(DemoEbook);

/// Variant tag of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookKind {
    Paper,
    PaidEbook,
    DemoEbook,
}

impl BookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BookKind::Paper => "PaperBook",
            BookKind::PaidEbook => "PayedElectronicBook",
            BookKind::DemoEbook => "DemoElectronicBook",
        }
    }
}

impl core::fmt::Display for BookKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any book the store can stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Book {
    Paper(PaperBook),
    PaidEbook(PaidEbook),
    DemoEbook(DemoEbook),
}

impl Book {
    pub fn kind(&self) -> BookKind {
        match self {
            Book::Paper(_) => BookKind::Paper,
            Book::PaidEbook(_) => BookKind::PaidEbook,
            Book::DemoEbook(_) => BookKind::DemoEbook,
        }
    }

    pub fn details(&self) -> &BookDetails {
        match self {
            Book::Paper(b) => b.details(),
            Book::PaidEbook(b) => b.details(),
            Book::DemoEbook(b) => b.details(),
        }
    }

    pub fn title(&self) -> &str {
        self.details().title()
    }

    pub fn author(&self) -> &str {
        self.details().author()
    }

    pub fn pages(&self) -> u32 {
        self.details().pages()
    }

    pub fn isbn(&self) -> &Isbn {
        self.details().isbn()
    }

    pub fn published_on(&self) -> NaiveDate {
        self.details().published_on()
    }

    /// Sale price, if the variant is priceable.
    pub fn price(&self) -> Option<Price> {
        match self {
            Book::Paper(b) => Some(b.price()),
            Book::PaidEbook(b) => Some(b.price()),
            Book::DemoEbook(_) => None,
        }
    }

    /// Shipping weight, if the variant is shippable.
    pub fn weight(&self) -> Option<Weight> {
        match self {
            Book::Paper(b) => Some(b.weight()),
            Book::PaidEbook(_) | Book::DemoEbook(_) => None,
        }
    }

    /// File format, if the variant is electronic.
    pub fn file_format(&self) -> Option<FileFormat> {
        match self {
            Book::Paper(_) => None,
            Book::PaidEbook(b) => Some(b.file_format()),
            Book::DemoEbook(b) => Some(b.file_format()),
        }
    }

    pub fn as_paper(&self) -> Option<&PaperBook> {
        match self {
            Book::Paper(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_paid_ebook(&self) -> Option<&PaidEbook> {
        match self {
            Book::PaidEbook(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_demo_ebook(&self) -> Option<&DemoEbook> {
        match self {
            Book::DemoEbook(b) => Some(b),
            _ => None,
        }
    }

    /// Either e-book variant, seen through its [`Electronic`] capability.
    pub fn as_electronic(&self) -> Option<&dyn Electronic> {
        match self {
            Book::Paper(_) => None,
            Book::PaidEbook(b) => Some(b),
            Book::DemoEbook(b) => Some(b),
        }
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Isbn {
        self.isbn()
    }
}

impl From<PaperBook> for Book {
    fn from(value: PaperBook) -> Self {
        Book::Paper(value)
    }
}

impl From<PaidEbook> for Book {
    fn from(value: PaidEbook) -> Self {
        Book::PaidEbook(value)
    }
}

impl From<DemoEbook> for Book {
    fn from(value: DemoEbook) -> Self {
        Book::DemoEbook(value)
    }
}
