//! Demonstration scenarios for the bookstore inventory.
//!
//! Every scenario starts from an empty store, runs a few operations and
//! writes what happened to `out`. Sale confirmations are not printed by the
//! inventory: they come from a bus subscription, drained after each step.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};

use bookstore_catalog::{Book, BookDetails, DemoEbook, FileFormat, PaidEbook, PaperBook, Price, Weight};
use bookstore_core::Isbn;
use bookstore_events::{InMemoryEventBus, Subscription};
use bookstore_inventory::InventoryEvent;
use bookstore_services::{Bookstore, MailService, ShippingService, StoreConfig, sale_notice};

type DemoStore = Bookstore<Arc<InMemoryEventBus<InventoryEvent>>>;

type Scenario = fn(&mut dyn Write, &StoreConfig) -> anyhow::Result<()>;

pub const SCENARIOS: &[(&str, Scenario)] = &[
    ("AddBookTest", add_book),
    ("SellBookTest", sell_book),
    ("SellBookInsufficientStockTest", sell_book_insufficient_stock),
    ("RemoveBookTest", remove_book),
    ("RemoveNonexistentBookTest", remove_nonexistent_book),
    ("RemoveOutdatedBooksTest", remove_outdated_books),
    ("FindBookTest", find_book),
    ("SendEBookMailTest", send_ebook_mail),
    ("ShippingLabelTest", shipping_label),
    ("AddMixOfBooksTest", add_mix_of_books),
];

const DIVIDER_WIDTH: usize = 50;

/// Run every scenario in order, each followed by a divider line.
pub fn run_all(out: &mut dyn Write, config: &StoreConfig) -> anyhow::Result<()> {
    for (name, scenario) in SCENARIOS {
        tracing::debug!(scenario = name, "running scenario");
        writeln!(out, "{name}:")?;
        scenario(&mut *out, config).with_context(|| format!("scenario {name} failed"))?;
        writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH))?;
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month:02}-{day:02}"))
}

fn new_store() -> (DemoStore, Subscription<InventoryEvent>) {
    let store = Bookstore::new(Arc::new(InMemoryEventBus::new()));
    let notices = store.subscribe();
    (store, notices)
}

fn print_notices(out: &mut dyn Write, notices: &Subscription<InventoryEvent>) -> anyhow::Result<()> {
    for line in notices.drain().iter().filter_map(sale_notice) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_inventory(out: &mut dyn Write, store: &DemoStore) -> anyhow::Result<()> {
    writeln!(out, "=== Inventory List ===")?;
    for summary in store.list_inventory() {
        writeln!(out, "{summary}")?;
    }
    writeln!(out, "======================")?;
    writeln!(out)?;
    Ok(())
}

fn add_book(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();
    let book = PaperBook::new(
        BookDetails::new(
            "The Pragmatic Programmer",
            "Andrew Hunt & David Thomas",
            352,
            "9780135957059",
            date(2019, 9, 13)?,
        ),
        Price::new(39.99),
        Weight::from_kg(0.9),
    );
    store.add_book(Book::from(book), 3)?.published?;
    print_inventory(out, &store)
}

fn sell_book(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, notices) = new_store();
    let ebook = PaidEbook::new(
        BookDetails::new(
            "Introduction to Algorithms",
            "Thomas H. Cormen",
            1312,
            "9780262033848",
            date(2009, 7, 31)?,
        ),
        FileFormat::Epub,
        Price::new(49.99),
    );
    store.add_book(Book::from(ebook), 2)?.published?;
    store.sell_book(&Isbn::new("9780262033848"), 1).published?;
    print_notices(out, &notices)?;
    print_inventory(out, &store)
}

fn sell_book_insufficient_stock(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, notices) = new_store();
    let book = PaperBook::new(
        BookDetails::new("Refactoring", "Martin Fowler", 448, "9780201485677", date(1999, 7, 8)?),
        Price::new(44.99),
        Weight::from_kg(1.1),
    );
    store.add_book(Book::from(book), 1)?.published?;
    store.sell_book(&Isbn::new("9780201485677"), 2).published?;
    print_notices(out, &notices)?;
    print_inventory(out, &store)
}

fn remove_book(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();
    let book = PaperBook::new(
        BookDetails::new("Code Complete", "Steve McConnell", 960, "9780735619678", date(2004, 6, 9)?),
        Price::new(54.99),
        Weight::from_kg(1.5),
    );
    store.add_book(Book::from(book), 1)?.published?;
    store.remove_book(&Isbn::new("9780735619678")).published?;
    print_inventory(out, &store)
}

fn remove_nonexistent_book(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();
    let removed = store.remove_book(&Isbn::new("9780000000000"));
    removed.published?;
    if removed.outcome {
        writeln!(out, "Error: Should not remove nonexistent book")?;
    } else {
        writeln!(out, "Correct: Book not found")?;
    }
    Ok(())
}

fn remove_outdated_books(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();
    let old_book = PaperBook::new(
        BookDetails::new("Structured Programming", "Dijkstra", 210, "9780138544713", date(1980, 1, 1)?),
        Price::new(18.50),
        Weight::from_kg(0.6),
    );
    let new_book = PaperBook::new(
        BookDetails::new(
            "Modern Software Engineering",
            "David Farley",
            320,
            "9780137314911",
            date(2022, 5, 10)?,
        ),
        Price::new(34.50),
        Weight::from_kg(0.8),
    );
    store.add_book(Book::from(old_book), 2)?.published?;
    store.add_book(Book::from(new_book), 2)?.published?;

    let pruned = store.remove_outdated_books(10);
    pruned.published?;
    for book in pruned.outcome {
        writeln!(out, "Removed: {} ({})", book.title(), book.published_on().year())?;
    }
    print_inventory(out, &store)
}

fn find_book(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();
    let book = PaidEbook::new(
        BookDetails::new("Clean Architecture", "Robert C. Martin", 432, "9780134494166", date(2017, 9, 20)?),
        FileFormat::Mobi,
        Price::new(37.95),
    );
    store.add_book(Book::from(book), 1)?.published?;

    match store.find_book(&Isbn::new("9780134494166")) {
        Some(found) => writeln!(out, "Found: {}", found.title())?,
        None => writeln!(out, "Book not found")?,
    }
    Ok(())
}

fn send_ebook_mail(out: &mut dyn Write, config: &StoreConfig) -> anyhow::Result<()> {
    let demo = DemoEbook::new(
        BookDetails::new(
            "Design Patterns Sample",
            "Erich Gamma et al.",
            50,
            "9780201633610",
            date(1994, 10, 21)?,
        ),
        FileFormat::Pdf,
    );
    let mail = MailService::new(config.store_email.clone());
    let message = mail.compose("markmagdy@gmail.com", "Free sample - Design Patterns");
    mail.send(out, &message, &demo)?;
    Ok(())
}

fn shipping_label(out: &mut dyn Write, config: &StoreConfig) -> anyhow::Result<()> {
    let book = PaperBook::new(
        BookDetails::new(
            "Distributed Systems",
            "Maarten van Steen",
            500,
            "9781543057386",
            date(2017, 12, 15)?,
        ),
        Price::new(47.99),
        Weight::from_kg(1.4),
    );
    ShippingService::new(config.shipping_rate_per_kg).print_label(
        out,
        &book,
        "Mark Magdy",
        "123 Nile St, Cairo, Egypt",
    )?;
    Ok(())
}

fn add_mix_of_books(out: &mut dyn Write, _config: &StoreConfig) -> anyhow::Result<()> {
    let (mut store, _notices) = new_store();

    let paper = PaperBook::new(
        BookDetails::new("Effective Java", "Joshua Bloch", 416, "9780134685991", date(2018, 1, 6)?),
        Price::new(45.99),
        Weight::from_kg(1.0),
    );
    let ebook = PaidEbook::new(
        BookDetails::new("Learning SQL", "Alan Beaulieu", 408, "9781492057611", date(2020, 3, 10)?),
        FileFormat::Epub,
        Price::new(29.99),
    );
    let demo = DemoEbook::new(
        BookDetails::new(
            "Agile Principles Preview",
            "Robert C. Martin",
            70,
            "9780135974445",
            date(2021, 7, 14)?,
        ),
        FileFormat::Mobi,
    );

    store.add_book(Book::from(paper), 2)?.published?;
    store.add_book(Book::from(ebook), 5)?.published?;
    store.add_book(Book::from(demo), 100)?.published?;

    print_inventory(out, &store)
}
