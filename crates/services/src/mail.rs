//! Book mail: e-books go out as a rendered "attachment" block.
//!
//! No mail is actually sent; the message is written to an output stream.

use std::io::Write;

use chrono::Datelike;

use bookstore_catalog::{Book, BookDetails, DemoEbook, Electronic, PaidEbook, Priceable};

use crate::error::ServiceError;

/// An electronic book that can be attached to a mail.
#[derive(Debug, Clone, Copy)]
pub enum EbookAttachment<'a> {
    Paid(&'a PaidEbook),
    Demo(&'a DemoEbook),
}

impl EbookAttachment<'_> {
    fn details(&self) -> &BookDetails {
        match self {
            EbookAttachment::Paid(b) => b.details(),
            EbookAttachment::Demo(b) => b.details(),
        }
    }
}

impl<'a> From<&'a PaidEbook> for EbookAttachment<'a> {
    fn from(value: &'a PaidEbook) -> Self {
        EbookAttachment::Paid(value)
    }
}

impl<'a> From<&'a DemoEbook> for EbookAttachment<'a> {
    fn from(value: &'a DemoEbook) -> Self {
        EbookAttachment::Demo(value)
    }
}

impl<'a> TryFrom<&'a Book> for EbookAttachment<'a> {
    type Error = ServiceError;

    fn try_from(value: &'a Book) -> Result<Self, Self::Error> {
        match value {
            Book::PaidEbook(b) => Ok(EbookAttachment::Paid(b)),
            Book::DemoEbook(b) => Ok(EbookAttachment::Demo(b)),
            Book::Paper(_) => Err(ServiceError::NotElectronic(value.isbn().clone())),
        }
    }
}

/// Descriptive text of an e-book, one `Label: value` per line.
pub fn render_attachment<'a>(book: impl Into<EbookAttachment<'a>>) -> String {
    let book = book.into();
    let details = book.details();
    let (format, trailer) = match book {
        EbookAttachment::Paid(b) => (b.file_format(), format!("Price: {}", b.price())),
        EbookAttachment::Demo(b) => (b.file_format(), format!("Note: {}", b.demo_note())),
    };

    format!(
        "Title: {}\nAuthor: {}\nPages: {}\nISBN: {}\nYear: {}\nFileType: {}\n{}",
        details.title(),
        details.author(),
        details.pages(),
        details.isbn(),
        details.published_on().year(),
        format,
        trailer,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
}

/// Writes outgoing book mail on behalf of the store.
#[derive(Debug, Clone)]
pub struct MailService {
    sender: String,
}

impl MailService {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// A message from the store's sender address.
    pub fn compose(&self, to: impl Into<String>, subject: impl Into<String>) -> MailMessage {
        MailMessage {
            from: self.sender.clone(),
            to: to.into(),
            subject: subject.into(),
        }
    }

    pub fn send<'a, W: Write + ?Sized>(
        &self,
        out: &mut W,
        message: &MailMessage,
        book: impl Into<EbookAttachment<'a>>,
    ) -> Result<(), ServiceError> {
        let book = book.into();
        tracing::info!(
            to = %message.to,
            isbn = %book.details().isbn(),
            "sending book mail"
        );

        writeln!(out, "=== Sending Email ===")?;
        writeln!(out, "From: {}", message.from)?;
        writeln!(out, "To: {}", message.to)?;
        writeln!(out, "Subject: {}", message.subject)?;
        writeln!(out, "--- Book Attached ---")?;
        writeln!(out, "{}", render_attachment(book))?;
        writeln!(out, "======================")?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_catalog::{FileFormat, PaperBook, Price, Weight};
    use chrono::NaiveDate;

    fn details(title: &str, isbn: &str, y: i32, m: u32, d: u32) -> BookDetails {
        BookDetails::new(
            title,
            "Erich Gamma et al.",
            50,
            isbn,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn demo_attachment_ends_with_note() {
        let demo = DemoEbook::new(details("Design Patterns Sample", "9780201633610", 1994, 10, 21), FileFormat::Pdf);

        assert_eq!(
            render_attachment(&demo),
            "Title: Design Patterns Sample\n\
             Author: Erich Gamma et al.\n\
             Pages: 50\n\
             ISBN: 9780201633610\n\
             Year: 1994\n\
             FileType: PDF\n\
             Note: Sample Preview"
        );
    }

    #[test]
    fn paid_attachment_ends_with_price() {
        let paid = PaidEbook::new(details("Clean Architecture", "9780134494166", 2017, 9, 20), FileFormat::Mobi, Price::new(37.95));

        let text = render_attachment(&paid);
        assert!(text.contains("FileType: MOBI\n"));
        assert!(text.ends_with("Price: $37.95"));
    }

    #[test]
    fn paper_books_cannot_be_attached() {
        let paper = Book::from(PaperBook::new(
            details("Distributed Systems", "9781543057386", 2017, 12, 15),
            Price::new(47.99),
            Weight::from_kg(1.4),
        ));

        let err = EbookAttachment::try_from(&paper).unwrap_err();
        assert!(matches!(err, ServiceError::NotElectronic(isbn) if isbn.as_str() == "9781543057386"));
    }

    #[test]
    fn send_writes_envelope_and_attachment() {
        let service = MailService::new("store@gmail.com");
        let message = service.compose("markmagdy@gmail.com", "Free sample - Design Patterns");
        let demo = DemoEbook::new(details("Design Patterns Sample", "9780201633610", 1994, 10, 21), FileFormat::Pdf);

        let mut out = Vec::new();
        service.send(&mut out, &message, &demo).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== Sending Email ===");
        assert_eq!(lines[1], "From: store@gmail.com");
        assert_eq!(lines[2], "To: markmagdy@gmail.com");
        assert_eq!(lines[3], "Subject: Free sample - Design Patterns");
        assert_eq!(lines[4], "--- Book Attached ---");
        assert_eq!(lines[5], "Title: Design Patterns Sample");
        assert_eq!(lines[11], "Note: Sample Preview");
        assert_eq!(lines[12], "======================");
        assert!(text.ends_with("======================\n\n"));
    }

    #[test]
    fn stored_books_convert_through_try_from() {
        let book = Book::from(DemoEbook::with_note(
            details("Preview", "1", 2020, 1, 1),
            FileFormat::Epub,
            "Chapter 1 only",
        ));

        let attachment = EbookAttachment::try_from(&book).unwrap();
        assert!(render_attachment(attachment).ends_with("Note: Chapter 1 only"));
    }
}
