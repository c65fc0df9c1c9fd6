use bookstore_inventory::InventoryEvent;

/// Customer-facing confirmation line for a sale attempt.
///
/// Non-sale events produce no notice.
pub fn sale_notice(event: &InventoryEvent) -> Option<String> {
    match event {
        InventoryEvent::BookSold(e) => Some(format!("Sold {} copy of '{}'.", e.quantity, e.title)),
        InventoryEvent::SaleRejected(e) => Some(format!("Not enough stock for ISBN: {}.", e.isbn)),
        InventoryEvent::BookAdded(_)
        | InventoryEvent::StockReplenished(_)
        | InventoryEvent::BookRemoved(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::Isbn;
    use bookstore_inventory::{BookRemoved, BookSold, RejectionReason, SaleRejected};
    use chrono::Utc;

    #[test]
    fn sold_and_rejected_sales_have_notices() {
        let sold = InventoryEvent::BookSold(BookSold {
            isbn: Isbn::new("9780262033848"),
            title: "Introduction to Algorithms".to_string(),
            quantity: 1,
            remaining: 1,
            occurred_at: Utc::now(),
        });
        assert_eq!(
            sale_notice(&sold).as_deref(),
            Some("Sold 1 copy of 'Introduction to Algorithms'.")
        );

        let rejected = InventoryEvent::SaleRejected(SaleRejected {
            isbn: Isbn::new("9780201485677"),
            requested: 2,
            reason: RejectionReason::InsufficientStock,
            occurred_at: Utc::now(),
        });
        assert_eq!(
            sale_notice(&rejected).as_deref(),
            Some("Not enough stock for ISBN: 9780201485677.")
        );
    }

    #[test]
    fn other_events_are_silent() {
        let removed = InventoryEvent::BookRemoved(BookRemoved {
            isbn: Isbn::new("1"),
            title: "Gone".to_string(),
            occurred_at: Utc::now(),
        });
        assert_eq!(sale_notice(&removed), None);
    }
}
