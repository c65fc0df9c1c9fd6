use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are facts about something that already happened (a book was added,
/// a sale went through). They are immutable and versioned.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.book.sold").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
