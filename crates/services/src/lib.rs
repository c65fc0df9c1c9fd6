//! Collaborators around the inventory core.
//!
//! Nothing in here is called by the inventory itself. Callers run a core
//! operation, look at the result, and then use these services to render mail,
//! print shipping labels or fan out inventory events.

pub mod config;
pub mod error;
pub mod mail;
pub mod notice;
pub mod shipping;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::ServiceError;
pub use mail::{EbookAttachment, MailMessage, MailService, render_attachment};
pub use notice::sale_notice;
pub use shipping::{DEFAULT_SHIPPING_RATE_PER_KG, ShippingService};
pub use store::{Applied, Bookstore};
