// eventgo-core: Domain model and catalog services between eventgo-api and the TUI.

pub mod catalog;
pub mod convert;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{CatalogEntry, PriceTag, Storefront, starting_price};
pub use error::CoreError;

// Re-export model types at the crate root for ergonomics.
pub use model::{Event, EventId, SeatId, SeatSelection, SeatView, Ticket, TicketId, TicketStatus};
