// ── Storefront domain model ──
//
// Canonical records the TUI consumes. Everything is an immutable
// snapshot of an API response except SeatSelection, which is per-widget
// UI state.

pub mod event;
pub mod ids;
pub mod seat;
pub mod selection;
pub mod ticket;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use eventgo_core::model::*` gives you everything.

pub use event::Event;
pub use ids::{EventId, SeatId, TicketId};
pub use seat::SeatView;
pub use selection::SeatSelection;
pub use ticket::{Ticket, TicketStatus};
