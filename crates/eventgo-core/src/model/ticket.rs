// ── Ticket domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::{EventId, TicketId};

/// Lifecycle status of a ticket, and therefore of the seat it covers.
///
/// A closed set: the service emits exactly these SCREAMING_SNAKE
/// strings, and anything else is a deserialization error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Available,
    Reserved,
    Sold,
}

impl TicketStatus {
    /// Reserved and Sold seats are shown but never selectable.
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Reserved | Self::Sold)
    }
}

/// A purchasable ticket covering one seat at one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub event_id: EventId,
    /// Venue-scoped seat label such as `MAD-17`.
    pub seat_number: String,
    pub price: f64,
    pub status: TicketStatus,
}
