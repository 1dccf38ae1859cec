// ── Seat view-record ──

use serde::{Deserialize, Serialize};

use super::ids::SeatId;
use super::ticket::{Ticket, TicketStatus};

/// Per-seat record the seat map renders.
///
/// Both seat sources produce this shape: the ticket feed maps each
/// ticket onto its seat, and the availability endpoint reports seats
/// directly. Locked seats are kept so the full house map renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    pub id: SeatId,
    /// Venue-scoped label such as `MAD-17`.
    pub seat_number: String,
    pub status: TicketStatus,
    pub price: f64,
}

impl From<Ticket> for SeatView {
    fn from(t: Ticket) -> Self {
        Self {
            id: SeatId::from(t.id),
            seat_number: t.seat_number,
            status: t.status,
            price: t.price,
        }
    }
}
