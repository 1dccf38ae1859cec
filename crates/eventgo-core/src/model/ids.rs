// ── Core identity types ──
//
// The events service keys everything by integer ids. Each entity gets
// its own newtype so an event id can never slip into a seat slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ── EventId ─────────────────────────────────────────────────────────

/// Identifier of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

// ── TicketId ────────────────────────────────────────────────────────

/// Identifier of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<TicketId> for u64 {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

// ── SeatId ──────────────────────────────────────────────────────────

/// Identifier of a seat on the house map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(u64);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeatId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for SeatId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<SeatId> for u64 {
    fn from(id: SeatId) -> Self {
        id.0
    }
}

/// The ticket feed keys seats by ticket id.
impl From<TicketId> for SeatId {
    fn from(id: TicketId) -> Self {
        Self(id.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn event_id_display_round_trip() {
        let id = EventId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<EventId>().unwrap(), id);
    }

    #[test]
    fn seat_id_from_str_rejects_garbage() {
        assert!("not-a-number".parse::<SeatId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = SeatId::from(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: SeatId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn seat_id_from_ticket_id_keeps_value() {
        let ticket = TicketId::from(101);
        assert_eq!(SeatId::from(ticket), SeatId::from(101));
    }
}
