//! Response types for the EventGo events service.
//!
//! All types match the JSON bodies the service returns. Field names are
//! snake_case on the wire; older feed views use `id`/`location` instead of
//! `event_id`/`venue`, so those fields carry serde aliases. Unknown extra
//! fields (e.g. the embedded `seats` array on event detail) are ignored.

use serde::{Deserialize, Serialize};

// ── Events ───────────────────────────────────────────────────────────

/// Event record from `GET /events` and `GET /events/{event_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(alias = "id")]
    pub event_id: u64,
    pub title: String,
    pub category: String,
    /// ISO 8601 date-time.
    pub date: String,
    #[serde(alias = "location")]
    pub venue: String,
    pub image_url: Option<String>,
    /// Advertised starting price, when the feed carries one. A hint only;
    /// the authoritative figure comes from live ticket data.
    pub price: Option<f64>,
    #[serde(default)]
    pub is_featured: bool,
}

// ── Tickets ──────────────────────────────────────────────────────────

/// Ticket record from `GET /events/{event_id}/tickets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub ticket_id: u64,
    pub event_id: u64,
    /// Venue-scoped seat label such as `MAD-17`.
    pub seat_number: String,
    pub price: f64,
    /// One of: `AVAILABLE`, `RESERVED`, `SOLD`.
    pub status: String,
}

// ── Seats ────────────────────────────────────────────────────────────

/// Seat record with live status from `GET /events/{event_id}/seats`.
///
/// Seats without a ticket report status `AVAILABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatResponse {
    pub id: u64,
    pub event_id: u64,
    pub seat_number: String,
    #[serde(default)]
    pub category: Option<String>,
    /// One of: `AVAILABLE`, `RESERVED`, `SOLD`.
    pub status: String,
    pub price: f64,
}
