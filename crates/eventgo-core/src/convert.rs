// ── API-to-domain type conversions ──
//
// Bridges raw `eventgo_api` response types into canonical
// `eventgo_core::model` domain types. Conversions are fallible: status
// strings form a closed set and event dates must parse. Secondary
// fields (image URLs) degrade to `None` instead of failing.

use chrono::{DateTime, NaiveDateTime, Utc};
use url::Url;

use eventgo_api::types::{EventResponse, SeatResponse, TicketResponse};

use crate::error::CoreError;
use crate::model::{Event, EventId, SeatId, SeatView, Ticket, TicketId, TicketStatus};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an ISO 8601 date-time as the events service emits it.
///
/// The service serializes naive date-times (`2025-06-01T20:00:00`);
/// offset-carrying RFC 3339 strings are accepted too.
fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse an optional URL string, silently dropping unparseable values.
fn parse_image_url(raw: Option<&str>) -> Option<Url> {
    raw.and_then(|s| Url::parse(s).ok())
}

/// Parse a wire status string into the closed `TicketStatus` set.
fn parse_status(raw: &str) -> Result<TicketStatus, CoreError> {
    raw.parse().map_err(|_| CoreError::Conversion {
        message: format!("unknown ticket status {raw:?}"),
    })
}

// ── Event ──────────────────────────────────────────────────────────

impl TryFrom<EventResponse> for Event {
    type Error = CoreError;

    fn try_from(e: EventResponse) -> Result<Self, Self::Error> {
        let date = parse_event_date(&e.date).ok_or_else(|| CoreError::Conversion {
            message: format!("event {}: unparseable date {:?}", e.event_id, e.date),
        })?;

        Ok(Event {
            id: EventId::from(e.event_id),
            title: e.title,
            category: e.category,
            date,
            venue: e.venue,
            image_url: parse_image_url(e.image_url.as_deref()),
            advertised_price: e.price,
        })
    }
}

// ── Ticket ─────────────────────────────────────────────────────────

impl TryFrom<TicketResponse> for Ticket {
    type Error = CoreError;

    fn try_from(t: TicketResponse) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: TicketId::from(t.ticket_id),
            event_id: EventId::from(t.event_id),
            seat_number: t.seat_number,
            price: t.price,
            status: parse_status(&t.status)?,
        })
    }
}

// ── Seat ───────────────────────────────────────────────────────────

impl TryFrom<SeatResponse> for SeatView {
    type Error = CoreError;

    fn try_from(s: SeatResponse) -> Result<Self, Self::Error> {
        Ok(SeatView {
            id: SeatId::from(s.id),
            seat_number: s.seat_number,
            status: parse_status(&s.status)?,
            price: s.price,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_service_date() {
        let date = parse_event_date("2025-06-01T20:00:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2025-06-01T20:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_date_with_offset() {
        let date = parse_event_date("2025-06-01T20:00:00-04:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2025-06-02T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage_date() {
        assert!(parse_event_date("next Tuesday").is_none());
    }

    #[test]
    fn event_conversion_maps_all_fields() {
        let resp = EventResponse {
            event_id: 7,
            title: "Hamlet".to_owned(),
            category: "Theater".to_owned(),
            date: "2025-09-10T19:00:00".to_owned(),
            venue: "Globe Theatre".to_owned(),
            image_url: Some("https://example.com/hamlet.jpg".to_owned()),
            price: Some(35.5),
            is_featured: true,
        };

        let event = Event::try_from(resp).unwrap();

        assert_eq!(event.id, EventId::from(7));
        assert_eq!(event.title, "Hamlet");
        assert_eq!(event.venue, "Globe Theatre");
        assert_eq!(event.advertised_price, Some(35.5));
        assert_eq!(
            event.image_url.unwrap().as_str(),
            "https://example.com/hamlet.jpg"
        );
    }

    #[test]
    fn event_conversion_drops_bad_image_url() {
        let resp = EventResponse {
            event_id: 8,
            title: "Derby".to_owned(),
            category: "Sports".to_owned(),
            date: "2025-07-15T18:30:00".to_owned(),
            venue: "Olympic Stadium".to_owned(),
            image_url: Some("not a url".to_owned()),
            price: None,
            is_featured: false,
        };

        let event = Event::try_from(resp).unwrap();
        assert!(event.image_url.is_none());
    }

    #[test]
    fn event_conversion_fails_on_bad_date() {
        let resp = EventResponse {
            event_id: 9,
            title: "Mystery".to_owned(),
            category: "Theater".to_owned(),
            date: "soon".to_owned(),
            venue: "Somewhere".to_owned(),
            image_url: None,
            price: None,
            is_featured: false,
        };

        let result = Event::try_from(resp);
        assert!(matches!(result, Err(CoreError::Conversion { .. })));
    }

    #[test]
    fn ticket_conversion_parses_status() {
        let resp = TicketResponse {
            ticket_id: 101,
            event_id: 7,
            seat_number: "GLO-1".to_owned(),
            price: 35.5,
            status: "AVAILABLE".to_owned(),
        };

        let ticket = Ticket::try_from(resp).unwrap();

        assert_eq!(ticket.id, TicketId::from(101));
        assert_eq!(ticket.event_id, EventId::from(7));
        assert_eq!(ticket.status, TicketStatus::Available);
    }

    #[test]
    fn ticket_conversion_rejects_unknown_status() {
        let resp = TicketResponse {
            ticket_id: 102,
            event_id: 7,
            seat_number: "GLO-2".to_owned(),
            price: 35.5,
            status: "CANCELLED".to_owned(),
        };

        let result = Ticket::try_from(resp);
        assert!(matches!(result, Err(CoreError::Conversion { .. })));
    }

    #[test]
    fn seat_conversion_maps_fields() {
        let resp = SeatResponse {
            id: 11,
            event_id: 7,
            seat_number: "GLO-11".to_owned(),
            category: Some("Standard".to_owned()),
            status: "RESERVED".to_owned(),
            price: 35.5,
        };

        let seat = SeatView::try_from(resp).unwrap();

        assert_eq!(seat.id, SeatId::from(11));
        assert_eq!(seat.seat_number, "GLO-11");
        assert_eq!(seat.status, TicketStatus::Reserved);
    }
}
