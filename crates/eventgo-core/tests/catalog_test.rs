// Integration tests for the `Storefront` facade using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventgo_api::{StorefrontClient, TransportConfig};
use eventgo_core::{CoreError, EventId, PriceTag, SeatId, Storefront, TicketStatus};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Storefront) {
    let server = MockServer::start().await;
    let client = StorefrontClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, Storefront::new(client))
}

fn event_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "event_id": id,
        "title": title,
        "category": "Concerts",
        "date": "2025-06-01T20:00:00",
        "venue": "Madison Square Garden",
        "image_url": null,
        "price": 59.0,
        "is_featured": true
    })
}

fn ticket_json(id: u64, event_id: u64, price: f64, status: &str) -> serde_json::Value {
    json!({
        "ticket_id": id,
        "event_id": event_id,
        "seat_number": format!("MAD-{id}"),
        "price": price,
        "status": status
    })
}

// ── Featured events ─────────────────────────────────────────────────

#[tokio::test]
async fn featured_events_convert_to_domain() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("is_featured", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([event_json(1, "Rust Rock Night"), event_json(2, "Derby")])),
        )
        .mount(&server)
        .await;

    let events = storefront.featured_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, EventId::from(1));
    assert_eq!(events[0].title, "Rust Rock Night");
    assert_eq!(events[0].venue, "Madison Square Garden");
    assert_eq!(events[0].advertised_price, Some(59.0));
}

#[tokio::test]
async fn featured_list_failure_surfaces_as_error() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "database is down" })),
        )
        .mount(&server)
        .await;

    let result = storefront.featured_events().await;

    match result {
        Err(CoreError::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "database is down");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Catalog enrichment ──────────────────────────────────────────────

#[tokio::test]
async fn catalog_degrades_only_the_failed_branch() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("is_featured", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([event_json(1, "Rust Rock Night"), event_json(2, "Derby")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events/1/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            ticket_json(11, 1, 80.0, "AVAILABLE"),
            ticket_json(12, 1, 45.0, "AVAILABLE"),
            ticket_json(13, 1, 10.0, "SOLD"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events/2/tickets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let entries = storefront.featured_catalog().await.unwrap();

    // Entries come back in feed order, and one failed branch never
    // poisons its siblings.
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].event.id, EventId::from(1));
    assert_eq!(entries[0].price, PriceTag::Starting(45.0));
    assert_eq!(entries[0].seats.as_ref().map(Vec::len), Some(3));

    assert_eq!(entries[1].event.id, EventId::from(2));
    assert_eq!(entries[1].price, PriceTag::Unknown);
    assert!(entries[1].seats.is_none());
}

#[tokio::test]
async fn catalog_marks_sold_out_events() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("is_featured", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(1, "Hamlet")])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events/1/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            ticket_json(11, 1, 80.0, "SOLD"),
            ticket_json(12, 1, 45.0, "RESERVED"),
        ])))
        .mount(&server)
        .await;

    let entries = storefront.featured_catalog().await.unwrap();

    assert_eq!(entries[0].price, PriceTag::SoldOut);
    // The house map still renders: locked seats are kept.
    assert_eq!(entries[0].seats.as_ref().map(Vec::len), Some(2));
}

// ── Seat sources ────────────────────────────────────────────────────

#[tokio::test]
async fn tickets_as_seats_keeps_locked_seats() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/7/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            ticket_json(101, 7, 35.5, "AVAILABLE"),
            ticket_json(102, 7, 35.5, "SOLD"),
        ])))
        .mount(&server)
        .await;

    let seats = storefront.tickets_as_seats(EventId::from(7)).await.unwrap();

    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].id, SeatId::from(101));
    assert_eq!(seats[0].status, TicketStatus::Available);
    assert_eq!(seats[1].id, SeatId::from(102));
    assert_eq!(seats[1].status, TicketStatus::Sold);
}

#[tokio::test]
async fn available_seats_convert_statuses() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/7/seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 11,
                "event_id": 7,
                "seat_number": "GLO-11",
                "category": "Standard",
                "status": "AVAILABLE",
                "price": 35.5
            },
            {
                "id": 12,
                "event_id": 7,
                "seat_number": "GLO-12",
                "category": "Standard",
                "status": "RESERVED",
                "price": 35.5
            },
        ])))
        .mount(&server)
        .await;

    let seats = storefront.available_seats(EventId::from(7)).await.unwrap();

    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].seat_number, "GLO-11");
    assert_eq!(seats[1].status, TicketStatus::Reserved);
}

#[tokio::test]
async fn missing_event_maps_to_not_found() {
    let (server, storefront) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Event not found" })),
        )
        .mount(&server)
        .await;

    let result = storefront.event(EventId::from(99)).await;

    match result {
        Err(CoreError::NotFound { ref entity, ref id }) => {
            assert_eq!(entity, "event");
            assert_eq!(id, "99");
        }
        other => panic!("expected NotFound error, got: {other:?}"),
    }
}
