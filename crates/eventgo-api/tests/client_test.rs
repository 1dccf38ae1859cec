// Integration tests for `StorefrontClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventgo_api::{Error, StorefrontClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, StorefrontClient) {
    let server = MockServer::start().await;
    let client = StorefrontClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_featured_events() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "event_id": 1,
            "title": "Rust Rock Night",
            "category": "Concerts",
            "date": "2025-06-01T20:00:00",
            "venue": "Madison Square Garden",
            "image_url": "https://example.com/rust-rock.jpg",
            "price": 59.0,
            "is_featured": true
        },
        {
            "event_id": 2,
            "title": "City Derby",
            "category": "Sports",
            "date": "2025-07-15T18:30:00",
            "venue": "Olympic Stadium",
            "image_url": null,
            "price": null,
            "is_featured": true
        },
    ]);

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("is_featured", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let events = client.list_events(true).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, 1);
    assert_eq!(events[0].title, "Rust Rock Night");
    assert_eq!(events[0].venue, "Madison Square Garden");
    assert_eq!(events[0].price, Some(59.0));
    assert_eq!(events[1].event_id, 2);
    assert_eq!(events[1].price, None);
    assert!(events[1].image_url.is_none());
}

#[tokio::test]
async fn test_list_events_omits_featured_flag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param_is_missing("is_featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let events = client.list_events(false).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_get_event() {
    let (server, client) = setup().await;

    let body = json!({
        "event_id": 7,
        "title": "Hamlet",
        "category": "Theater",
        "date": "2025-09-10T19:00:00",
        "venue": "Globe Theatre",
        "image_url": "https://example.com/hamlet.jpg",
        "price": 35.5,
        "is_featured": false,
        "seats": []
    });

    Mock::given(method("GET"))
        .and(path("/events/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let event = client.get_event(7).await.unwrap();

    assert_eq!(event.event_id, 7);
    assert_eq!(event.title, "Hamlet");
    assert_eq!(event.category, "Theater");
    assert!(!event.is_featured);
}

#[tokio::test]
async fn test_get_event_legacy_field_names() {
    let (server, client) = setup().await;

    // Older feed views send `id` and `location` instead of
    // `event_id` and `venue`.
    let body = json!({
        "id": 3,
        "title": "Jazz Evening",
        "category": "Concerts",
        "date": "2025-05-20T21:00:00",
        "location": "Blue Note",
        "image_url": null,
        "price": 42.0
    });

    Mock::given(method("GET"))
        .and(path("/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let event = client.get_event(3).await.unwrap();

    assert_eq!(event.event_id, 3);
    assert_eq!(event.venue, "Blue Note");
    assert!(!event.is_featured);
}

#[tokio::test]
async fn test_list_tickets() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "ticket_id": 101,
            "event_id": 7,
            "seat_number": "GLO-1",
            "price": 35.5,
            "status": "AVAILABLE"
        },
        {
            "ticket_id": 102,
            "event_id": 7,
            "seat_number": "GLO-2",
            "price": 35.5,
            "status": "SOLD"
        },
    ]);

    Mock::given(method("GET"))
        .and(path("/events/7/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let tickets = client.list_tickets(7).await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].ticket_id, 101);
    assert_eq!(tickets[0].seat_number, "GLO-1");
    assert_eq!(tickets[0].status, "AVAILABLE");
    assert_eq!(tickets[1].status, "SOLD");
}

#[tokio::test]
async fn test_list_seats() {
    let (server, client) = setup().await;

    let body = json!([
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
    ]);

    Mock::given(method("GET"))
        .and(path("/events/7/seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let seats = client.list_seats(7).await.unwrap();

    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].id, 11);
    assert_eq!(seats[0].seat_number, "GLO-11");
    assert_eq!(seats[0].status, "AVAILABLE");
    assert_eq!(seats[1].status, "RESERVED");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Event not found" })),
        )
        .mount(&server)
        .await;

    let result = client.get_event(99).await;

    match result {
        Err(Error::NotFound { resource, id }) => {
            assert_eq!(resource, "event");
            assert_eq!(id, 99);
        }
        other => panic!("expected NotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_extracts_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/7/seats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Error retrieving seats: connection refused"
        })))
        .mount(&server)
        .await;

    let result = client.list_seats(7).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error retrieving seats: connection refused");
        }
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_422_validation_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{
                "loc": ["query", "is_featured"],
                "msg": "value could not be parsed to a boolean",
                "type": "type_error.bool"
            }]
        })))
        .mount(&server)
        .await;

    let result = client.list_events(true).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 422);
            assert!(
                message.contains("could not be parsed"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Api 422 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_plain_text_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = client.list_events(true).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Api 502 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_carries_preview() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.get_event(7).await;

    match result {
        Err(Error::Deserialization {
            ref message,
            ref body,
        }) => {
            assert!(
                message.contains("body preview"),
                "unexpected message: {message}"
            );
            assert_eq!(body, "<html>not json</html>");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
