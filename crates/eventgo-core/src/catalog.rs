// ── Storefront facade ──
//
// High-level catalog services over the API client: featured event
// listing, concurrent per-event price enrichment, and the two seat
// sources the seat map draws from.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use eventgo_api::StorefrontClient;

use crate::error::CoreError;
use crate::model::{Event, EventId, SeatView, Ticket, TicketStatus};

// ── Price computation ────────────────────────────────────────────────

/// Minimum price among Available tickets.
///
/// Reserved and Sold tickets never contribute; `None` means nothing is
/// on sale (absent, not zero).
pub fn starting_price(tickets: &[Ticket]) -> Option<f64> {
    tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Available)
        .map(|t| t.price)
        .reduce(f64::min)
}

/// Computed price label state for one catalog card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceTag {
    /// Lowest Available ticket price.
    Starting(f64),
    /// Ticket data arrived but nothing is on sale.
    SoldOut,
    /// The per-event ticket fetch failed.
    Unknown,
}

impl PriceTag {
    /// Derive the tag from a ticket set.
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        match starting_price(tickets) {
            Some(price) => Self::Starting(price),
            None => Self::SoldOut,
        }
    }
}

// ── Catalog entries ──────────────────────────────────────────────────

/// One enriched catalog card.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub event: Event,
    pub price: PriceTag,
    /// Ticket-derived seats, retained so the detail view can skip a
    /// refetch. `None` when the ticket fetch failed.
    pub seats: Option<Vec<SeatView>>,
}

// ── Storefront ───────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<StorefrontClient>`; each fetch task holds
/// its own handle. Read-only end to end: reservations and payment
/// happen outside this client.
#[derive(Clone)]
pub struct Storefront {
    client: Arc<StorefrontClient>,
}

impl Storefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The API base URL this storefront talks to.
    pub fn base_url(&self) -> String {
        self.client.base_url().to_string()
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Fetch the featured events and convert to domain types.
    pub async fn featured_events(&self) -> Result<Vec<Event>, CoreError> {
        let events = self.client.list_events(true).await?;
        events.into_iter().map(Event::try_from).collect()
    }

    /// Fetch one event.
    pub async fn event(&self, event_id: EventId) -> Result<Event, CoreError> {
        let event = self.client.get_event(event_id.into()).await?;
        Event::try_from(event)
    }

    // ── Catalog enrichment ───────────────────────────────────────────

    /// Fetch the featured set, then issue one concurrent ticket fetch
    /// per event.
    ///
    /// Each branch catches its own failure: a failed ticket fetch
    /// degrades that entry to [`PriceTag::Unknown`] and the batch still
    /// completes with every sibling intact. Entries come back in feed
    /// order, not completion order.
    pub async fn featured_catalog(&self) -> Result<Vec<CatalogEntry>, CoreError> {
        let events = self.featured_events().await?;
        debug!(count = events.len(), "enriching featured events");

        let branches = events.into_iter().map(|event| async move {
            match self.tickets(event.id).await {
                Ok(tickets) => {
                    let price = PriceTag::from_tickets(&tickets);
                    let seats = tickets.into_iter().map(SeatView::from).collect();
                    CatalogEntry {
                        event,
                        price,
                        seats: Some(seats),
                    }
                }
                Err(e) => {
                    warn!(event_id = %event.id, error = %e, "ticket fetch failed; price unknown");
                    CatalogEntry {
                        event,
                        price: PriceTag::Unknown,
                        seats: None,
                    }
                }
            }
        });

        Ok(join_all(branches).await)
    }

    // ── Seat sources ─────────────────────────────────────────────────

    /// Fetch the ticket feed and map each ticket onto its seat.
    ///
    /// No status filtering: locked seats are kept so the full house
    /// map renders.
    pub async fn tickets_as_seats(&self, event_id: EventId) -> Result<Vec<SeatView>, CoreError> {
        let tickets = self.tickets(event_id).await?;
        Ok(tickets.into_iter().map(SeatView::from).collect())
    }

    /// Fetch live per-seat availability.
    pub async fn available_seats(&self, event_id: EventId) -> Result<Vec<SeatView>, CoreError> {
        let seats = self.client.list_seats(event_id.into()).await?;
        seats.into_iter().map(SeatView::try_from).collect()
    }

    async fn tickets(&self, event_id: EventId) -> Result<Vec<Ticket>, CoreError> {
        let tickets = self.client.list_tickets(event_id.into()).await?;
        tickets.into_iter().map(Ticket::try_from).collect()
    }
}
