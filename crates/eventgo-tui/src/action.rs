//! All possible UI actions. Actions are the sole mechanism for state mutation.

use eventgo_core::{CatalogEntry, Event, EventId, SeatView};

use crate::screen::ScreenId;

/// Which endpoint a seat map draws from.
///
/// The house map on the detail screen reads the ticket feed; the booking
/// flow reads the availability endpoint. Both produce [`SeatView`]s, so
/// loaded-seat actions carry their origin to keep the two maps from
/// consuming each other's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatOrigin {
    TicketFeed,
    Availability,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    #[allow(dead_code)]
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // ── Fetch requests (screens ask the app to spawn a task) ──────
    FetchFeatured,
    FetchCatalog,
    FetchSeats {
        origin: SeatOrigin,
        event_id: EventId,
    },

    // ── Fetch completions ─────────────────────────────────────────
    FeaturedLoaded(Vec<Event>),
    FeaturedFailed(String),
    CatalogLoaded(Vec<CatalogEntry>),
    CatalogFailed(String),
    SeatsLoaded {
        origin: SeatOrigin,
        event_id: EventId,
        seats: Vec<SeatView>,
    },
    SeatsFailed {
        origin: SeatOrigin,
        event_id: EventId,
    },

    // ── Detail / booking flow ─────────────────────────────────────
    OpenDetail {
        event: Box<Event>,
        /// Ticket-derived seats the opener already has. `None` makes
        /// the detail screen fetch the ticket feed itself.
        seats: Option<Vec<SeatView>>,
    },
    OpenBooking(Box<Event>),
    /// Hand the checkout URL off to the host environment.
    CheckoutRequested(String),

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,
}
