// ── Event domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::ids::EventId;

/// A listed event.
///
/// The feed's older and newer field layouts (`id`/`location` vs
/// `event_id`/`venue`) are unified here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub image_url: Option<Url>,
    /// The feed's own starting-price hint, when it carries one.
    /// Display-only; the catalog computes the authoritative figure
    /// from live ticket data.
    pub advertised_price: Option<f64>,
}
