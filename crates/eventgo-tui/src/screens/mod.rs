//! Screen implementations. Each screen is a top-level Component.

pub mod booking;
pub mod catalog;
pub mod detail;
pub mod home;

use chrono::{DateTime, Utc};

use crate::component::Component;
use crate::screen::ScreenId;

/// Create the tab-bar screens. Detail and Booking mount on demand.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Home, Box::new(home::HomeScreen::new())),
        (ScreenId::Events, Box::new(catalog::CatalogScreen::new())),
    ]
}

/// Human-readable event date for cards and headers.
pub(crate) fn fmt_event_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y · %H:%M").to_string()
}
