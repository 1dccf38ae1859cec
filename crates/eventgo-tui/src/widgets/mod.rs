//! Reusable widgets shared across screens.

pub mod price_fmt;
pub mod seat_map;
pub mod skeleton;
