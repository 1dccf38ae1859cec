//! Screen identifier enum.

use std::fmt;

/// Identifies each TUI screen.
///
/// Home and Events are top-level tab screens, navigable by number keys.
/// Detail and Booking are contextual: they open from a catalog row and
/// Esc returns to whichever screen opened them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home, // 1
    Events, // 2
    /// Event detail with the house seat map; not in the tab bar.
    Detail,
    /// Checkout flow; not in the tab bar.
    Booking,
}

impl ScreenId {
    /// Top-level screens in tab-bar order.
    pub const ALL: [ScreenId; 2] = [Self::Home, Self::Events];

    /// Numeric key for this screen. Contextual screens have no number key.
    pub fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Events => 2,
            Self::Detail | Self::Booking => 0,
        }
    }

    /// Screen from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Home),
            2 => Some(Self::Events),
            _ => None,
        }
    }

    /// Next tab screen (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous tab screen (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Events => "Events",
            Self::Detail => "Detail",
            Self::Booking => "Booking",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
        assert_eq!(ScreenId::from_number(0), None);
        assert_eq!(ScreenId::from_number(3), None);
    }

    #[test]
    fn contextual_screens_have_no_number_key() {
        assert_eq!(ScreenId::Detail.number(), 0);
        assert_eq!(ScreenId::Booking.number(), 0);
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(ScreenId::Home.next(), ScreenId::Events);
        assert_eq!(ScreenId::Events.next(), ScreenId::Home);
        assert_eq!(ScreenId::Home.prev(), ScreenId::Events);
    }
}
