// ── Seat selection state ──

use indexmap::IndexSet;

use super::ids::{EventId, SeatId};
use super::seat::SeatView;

/// Insertion-ordered set of selected seats, scoped to one seat map.
///
/// Mutated only by user toggles, encoded into a URL query string at
/// checkout hand-off, and never persisted.
#[derive(Debug, Clone, Default)]
pub struct SeatSelection {
    seats: IndexSet<SeatId>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a seat in or out of the selection.
    ///
    /// Locked seats (Reserved or Sold) are refused outright. Returns
    /// whether the selection changed.
    pub fn toggle(&mut self, seat: &SeatView) -> bool {
        if seat.status.is_locked() {
            return false;
        }
        // shift_remove keeps the remaining ids in insertion order.
        if !self.seats.shift_remove(&seat.id) {
            self.seats.insert(seat.id);
        }
        true
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.seats.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.seats.iter().copied()
    }

    /// Checkout hand-off URL: `/checkout?eventId=<id>&seats=<id,id,...>`
    /// with seat ids in selection order.
    pub fn checkout_url(&self, event_id: EventId) -> String {
        let seats = self
            .seats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("/checkout?eventId={event_id}&seats={seats}")
    }

    /// Selected seat labels in selection order, joined with `", "`.
    ///
    /// An id with no matching record falls back to the literal
    /// `Seat <id>`; an empty selection yields `None`.
    pub fn summary(&self, seats: &[SeatView]) -> String {
        if self.seats.is_empty() {
            return "None".to_owned();
        }
        self.seats
            .iter()
            .map(|id| {
                seats
                    .iter()
                    .find(|s| s.id == *id)
                    .map_or_else(|| format!("Seat {id}"), |s| s.seat_number.clone())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::TicketStatus;

    fn seat(id: u64, status: TicketStatus) -> SeatView {
        SeatView {
            id: SeatId::from(id),
            seat_number: format!("MAD-{id}"),
            status,
            price: 50.0,
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SeatSelection::new();
        let s = seat(1, TicketStatus::Available);

        assert!(selection.toggle(&s));
        assert!(selection.contains(SeatId::from(1)));

        assert!(selection.toggle(&s));
        assert!(!selection.contains(SeatId::from(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_refuses_locked_seats() {
        let mut selection = SeatSelection::new();

        assert!(selection.toggle(&seat(1, TicketStatus::Available)));
        assert!(!selection.toggle(&seat(2, TicketStatus::Reserved)));
        assert!(!selection.toggle(&seat(3, TicketStatus::Sold)));

        assert_eq!(selection.len(), 1);
        assert!(selection.contains(SeatId::from(1)));
    }

    #[test]
    fn checkout_url_preserves_selection_order() {
        let mut selection = SeatSelection::new();
        selection.toggle(&seat(3, TicketStatus::Available));
        selection.toggle(&seat(1, TicketStatus::Available));
        selection.toggle(&seat(2, TicketStatus::Available));

        assert_eq!(
            selection.checkout_url(EventId::from(7)),
            "/checkout?eventId=7&seats=3,1,2"
        );
    }

    #[test]
    fn checkout_url_with_empty_selection() {
        let selection = SeatSelection::new();
        assert_eq!(
            selection.checkout_url(EventId::from(7)),
            "/checkout?eventId=7&seats="
        );
    }

    #[test]
    fn reinsertion_moves_seat_to_the_back() {
        let mut selection = SeatSelection::new();
        selection.toggle(&seat(1, TicketStatus::Available));
        selection.toggle(&seat(2, TicketStatus::Available));
        selection.toggle(&seat(3, TicketStatus::Available));

        // Drop 2 and re-add it; 1 and 3 keep their relative order.
        selection.toggle(&seat(2, TicketStatus::Available));
        selection.toggle(&seat(2, TicketStatus::Available));

        let order: Vec<SeatId> = selection.iter().collect();
        assert_eq!(
            order,
            vec![SeatId::from(1), SeatId::from(3), SeatId::from(2)]
        );
    }

    #[test]
    fn summary_uses_labels_with_fallback() {
        let seats = vec![
            seat(1, TicketStatus::Available),
            seat(2, TicketStatus::Available),
        ];

        let mut selection = SeatSelection::new();
        selection.toggle(&seat(2, TicketStatus::Available));
        selection.toggle(&seat(99, TicketStatus::Available));

        assert_eq!(selection.summary(&seats), "MAD-2, Seat 99");
    }

    #[test]
    fn summary_of_empty_selection_is_none() {
        let selection = SeatSelection::new();
        assert_eq!(selection.summary(&[]), "None");
    }
}
