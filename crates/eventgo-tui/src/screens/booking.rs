//! Booking screen: pick seats from live availability and check out.
//!
//! Always fetches the availability feed on mount, even when the detail
//! screen already had seats. Stale ticket-feed data is fine for a house
//! map but not for selling.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use eventgo_core::Event;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::seat_map::{SeatMap, SeatMapConfig, SeatSource};

pub struct BookingScreen {
    focused: bool,
    event: Event,
    seat_map: SeatMap,
}

impl BookingScreen {
    pub fn new(event: Event) -> Self {
        let seat_map = SeatMap::new(SeatMapConfig {
            source: SeatSource::Availability(event.id),
            show_checkout: true,
        });
        Self {
            focused: false,
            event,
            seat_map,
        }
    }
}

impl Component for BookingScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        if let Some(fetch) = self.seat_map.fetch_action() {
            let _ = action_tx.send(fetch);
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(self.seat_map.handle_key_event(key))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        self.seat_map.update(action);
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Booking · {} ", self.event.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(1),    // seat map
            Constraint::Length(1), // hints
        ])
        .split(inner);

        self.seat_map.render(frame, layout[0]);

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::key_hint_key()),
            Span::styled("back to event", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Booking"
    }
}
