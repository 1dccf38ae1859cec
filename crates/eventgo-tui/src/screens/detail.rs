//! Detail screen for a single event: header plus the house seat map.
//!
//! Opened from the catalog. When the catalog already enriched the event
//! with seats, the map renders them as-is; otherwise it pulls the
//! ticket feed on mount.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use eventgo_core::{Event, SeatView};

use crate::action::Action;
use crate::component::Component;
use crate::screens::fmt_event_date;
use crate::theme;
use crate::widgets::seat_map::{SeatMap, SeatMapConfig, SeatSource};

pub struct DetailScreen {
    focused: bool,
    event: Event,
    seat_map: SeatMap,
}

impl DetailScreen {
    pub fn new(event: Event, seats: Option<Vec<SeatView>>) -> Self {
        let source = match seats {
            Some(seats) => SeatSource::Provided(seats),
            None => SeatSource::TicketFeed(event.id),
        };
        let seat_map = SeatMap::new(SeatMapConfig {
            source,
            show_checkout: false,
        });
        Self {
            focused: false,
            event,
            seat_map,
        }
    }
}

impl Component for DetailScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        if let Some(fetch) = self.seat_map.fetch_action() {
            let _ = action_tx.send(fetch);
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('b') => Ok(Some(Action::OpenBooking(Box::new(self.event.clone())))),
            _ => Ok(self.seat_map.handle_key_event(key)),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        self.seat_map.update(action);
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.event.title))
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
            Constraint::Length(2), // header
            Constraint::Min(1),    // seat map
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let header = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", self.event.category),
                    Style::default().fg(theme::CORAL),
                ),
                Span::styled(
                    format!(" · {}", fmt_event_date(&self.event.date)),
                    theme::card_text(),
                ),
            ]),
            Line::from(Span::styled(
                format!(" {}", self.event.venue),
                theme::card_text(),
            )),
        ];
        frame.render_widget(Paragraph::new(header), layout[0]);

        self.seat_map.render(frame, layout[1]);

        let hints = Line::from(vec![
            Span::styled("  b ", theme::key_hint_key()),
            Span::styled("book seats  ", theme::key_hint()),
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("back", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Detail"
    }
}
