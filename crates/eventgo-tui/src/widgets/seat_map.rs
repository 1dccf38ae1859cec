//! Seat-map widget: one grid shared by the detail and booking screens,
//! parameterized by where its seats come from and whether checkout shows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use eventgo_core::{EventId, SeatSelection, SeatView};

use crate::action::{Action, SeatOrigin};
use crate::theme;

/// Seats per grid row in the house layout.
const GRID_COLUMNS: usize = 10;

const LOADING_TEXT: &str = "Loading available seats...";
const ERROR_TEXT: &str = "Failed to load seats.";

/// Where the widget's seats come from.
pub enum SeatSource {
    /// Use these seats verbatim; no fetch.
    Provided(Vec<SeatView>),
    /// Fetch the event's ticket feed once on mount.
    TicketFeed(EventId),
    /// Fetch the event's seat-availability endpoint once on mount.
    Availability(EventId),
}

/// Widget configuration.
pub struct SeatMapConfig {
    pub source: SeatSource,
    /// Whether the checkout control renders.
    pub show_checkout: bool,
}

/// Load state. `Failed` is terminal: there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Stateful seat grid with toggle-set selection.
///
/// Locked seats are guarded twice: the key handler refuses to activate
/// them, and [`SeatSelection::toggle`] refuses them besides.
pub struct SeatMap {
    state: LoadState,
    seats: Vec<SeatView>,
    selection: SeatSelection,
    /// Focused cell index into `seats`.
    cursor: usize,
    /// Which feed this map consumes. `None` for provided seats, which
    /// accept no updates.
    origin: Option<SeatOrigin>,
    event_id: Option<EventId>,
    show_checkout: bool,
    throbber: throbber_widgets_tui::ThrobberState,
}

impl SeatMap {
    pub fn new(config: SeatMapConfig) -> Self {
        let (state, seats, origin, event_id) = match config.source {
            SeatSource::Provided(seats) => (LoadState::Ready, seats, None, None),
            SeatSource::TicketFeed(id) => (
                LoadState::Loading,
                Vec::new(),
                Some(SeatOrigin::TicketFeed),
                Some(id),
            ),
            SeatSource::Availability(id) => (
                LoadState::Loading,
                Vec::new(),
                Some(SeatOrigin::Availability),
                Some(id),
            ),
        };

        Self {
            state,
            seats,
            selection: SeatSelection::default(),
            cursor: 0,
            origin,
            event_id,
            show_checkout: config.show_checkout,
            throbber: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    /// The one-shot fetch this map needs, if any. The owning screen sends
    /// it on mount; the map never requests again.
    pub fn fetch_action(&self) -> Option<Action> {
        let origin = self.origin?;
        let event_id = self.event_id?;
        Some(Action::FetchSeats { origin, event_id })
    }

    fn accepts(&self, origin: SeatOrigin, event_id: EventId) -> bool {
        self.origin == Some(origin) && self.event_id == Some(event_id)
    }

    pub fn update(&mut self, action: &Action) {
        match action {
            Action::Tick => {
                if self.state == LoadState::Loading {
                    self.throbber.calc_next();
                }
            }
            Action::SeatsLoaded {
                origin,
                event_id,
                seats,
            } if self.accepts(*origin, *event_id) => {
                if self.state == LoadState::Loading {
                    self.state = LoadState::Ready;
                    self.seats = seats.clone();
                    self.cursor = 0;
                }
            }
            Action::SeatsFailed { origin, event_id } if self.accepts(*origin, *event_id) => {
                if self.state == LoadState::Loading {
                    self.state = LoadState::Failed;
                }
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.state != LoadState::Ready {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-(GRID_COLUMNS as isize));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(GRID_COLUMNS as isize);
                None
            }
            KeyCode::Char(' ') => {
                self.toggle_focused();
                None
            }
            KeyCode::Enter => self.checkout_action(),
            _ => None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.seats.is_empty() {
            return;
        }
        let last = self.seats.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    fn toggle_focused(&mut self) {
        let Some(seat) = self.seats.get(self.cursor) else {
            return;
        };
        // Locked cells are not activatable.
        if seat.status.is_locked() {
            return;
        }
        self.selection.toggle(seat);
    }

    /// The checkout hand-off, when the control is live. `None` while the
    /// selection is empty or the map has no checkout control.
    pub fn checkout_action(&self) -> Option<Action> {
        if !self.show_checkout || self.selection.is_empty() {
            return None;
        }
        let event_id = self.event_id?;
        Some(Action::CheckoutRequested(
            self.selection.checkout_url(event_id),
        ))
    }

    // ── Rendering ─────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Select Your Seats",
                theme::title_style(),
            ))),
            layout[0],
        );

        match self.state {
            LoadState::Loading => self.render_loading(frame, layout[1]),
            LoadState::Failed => render_failed(frame, layout[1]),
            LoadState::Ready => self.render_grid(frame, layout[1]),
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label(LOADING_TEXT)
            .style(Style::default().fg(theme::NEON_CYAN))
            .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
        frame.render_stateful_widget(throbber, area, &mut self.throbber.clone());
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![
            Constraint::Min(1),    // grid
            Constraint::Length(1), // focused seat detail
            Constraint::Length(1), // selection summary
        ];
        if self.show_checkout {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // hints
        let layout = Layout::vertical(constraints).split(area);

        frame.render_widget(Paragraph::new(self.grid_lines()), layout[0]);

        // Focused seat detail
        if let Some(detail) = self.focused_detail() {
            let style = Style::default().fg(theme::ELECTRIC_YELLOW);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(format!(" {detail}"), style))),
                layout[1],
            );
        }

        // Selection summary
        let summary = Line::from(vec![
            Span::styled(" Selected Seats: ", theme::card_text()),
            Span::styled(
                self.selection.summary(&self.seats),
                Style::default().fg(theme::NEON_CYAN),
            ),
        ]);
        frame.render_widget(Paragraph::new(summary), layout[2]);

        if self.show_checkout {
            frame.render_widget(Paragraph::new(self.checkout_line()), layout[3]);
        }

        let hints = if self.show_checkout {
            Line::from(vec![
                Span::styled(" ←↓↑→ ", theme::key_hint_key()),
                Span::styled("move  ", theme::key_hint()),
                Span::styled("Space ", theme::key_hint_key()),
                Span::styled("toggle seat  ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("checkout", theme::key_hint()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" ←↓↑→ ", theme::key_hint_key()),
                Span::styled("move  ", theme::key_hint()),
                Span::styled("Space ", theme::key_hint_key()),
                Span::styled("toggle seat", theme::key_hint()),
            ])
        };
        frame.render_widget(Paragraph::new(hints), layout[layout.len() - 1]);
    }

    fn grid_lines(&self) -> Vec<Line<'_>> {
        if self.seats.is_empty() {
            return vec![Line::from(Span::styled(
                " No seats listed for this event.",
                theme::card_text(),
            ))];
        }

        let cell_width = self
            .seats
            .iter()
            .map(|s| s.seat_number.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        let mut lines = Vec::new();
        for (row_idx, row) in self.seats.chunks(GRID_COLUMNS).enumerate() {
            let mut spans = vec![Span::raw(" ")];
            for (col_idx, seat) in row.iter().enumerate() {
                let idx = row_idx * GRID_COLUMNS + col_idx;
                let mut style = if self.selection.contains(seat.id) {
                    theme::seat_selected()
                } else if seat.status.is_locked() {
                    theme::seat_locked()
                } else {
                    theme::seat_available()
                };
                if idx == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(
                    format!("{:^width$}", seat.seat_number, width = cell_width),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn focused_detail(&self) -> Option<String> {
        let seat = self.seats.get(self.cursor)?;
        Some(if seat.status.is_locked() {
            format!("Seat {} is {}", seat.seat_number, seat.status)
        } else {
            format!("Seat {} - ${:.2}", seat.seat_number, seat.price)
        })
    }

    fn checkout_line(&self) -> Line<'_> {
        match (self.selection.is_empty(), self.event_id) {
            (false, Some(event_id)) => Line::from(vec![
                Span::styled(" Enter ", theme::key_hint_key()),
                Span::styled("checkout → ", theme::card_text()),
                Span::styled(
                    self.selection.checkout_url(event_id),
                    theme::price_style(),
                ),
            ]),
            _ => Line::from(Span::styled(
                " Checkout (select a seat first)",
                theme::key_hint(),
            )),
        }
    }
}

fn render_failed(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {ERROR_TEXT}"),
            Style::default().fg(theme::ERROR_RED),
        ))),
        area,
    );
}
