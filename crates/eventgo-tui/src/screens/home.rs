//! Home screen: the featured feed as rendered cards, prices taken
//! verbatim from the feed with no enrichment fetch.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use eventgo_core::Event;

use crate::action::Action;
use crate::component::Component;
use crate::screens::fmt_event_date;
use crate::theme;
use crate::widgets::price_fmt;
use crate::widgets::skeleton::{self, CARD_HEIGHT};

/// Placeholder cards shown while the feed loads.
const SKELETON_CARDS: u16 = 4;

pub struct HomeScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    /// The feed is requested exactly once, on first focus.
    requested: bool,
    loading: bool,
    events: Vec<Event>,
    scroll: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            action_tx: None,
            requested: false,
            loading: true,
            events: Vec::new(),
            scroll: 0,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.events.len().saturating_sub(1) as isize;
        self.scroll = (self.scroll as isize + delta).clamp(0, max) as usize;
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, event: &Event) {
        let block = Block::default()
            .title(format!(" {} ", event.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let price_label = price_fmt::advertised_label(event.advertised_price);
        let price_style = if event.advertised_price.is_some() {
            theme::price_style()
        } else {
            theme::price_muted()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", event.category),
                    Style::default().fg(theme::CORAL),
                ),
                Span::styled(
                    format!(" · {}", fmt_event_date(&event.date)),
                    theme::card_text(),
                ),
            ]),
            Line::from(Span::styled(format!(" {}", event.venue), theme::card_text())),
            Line::from(Span::styled(format!(" {price_label}"), price_style)),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for HomeScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_by(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_by(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.scroll = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                self.scroll = self.events.len().saturating_sub(1);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::FeaturedLoaded(events) => {
                self.loading = false;
                self.events = events.clone();
                self.scroll = 0;
            }
            Action::FeaturedFailed(_) => {
                // Degrade to an empty grid; the app already raised a toast.
                self.loading = false;
                self.events.clear();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.loading {
            " Featured Events ".to_owned()
        } else {
            format!(" Featured Events ({}) ", self.events.len())
        };
        let block = Block::default()
            .title(title)
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

        if self.loading {
            skeleton::render_skeleton_cards(frame, inner, SKELETON_CARDS);
            return;
        }

        let layout = Layout::vertical([
            Constraint::Min(1),    // cards
            Constraint::Length(1), // hints
        ])
        .split(inner);

        if self.events.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " No events to show.",
                    theme::key_hint(),
                ))),
                layout[0],
            );
        } else {
            let visible = usize::from(layout[0].height / CARD_HEIGHT).max(1);
            let constraints: Vec<Constraint> = (0..visible)
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect();
            let rows = Layout::vertical(constraints).split(layout[0]);

            for (row, event) in rows.iter().zip(self.events.iter().skip(self.scroll)) {
                self.render_card(frame, *row, event);
            }
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("scroll  ", theme::key_hint()),
            Span::styled("2 ", theme::key_hint_key()),
            Span::styled("browse catalog", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused && !self.requested {
            self.requested = true;
            if let Some(tx) = &self.action_tx {
                let _ = tx.send(Action::FetchFeatured);
            }
        }
    }

    fn id(&self) -> &str {
        "Home"
    }
}
