//! Events screen: the enriched catalog. Cards carry a computed price
//! tag; a row opens the detail screen for its event.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use eventgo_core::{CatalogEntry, PriceTag};

use crate::action::Action;
use crate::component::Component;
use crate::screens::fmt_event_date;
use crate::theme;
use crate::widgets::price_fmt;
use crate::widgets::skeleton::{self, CARD_HEIGHT};

/// Placeholder cards shown while the catalog loads.
const SKELETON_CARDS: u16 = 4;

pub struct CatalogScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    /// The catalog is requested exactly once, on first focus.
    requested: bool,
    loading: bool,
    entries: Vec<CatalogEntry>,
    selected: usize,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            action_tx: None,
            requested: false,
            loading: true,
            entries: Vec::new(),
            selected: 0,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, last) as usize;
    }

    fn open_selected(&self) -> Option<Action> {
        let entry = self.entries.get(self.selected)?;
        Some(Action::OpenDetail {
            event: Box::new(entry.event.clone()),
            seats: entry.seats.clone(),
        })
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, entry: &CatalogEntry, selected: bool) {
        let prefix = if selected { "▸" } else { " " };
        let block = Block::default()
            .title(format!(" {prefix} {} ", entry.event.title))
            .title_style(if selected {
                theme::card_selected()
            } else {
                theme::title_style()
            })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let price_style = match entry.price {
            PriceTag::Starting(_) => theme::price_style(),
            PriceTag::SoldOut | PriceTag::Unknown => theme::price_muted(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", entry.event.category),
                    Style::default().fg(theme::CORAL),
                ),
                Span::styled(
                    format!(" · {}", fmt_event_date(&entry.event.date)),
                    theme::card_text(),
                ),
            ]),
            Line::from(Span::styled(
                format!(" {}", entry.event.venue),
                theme::card_text(),
            )),
            Line::from(Span::styled(
                format!(" {}", price_fmt::price_tag_label(entry.price)),
                price_style,
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for CatalogScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                self.selected = self.entries.len().saturating_sub(1);
                Ok(None)
            }
            KeyCode::Enter => Ok(self.open_selected()),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CatalogLoaded(entries) => {
                self.loading = false;
                self.entries = entries.clone();
                if self.selected >= self.entries.len() {
                    self.selected = self.entries.len().saturating_sub(1);
                }
            }
            Action::CatalogFailed(_) => {
                self.loading = false;
                self.entries.clear();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.loading {
            " All Events ".to_owned()
        } else {
            format!(" All Events ({}) ", self.entries.len())
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

        if self.entries.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " No events to show.",
                    theme::key_hint(),
                ))),
                layout[0],
            );
        } else {
            // Keep the selected card in the visible window.
            let visible = usize::from(layout[0].height / CARD_HEIGHT).max(1);
            let first = self.selected.saturating_sub(visible.saturating_sub(1));

            let constraints: Vec<Constraint> = (0..visible)
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect();
            let rows = Layout::vertical(constraints).split(layout[0]);

            for (offset, (row, entry)) in rows
                .iter()
                .zip(self.entries.iter().skip(first))
                .enumerate()
            {
                self.render_card(frame, *row, entry, first + offset == self.selected);
            }
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("view seats", theme::key_hint()),
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
                let _ = tx.send(Action::FetchCatalog);
            }
        }
    }

    fn id(&self) -> &str {
        "Events"
    }
}
