//! Loading skeleton: placeholder cards shown while a feed loads.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Height of one placeholder card, matching the rendered event cards.
pub const CARD_HEIGHT: u16 = 5;

/// Render `count` placeholder cards stacked top to bottom.
pub fn render_skeleton_cards(frame: &mut Frame, area: Rect, count: u16) {
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for row in rows.iter().take(usize::from(count)) {
        render_skeleton_card(frame, *row);
    }
}

fn render_skeleton_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar = Style::default().fg(theme::BG_HIGHLIGHT);
    let lines = vec![
        Line::from(Span::styled(" ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇", bar)),
        Line::from(Span::styled(" ▇▇▇▇▇▇▇▇▇  ▇▇▇▇▇▇▇▇▇▇▇▇", bar)),
        Line::from(Span::styled(" ▇▇▇▇▇▇", bar)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
