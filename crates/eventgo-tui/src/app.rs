//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use eventgo_core::{EventId, Storefront};

use crate::action::{Action, Notification, SeatOrigin};
use crate::component::Component;
use crate::input::{InputEvent, InputReader};
use crate::screen::ScreenId;
use crate::screens::booking::BookingScreen;
use crate::screens::create_screens;
use crate::screens::detail::DetailScreen;
use crate::theme;
use crate::tui::Tui;

/// Upstream feed status as seen by the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Live,
    Failed,
}

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// Screens to return to on Esc. Two levels deep at most
    /// (Events, then Detail under an open Booking).
    nav_stack: Vec<ScreenId>,
    /// All screen components, keyed by ScreenId. Detail and Booking
    /// appear here only while open.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Status of the last upstream interaction.
    feed_status: FeedStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Terminal size for responsive layout.
    terminal_size: (u16, u16),
    /// Action sender. Components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver. The main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Catalog services over the upstream API.
    storefront: Storefront,
    /// Shown in the status bar.
    base_url: String,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    /// Create a new App with the tab screens registered.
    pub fn new(storefront: Storefront) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();
        let base_url = storefront.base_url();

        Self {
            active_screen: ScreenId::Home,
            nav_stack: Vec::new(),
            screens,
            running: true,
            feed_status: FeedStatus::default(),
            help_visible: false,
            terminal_size: (0, 0),
            action_tx,
            action_rx,
            storefront,
            base_url,
            notification: None,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        // Focusing the initial screen triggers its first fetch
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.init_screens()?;

        let mut events = InputReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                InputEvent::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                InputEvent::Mouse(_) => {}
                InputEvent::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                InputEvent::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                InputEvent::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Help
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Tab screens via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='2')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc closes the innermost contextual screen
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action: update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(w, h) => {
                self.terminal_size = (*w, *h);
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    // Jumping to a tab abandons any contextual flow
                    self.screens.remove(&ScreenId::Detail);
                    self.screens.remove(&ScreenId::Booking);
                    self.nav_stack.clear();
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.nav_stack.pop() {
                    debug!("closing {}, back to {}", self.active_screen, prev);
                    // Contextual screens are dropped on exit and rebuilt on entry
                    if matches!(self.active_screen, ScreenId::Detail | ScreenId::Booking) {
                        self.screens.remove(&self.active_screen);
                    }
                    self.active_screen = prev;
                    if let Some(screen) = self.screens.get_mut(&prev) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::Render => {}

            Action::Tick => {
                // Auto-dismiss notifications after 3 seconds
                if let Some((_, created)) = &self.notification {
                    if created.elapsed() > Duration::from_secs(3) {
                        self.notification = None;
                    }
                }
                // Forward ticks to seat-map screens for throbber animation
                if matches!(self.active_screen, ScreenId::Detail | ScreenId::Booking) {
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        let _ = screen.update(action);
                    }
                }
            }

            // ── Fetch requests ────────────────────────────────────────
            Action::FetchFeatured => {
                self.feed_status = FeedStatus::Loading;
                self.fetch_featured();
            }

            Action::FetchCatalog => {
                self.feed_status = FeedStatus::Loading;
                self.fetch_catalog();
            }

            Action::FetchSeats { origin, event_id } => {
                self.feed_status = FeedStatus::Loading;
                self.fetch_seats(*origin, *event_id);
            }

            // Completions go to ALL screens so both seat maps stay in sync
            Action::FeaturedLoaded(_) | Action::CatalogLoaded(_) | Action::SeatsLoaded { .. } => {
                self.feed_status = FeedStatus::Live;
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            Action::FeaturedFailed(_) | Action::CatalogFailed(_) | Action::SeatsFailed { .. } => {
                self.feed_status = FeedStatus::Failed;
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // ── Detail / booking flow ─────────────────────────────────
            Action::OpenDetail { event, seats } => {
                let mut screen = DetailScreen::new((**event).clone(), seats.clone());
                screen.init(self.action_tx.clone())?;
                self.screens.insert(ScreenId::Detail, Box::new(screen));
                self.nav_stack.push(self.active_screen);
                if let Some(s) = self.screens.get_mut(&self.active_screen) {
                    s.set_focused(false);
                }
                self.active_screen = ScreenId::Detail;
                if let Some(s) = self.screens.get_mut(&ScreenId::Detail) {
                    s.set_focused(true);
                }
            }

            Action::OpenBooking(event) => {
                let mut screen = BookingScreen::new((**event).clone());
                screen.init(self.action_tx.clone())?;
                self.screens.insert(ScreenId::Booking, Box::new(screen));
                self.nav_stack.push(self.active_screen);
                if let Some(s) = self.screens.get_mut(&self.active_screen) {
                    s.set_focused(false);
                }
                self.active_screen = ScreenId::Booking;
                if let Some(s) = self.screens.get_mut(&ScreenId::Booking) {
                    s.set_focused(true);
                }
            }

            Action::CheckoutRequested(url) => {
                info!(%url, "checkout hand-off");
                self.action_tx
                    .send(Action::Notify(Notification::success(format!(
                        "Checkout → {url}"
                    ))))?;
            }

            // Notifications
            Action::Notify(n) => {
                self.notification = Some((n.clone(), Instant::now()));
            }

            Action::DismissNotification => {
                self.notification = None;
            }

            // Everything else goes to the active screen only
            other => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    // ── Fetch tasks ───────────────────────────────────────────────────

    /// Spawn the featured-events fetch. Sends a completion action; on
    /// failure also raises a toast, and the home grid degrades to empty.
    fn fetch_featured(&self) {
        let storefront = self.storefront.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match storefront.featured_events().await {
                Ok(events) => {
                    let _ = tx.send(Action::FeaturedLoaded(events));
                }
                Err(e) => {
                    error!(error = %e, "featured events fetch failed");
                    let _ = tx.send(Action::FeaturedFailed(e.to_string()));
                    let _ = tx.send(Action::Notify(Notification::error(format!("{e}"))));
                }
            }
        });
    }

    /// Spawn the catalog enrichment batch. Per-event ticket failures are
    /// absorbed inside the batch; only a failed event list reaches here.
    fn fetch_catalog(&self) {
        let storefront = self.storefront.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match storefront.featured_catalog().await {
                Ok(entries) => {
                    let _ = tx.send(Action::CatalogLoaded(entries));
                }
                Err(e) => {
                    error!(error = %e, "catalog fetch failed");
                    let _ = tx.send(Action::CatalogFailed(e.to_string()));
                    let _ = tx.send(Action::Notify(Notification::error(format!("{e}"))));
                }
            }
        });
    }

    /// Spawn a seat fetch for one seat map. No toast on failure; the
    /// widget renders its own error text.
    fn fetch_seats(&self, origin: SeatOrigin, event_id: EventId) {
        let storefront = self.storefront.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = match origin {
                SeatOrigin::TicketFeed => storefront.tickets_as_seats(event_id).await,
                SeatOrigin::Availability => storefront.available_seats(event_id).await,
            };
            match result {
                Ok(seats) => {
                    let _ = tx.send(Action::SeatsLoaded {
                        origin,
                        event_id,
                        seats,
                    });
                }
                Err(e) => {
                    warn!(%event_id, error = %e, "seat fetch failed");
                    let _ = tx.send(Action::SeatsFailed { origin, event_id });
                }
            }
        });
    }

    // ── Rendering ─────────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if matches!(self.active_screen, ScreenId::Detail | ScreenId::Booking) {
            // Contextual screens take the full frame, no tab or status bar
            if let Some(screen) = self.screens.get(&self.active_screen) {
                screen.render(frame, area);
            }
        } else {
            // Layout: [screen content] [tab bar] [status bar]
            let layout = Layout::vertical([
                Constraint::Min(1),    // Screen content
                Constraint::Length(1), // Tab bar
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            if let Some(screen) = self.screens.get(&self.active_screen) {
                screen.render(frame, layout[0]);
            }

            self.render_tab_bar(frame, layout[1]);
            self.render_status_bar(frame, layout[2]);
        }

        // Render overlays on top (order matters: last = topmost)
        if let Some((ref notif, _)) = self.notification {
            self.render_notification(frame, area, notif);
        }

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom tab bar.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with feed status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let feed_indicator = match self.feed_status {
            FeedStatus::Idle => Span::styled("○ idle", theme::key_hint()),
            FeedStatus::Loading => Span::styled(
                "◐ loading",
                Style::default().fg(theme::ELECTRIC_YELLOW),
            ),
            FeedStatus::Live => {
                Span::styled("● live", Style::default().fg(theme::SUCCESS_GREEN))
            }
            FeedStatus::Failed => {
                Span::styled("○ offline", Style::default().fg(theme::ERROR_RED))
            }
        };

        let line = Line::from(vec![
            Span::raw(" "),
            feed_indicator,
            Span::styled(format!(" │ {}", self.base_url), theme::key_hint()),
            Span::styled(" │ ? help  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 54u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let help_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Navigation",
                Style::default().fg(theme::NEON_CYAN),
            )]),
            Line::from(Span::styled("  ─────────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  1-2       ", theme::key_hint_key()),
                Span::styled("Jump to screen", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Tab       ", theme::key_hint_key()),
                Span::styled("Next screen", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  j/k ↑/↓   ", theme::key_hint_key()),
                Span::styled("Move up/down", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Enter     ", theme::key_hint_key()),
                Span::styled("Open selected event", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Esc       ", theme::key_hint_key()),
                Span::styled("Back / close", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Seats",
                Style::default().fg(theme::NEON_CYAN),
            )]),
            Line::from(Span::styled("  ─────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  ←↓↑→/hjkl ", theme::key_hint_key()),
                Span::styled("Move around the grid", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Space     ", theme::key_hint_key()),
                Span::styled("Select / deselect seat", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  b         ", theme::key_hint_key()),
                Span::styled("Book seats for this event", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Enter     ", theme::key_hint_key()),
                Span::styled("Check out the selection", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    #[allow(clippy::unused_self)]
    fn render_notification(&self, frame: &mut Frame, area: Rect, notif: &Notification) {
        use crate::action::NotificationLevel;

        let msg_len = notif.message.len() as u16;
        let width = (msg_len + 6).clamp(20, 60);
        let height = 3u16;

        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above status bar
        let toast_area = Rect::new(area.x + x, area.y + y, width, height);

        let (border_color, icon) = match notif.level {
            NotificationLevel::Success => (theme::SUCCESS_GREEN, "✓"),
            NotificationLevel::Error => (theme::ERROR_RED, "✗"),
            NotificationLevel::Info => (theme::NEON_CYAN, "·"),
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            toast_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(&notif.message, Style::default().fg(theme::DIM_WHITE)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
