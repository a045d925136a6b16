//! Terminal user interface: the presentation layer the form model binds to.
//!
//! Single-threaded and event-driven. Three things happen: the startup fetch
//! renders the form, tab switches toggle section visibility without
//! re-rendering, and save collects the form and submits it. Fetch and save
//! failures surface as transient notifications, never as crashes.

mod editor;
mod status_bar;
mod theme;

pub use theme::Theme;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Tabs},
    Frame, Terminal,
};
use serde_json::Value;

use crate::client::ConfigClient;
use crate::constants::{APP_NAME, NOTIFICATION_TIMEOUT};
use crate::form::{collect, render, CardItem, FormModel, Widget};
use status_bar::StatusBar;

/// Kind of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Save confirmation
    Success,
    /// Fetch or save failure
    Error,
}

/// A transient on-screen notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Success or error styling
    pub kind: NoticeKind,
    /// When the notification was shown; it auto-dismisses after
    /// [`NOTIFICATION_TIMEOUT`]
    pub shown_at: Instant,
}

/// Application state for the editor.
pub struct App {
    /// API client for fetch and save
    pub client: ConfigClient,
    /// The rendered form
    pub form: FormModel,
    /// Color theme
    pub theme: Theme,
    /// Widget index within the visible section
    pub selected: usize,
    /// Cursor within the selected widget (range half, network entry, chip)
    pub inner: usize,
    /// Active notification, if any
    pub notification: Option<Notification>,
    /// Set when the user quits
    pub should_quit: bool,
}

impl App {
    /// Fetches the configuration and renders the initial form.
    ///
    /// A failed fetch leaves the form empty and surfaces the error as a
    /// notification, matching the save-path error handling.
    #[must_use]
    pub fn new(client: ConfigClient) -> Self {
        let mut app = Self {
            client,
            form: FormModel::default(),
            theme: Theme::default(),
            selected: 0,
            inner: 0,
            notification: None,
            should_quit: false,
        };
        match app.client.fetch() {
            Ok(doc) => app.form = render(&doc),
            Err(e) => {
                app.form = render(&Value::Object(serde_json::Map::new()));
                app.notify(NoticeKind::Error, format!("Failed to load configuration: {e:#}"));
            }
        }
        app.reset_inner();
        app
    }

    /// Shows a notification, replacing any currently displayed one.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Dismisses the notification once its timeout has elapsed.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notification {
            if notice.shown_at.elapsed() >= NOTIFICATION_TIMEOUT {
                self.notification = None;
            }
        }
    }

    /// Collects the form and submits it to the server.
    pub fn save(&mut self) {
        let doc = collect(&self.form);
        match self.client.save(&doc) {
            Ok(()) => self.notify(NoticeKind::Success, "Configuration saved successfully!"),
            Err(e) => self.notify(NoticeKind::Error, format!("Failed to save configuration: {e:#}")),
        }
    }

    /// Number of widgets in the visible section.
    #[must_use]
    pub fn visible_widget_count(&self) -> usize {
        let index = self.form.visible_section();
        self.form
            .sections
            .get(index)
            .map_or(0, |s| s.cards.iter().map(|c| c.widgets().count()).sum())
    }

    /// The selected widget of the visible section, if any.
    #[must_use]
    pub fn selected_widget(&self) -> Option<&Widget> {
        let index = self.form.visible_section();
        self.form
            .sections
            .get(index)?
            .cards
            .iter()
            .flat_map(crate::form::Card::widgets)
            .nth(self.selected)
    }

    /// Mutable access to the selected widget.
    pub fn selected_widget_mut(&mut self) -> Option<&mut Widget> {
        let index = self.form.visible_section();
        let selected = self.selected;
        self.form
            .sections
            .get_mut(index)?
            .cards
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .filter_map(|item| match item {
                CardItem::Field(widget) => Some(widget),
                CardItem::GroupLabel(_) => None,
            })
            .nth(selected)
    }

    /// Switches to the next section (wrapping) and resets the cursor.
    pub fn next_section(&mut self) {
        let count = self.form.sections.len();
        if count > 0 {
            let next = (self.form.visible_section() + 1) % count;
            self.form.show_section(next);
            self.selected = 0;
            self.reset_inner();
        }
    }

    /// Switches to the previous section (wrapping) and resets the cursor.
    pub fn prev_section(&mut self) {
        let count = self.form.sections.len();
        if count > 0 {
            let current = self.form.visible_section();
            let prev = if current == 0 { count - 1 } else { current - 1 };
            self.form.show_section(prev);
            self.selected = 0;
            self.reset_inner();
        }
    }

    /// Moves widget selection down within the visible section.
    pub fn select_next(&mut self) {
        let count = self.visible_widget_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
            self.reset_inner();
        }
    }

    /// Moves widget selection up within the visible section.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.reset_inner();
        }
    }

    /// Resets the inner cursor to the selected widget's default position:
    /// the draft entry for tag widgets, the first element otherwise.
    pub fn reset_inner(&mut self) {
        self.inner = match self.selected_widget().map(|w| &w.control) {
            Some(crate::form::Control::Tags { chips, .. }) => chips.len(),
            _ => 0,
        };
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|f| render_ui(f, app))?;

        // Poll for events with 100ms timeout so notifications expire
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    editor::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render_ui(f: &mut Frame, app: &App) {
    let full_bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Min(10),   // Editor content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_tabs(f, chunks[0], app);
    editor::render_content(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Span> = app
        .form
        .sections
        .iter()
        .map(|s| Span::raw(s.title))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.form.visible_section())
        .style(Style::default().fg(app.theme.inactive))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.primary))
                .title(APP_NAME),
        );
    f.render_widget(tabs, area);
}
