//! Status bar widget: transient notifications and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, NoticeKind};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the active notification if one is showing,
    /// otherwise contextual key hints.
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mut lines: Vec<Line> = Vec::new();

        if let Some(notice) = &app.notification {
            let color = match notice.kind {
                NoticeKind::Success => theme.success,
                NoticeKind::Error => theme.error,
            };
            lines.push(Line::from(Span::styled(
                notice.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Tab", Style::default().fg(theme.accent)),
                Span::styled("/", Style::default().fg(theme.text_muted)),
                Span::styled("Shift+Tab", Style::default().fg(theme.accent)),
                Span::styled(" category  ", Style::default().fg(theme.text_muted)),
                Span::styled("Up/Down", Style::default().fg(theme.accent)),
                Span::styled(" field  ", Style::default().fg(theme.text_muted)),
                Span::styled("Left/Right", Style::default().fg(theme.accent)),
                Span::styled(" within field  ", Style::default().fg(theme.text_muted)),
                Span::styled("Space", Style::default().fg(theme.accent)),
                Span::styled(" toggle  ", Style::default().fg(theme.text_muted)),
                Span::styled("Ctrl+S", Style::default().fg(theme.accent)),
                Span::styled(" save  ", Style::default().fg(theme.text_muted)),
                Span::styled("Esc", Style::default().fg(theme.accent)),
                Span::styled(" quit", Style::default().fg(theme.text_muted)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }
}
