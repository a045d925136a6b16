//! Editor pane: renders the visible section's cards and handles per-widget
//! keyboard input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};
use crate::form::{CardItem, Control, Widget};

/// Dispatches one key press against the application state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.save(),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Left => move_inner(app, -1),
        KeyCode::Right => move_inner(app, 1),
        KeyCode::Enter => {
            if let Some(widget) = app.selected_widget_mut() {
                widget.commit_draft();
            }
            app.reset_inner();
        }
        KeyCode::Delete => delete_chip(app),
        KeyCode::Backspace => backspace(app),
        KeyCode::Char(c) => type_char(app, c),
        _ => {}
    }
}

/// Moves the cursor within the selected widget: range halves, network
/// entries, chips. For selects, Left/Right change the choice itself.
fn move_inner(app: &mut App, delta: isize) {
    let inner = app.inner;
    let Some(widget) = app.selected_widget_mut() else {
        return;
    };
    let last = match &widget.control {
        Control::Range { .. } => 1,
        Control::Network { entries } => entries.len().saturating_sub(1),
        // chips.len() is the draft entry position
        Control::Tags { chips, .. } => chips.len(),
        Control::Select { .. } => {
            widget.cycle_select(delta);
            return;
        }
        _ => 0,
    };
    app.inner = (inner as isize)
        .saturating_add(delta)
        .clamp(0, last as isize) as usize;
}

/// Removes the chip under the cursor; each chip deletes only itself.
fn delete_chip(app: &mut App) {
    let inner = app.inner;
    let Some(widget) = app.selected_widget_mut() else {
        return;
    };
    let removable =
        matches!(&widget.control, Control::Tags { chips, .. } if inner < chips.len());
    if removable {
        widget.remove_chip(inner);
        app.reset_inner();
    }
}

fn backspace(app: &mut App) {
    let inner = app.inner;
    let mut chips_changed = false;
    if let Some(widget) = app.selected_widget_mut() {
        match &mut widget.control {
            Control::Text { value, .. } | Control::CommaList { value, .. } => {
                value.pop();
            }
            Control::Range { min, max, .. } => {
                if inner == 0 {
                    min.pop();
                } else {
                    max.pop();
                }
            }
            Control::Tags { chips, draft, .. } => {
                // Backspace on an empty draft removes the last chip.
                if draft.pop().is_none() {
                    chips.pop();
                    chips_changed = true;
                }
            }
            _ => {}
        }
    }
    if chips_changed {
        app.reset_inner();
    }
}

fn type_char(app: &mut App, c: char) {
    let inner = app.inner;
    let Some(widget) = app.selected_widget_mut() else {
        return;
    };

    // In space-delimited mode, Space commits the draft like Enter.
    if c == ' '
        && matches!(
            &widget.control,
            Control::Tags { space_delimited: true, .. }
        )
    {
        widget.commit_draft();
        app.reset_inner();
        return;
    }

    match &mut widget.control {
        Control::Text { value, .. } | Control::CommaList { value, .. } => value.push(c),
        Control::Range { min, max, .. } => {
            if inner == 0 {
                min.push(c);
            } else {
                max.push(c);
            }
        }
        Control::Tags { draft, .. } => draft.push(c),
        Control::Toggle { checked } => {
            if c == ' ' {
                *checked = !*checked;
            }
        }
        Control::Network { entries } => {
            if c == ' ' {
                if let Some(entry) = entries.get_mut(inner) {
                    entry.checked = !entry.checked;
                }
            }
        }
        Control::Select { .. } => {}
    }
}

/// Renders the visible section's cards, keeping the selection in view.
pub fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(section) = app.form.sections.get(app.form.visible_section()) else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut widget_index = 0usize;

    if section.cards.is_empty() {
        lines.push(Line::from(Span::styled(
            "No settings in this category",
            Style::default().fg(theme.text_muted),
        )));
    }

    for card in &section.cards {
        lines.push(Line::from(Span::styled(
            format!("▸ {}", card.title),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &card.items {
            match item {
                CardItem::GroupLabel(label) => {
                    lines.push(Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                CardItem::Field(widget) => {
                    let selected = widget_index == app.selected;
                    if selected {
                        selected_line = lines.len();
                    }
                    let inner = if selected { app.inner } else { usize::MAX };
                    lines.push(widget_line(widget, selected, inner, theme));
                    widget_index += 1;
                }
            }
        }
        lines.push(Line::default());
    }

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = selected_line.saturating_sub(viewport.saturating_sub(1).max(1));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(section.title),
        )
        .scroll((offset as u16, 0));
    f.render_widget(paragraph, area);
}

/// One display line for a widget: label plus a per-kind value rendering.
fn widget_line<'a>(widget: &'a Widget, selected: bool, inner: usize, theme: &Theme) -> Line<'a> {
    let label_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if selected {
        Style::default().fg(theme.text).bg(theme.highlight_bg)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let focus_style = value_style.add_modifier(Modifier::UNDERLINED);

    let mut spans = vec![
        Span::styled(if selected { "› " } else { "  " }, label_style),
        Span::styled(format!("{}: ", widget.label), label_style),
    ];

    match &widget.control {
        Control::Text { value, secret, .. } => {
            let shown = if *secret {
                "•".repeat(value.chars().count())
            } else {
                value.clone()
            };
            spans.push(Span::styled(shown, value_style));
            if selected {
                spans.push(Span::styled("▏", focus_style));
            }
        }
        Control::Toggle { checked } => {
            spans.push(Span::styled(
                if *checked { "[x]" } else { "[ ]" },
                value_style,
            ));
        }
        Control::Range { min, max, .. } => {
            spans.push(Span::styled(
                min.clone(),
                if inner == 0 { focus_style } else { value_style },
            ));
            spans.push(Span::styled(" - ", value_style));
            spans.push(Span::styled(
                max.clone(),
                if inner == 1 { focus_style } else { value_style },
            ));
        }
        Control::CommaList { value, .. } => {
            spans.push(Span::styled(value.clone(), value_style));
            if selected {
                spans.push(Span::styled("▏", focus_style));
            }
        }
        Control::Tags { chips, draft, .. } => {
            for (i, chip) in chips.iter().enumerate() {
                let style = if i == inner {
                    value_style.add_modifier(Modifier::REVERSED)
                } else {
                    value_style
                };
                spans.push(Span::styled(format!(" {chip} ×"), style));
                spans.push(Span::raw(" "));
            }
            let draft_style = if inner == chips.len() {
                focus_style
            } else {
                value_style
            };
            spans.push(Span::styled(format!("{draft}▏"), draft_style));
        }
        Control::Network { entries } => {
            for (i, entry) in entries.iter().enumerate() {
                let style = if i == inner { focus_style } else { value_style };
                spans.push(Span::styled(
                    format!("[{}] {}  ", if entry.checked { "x" } else { " " }, entry.name),
                    style,
                ));
            }
        }
        Control::Select { options, selected: choice } => {
            let shown = (*choice)
                .and_then(|i| options.get(i))
                .map_or("(none)", String::as_str);
            spans.push(Span::styled(format!("◂ {shown} ▸"), value_style));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ConfigClient;
    use crate::form::{Card, CardItem, FormModel, Section};
    use crate::path::FieldPath;

    fn app_with(widget: crate::form::Widget) -> App {
        let mut app = App {
            client: ConfigClient::new("http://127.0.0.1:0").expect("client"),
            form: FormModel {
                sections: vec![Section {
                    id: "settings",
                    title: "Settings",
                    icon: "cog",
                    visible: true,
                    cards: vec![Card {
                        title: "Account Settings".to_string(),
                        icon: "users".to_string(),
                        items: vec![CardItem::Field(widget)],
                    }],
                }],
            },
            theme: Theme::default(),
            selected: 0,
            inner: 0,
            notification: None,
            should_quit: false,
        };
        app.reset_inner();
        app
    }

    fn tag_widget(space_delimited: bool, draft: &str) -> crate::form::Widget {
        crate::form::Widget {
            path: FieldPath::key("SETTINGS").child("EXACT_ACCOUNTS_TO_USE"),
            label: "Exact accounts to use".to_string(),
            control: Control::Tags {
                chips: vec!["1".to_string()],
                draft: draft.to_string(),
                space_delimited,
                numeric: true,
            },
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_space_commits_draft_in_space_delimited_mode() {
        let mut app = app_with(tag_widget(true, "7"));
        press(&mut app, KeyCode::Char(' '));

        let Some(Control::Tags { chips, draft, .. }) =
            app.selected_widget().map(|w| &w.control)
        else {
            panic!("expected tag control");
        };
        assert_eq!(chips, &["1", "7"]);
        assert!(draft.is_empty());
        // The cursor follows the draft entry past the new chip.
        assert_eq!(app.inner, 2);
    }

    #[test]
    fn test_space_types_into_draft_without_space_delimiting() {
        let mut app = app_with(tag_widget(false, "a"));
        press(&mut app, KeyCode::Char(' '));

        let Some(Control::Tags { chips, draft, .. }) =
            app.selected_widget().map(|w| &w.control)
        else {
            panic!("expected tag control");
        };
        assert_eq!(chips, &["1"]);
        assert_eq!(draft, "a ");
    }

    #[test]
    fn test_enter_commits_draft_in_either_mode() {
        for space_delimited in [false, true] {
            let mut app = app_with(tag_widget(space_delimited, "9"));
            press(&mut app, KeyCode::Enter);

            let Some(Control::Tags { chips, draft, .. }) =
                app.selected_widget().map(|w| &w.control)
            else {
                panic!("expected tag control");
            };
            assert_eq!(chips, &["1", "9"]);
            assert!(draft.is_empty());
        }
    }
}
