//! Shared UI components (status bar, modal helpers).
//!
//! Contains small building blocks reused by the text and network screens.
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{ActiveTab, AppState, InputMode, ModalState};

/// Render the bottom status bar with mode and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::SearchText => "SEARCH(samples)",
        InputMode::SearchNetwork => "SEARCH(groups)",
        InputMode::Modal => "MODAL",
    };
    let selection = match app.active_tab {
        ActiveTab::Text => app
            .selected_sample()
            .map(|_| format!("sample {}/{}", app.selected_sample_index + 1, app.samples.len())),
        ActiveTab::Network => app
            .selected_group()
            .map(|_| format!("group {}/{}", app.selected_group_index + 1, app.groups.len())),
    }
    .unwrap_or_else(|| "no selection".to_string());
    let msg = format!("mode: {mode}  {selection}  rows/page:{}", app.rows_per_page);
    let p = Paragraph::new(msg).style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}

/// Convert a size computed in `usize` to a cell count no larger than `max`.
fn cells(n: usize, max: u16) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX).min(max)
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render a selectable list of labels in a centered box.
///
/// The view scrolls so the selected row stays visible.
pub fn render_menu(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    title: &str,
    labels: &[&str],
    selected: usize,
    offset: usize,
) {
    let widest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = cells(
        widest.saturating_add(8).max(title.chars().count().saturating_add(6)),
        area.width.saturating_sub(4),
    );
    let height = cells(labels.len().saturating_add(2), area.height.saturating_sub(4)).max(3);
    let rect = centered_rect(width, height, area);

    let visible = rect.height.saturating_sub(2).max(1) as usize;
    let mut off = offset.min(labels.len().saturating_sub(1));
    if selected >= off + visible {
        off = selected + 1 - visible;
    }

    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .skip(off)
        .take(visible)
        .map(|(idx, label)| {
            if idx == selected {
                Line::from(Span::styled(
                    format!("▶ {label}"),
                    Style::default()
                        .fg(app.theme.highlight_fg)
                        .bg(app.theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::raw(format!("  {label}"))
            }
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Render a generic informational modal dialog.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Info { title, message } = state {
        // Size to the longest line, wrap anything wider than the screen
        let max_w = area.width.saturating_sub(6).max(30);
        let longest = message.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = cells(longest.saturating_add(4), max_w).max(40u16.min(max_w));
        let inner_w = width.saturating_sub(2).max(1) as usize;
        let wrapped: usize = message
            .lines()
            .map(|l| l.chars().count().div_ceil(inner_w).max(1))
            .sum();
        let max_h = area.height.saturating_sub(4).max(5);
        let height = cells(wrapped.saturating_add(2), max_h).max(5);
        let rect = centered_rect(width, height, area);
        let p = Paragraph::new(message.clone())
            .style(Style::default().fg(app.theme.text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}

/// Render the argument prompt with one line per field.
pub fn render_prompt_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Prompt { target, values, field } = state {
        let labels = target.labels();
        let width = 64u16.min(area.width.saturating_sub(4)).max(30);
        let height = cells(labels.len().saturating_mul(2).saturating_add(4), area.height.saturating_sub(2));
        let rect = centered_rect(width, height, area);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, label) in labels.iter().enumerate() {
            let value = values.get(idx).map(String::as_str).unwrap_or("");
            let label_style = if idx == *field {
                Style::default().fg(app.theme.highlight_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.muted)
            };
            lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
            let cursor = if idx == *field { "_" } else { "" };
            lines.push(Line::raw(format!("  {value}{cursor}")));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: confirm  Esc: cancel",
            Style::default().add_modifier(Modifier::ITALIC),
        )));

        let p = Paragraph::new(lines).block(
            Block::default()
                .title(target.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}

/// Render the help modal with usage information and key tips.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let width = 72u16.min(area.width.saturating_sub(4)).max(40);
    let height = 20u16.min(area.height.saturating_sub(2)).max(10);
    let rect = centered_rect(width, height, area);

    let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::ITALIC));
    let bold = |s: &'static str| Line::from(Span::styled(s, Style::default().add_modifier(Modifier::BOLD)));
    let lines: Vec<Line> = vec![
        bold("Help"),
        Line::raw(""),
        Line::from(vec![Span::raw("Navigation: "), key("Arrow keys / h j k l")]),
        Line::from(vec![
            Span::raw("Search: "),
            key("/"),
            Span::raw(" to start; type and Enter to apply; Esc to clear"),
        ]),
        Line::from(vec![Span::raw("Switch tab: "), key("Tab")]),
        Line::from(vec![Span::raw("Open actions for selection: "), key("Enter")]),
        Line::from(vec![Span::raw("Open this help: "), key("?")]),
        Line::from(vec![Span::raw("Quit: "), key("q")]),
        Line::raw(""),
        bold("Text tab"),
        Line::from(vec![Span::raw("Add custom text sample: "), key("c")]),
        Line::raw("Actions run on the selected sample."),
        Line::raw(""),
        bold("Network tab"),
        Line::raw("Actions run on the selected group; user names are typed in prompts."),
        Line::raw(""),
        Line::from(vec![Span::raw("Close dialogs: "), key("Esc / Enter")]),
    ];

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
