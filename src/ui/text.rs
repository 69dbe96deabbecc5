//! Text screen rendering and modals.
//!
//! Contains the samples table, the quick analysis panel, the text preview,
//! and the text actions menu.
//!
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::app::ops::TextOp;
use crate::app::{AppState, ModalState};
use crate::text;

/// Render the samples table and manage selection/pagination state.
pub fn render_samples_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }

    let start = (app.selected_sample_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.samples.len());
    let slice = &app.samples[start.min(end)..end];

    let rows = slice.iter().enumerate().map(|(i, s)| {
        let absolute_index = start + i;
        let style = if absolute_index == app.selected_sample_index {
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![
            Cell::from(s.key.to_string()),
            Cell::from(s.name.clone()),
            Cell::from(text::count_characters(&s.text).to_string()),
            Cell::from(text::count_words(&s.text).to_string()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(100),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    let header = Row::new(vec!["#", "SAMPLE", "CHARS", "WORDS"])
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let title = match app.selected_sample() {
        Some(s) => format!("Samples - {}", s.name),
        None => "Samples".to_string(),
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Render quick facts about the selected sample.
pub fn render_sample_analysis(f: &mut Frame, area: Rect, app: &AppState) {
    let body = match app.selected_sample() {
        Some(s) => {
            let (vowels, consonants) = text::count_vowels_and_consonants(&s.text);
            let emails = text::extract_email_addresses(&s.text);
            let dates = text::extract_dates(&s.text);
            format!(
                "Characters: {}\nWords: {}\nVowels: {vowels}  Consonants: {consonants}\nPalindrome: {}\nEmails: {}\nDates: {}",
                text::count_characters(&s.text),
                text::count_words(&s.text),
                if text::is_palindrome(&s.text) { "yes" } else { "no" },
                emails.len(),
                dates.len(),
            )
        }
        None => "No sample selected".to_string(),
    };
    let p = Paragraph::new(body).style(Style::default().fg(app.theme.text)).block(
        Block::default()
            .title("Analysis")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

/// Render the full text of the selected sample.
pub fn render_sample_text(f: &mut Frame, area: Rect, app: &AppState) {
    let body = app.selected_sample().map(|s| s.text.clone()).unwrap_or_default();
    let p = Paragraph::new(body)
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Text")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Render the text actions menu.
pub fn render_text_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::TextActions { selected, offset } = state {
        let labels: Vec<&str> = TextOp::ALL.iter().map(|op| op.label()).collect();
        let title = match app.selected_sample() {
            Some(s) => format!("Text actions - {}", s.name),
            None => "Text actions".to_string(),
        };
        crate::ui::components::render_menu(f, area, app, &title, &labels, *selected, *offset);
    }
}
