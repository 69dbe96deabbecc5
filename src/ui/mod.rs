pub mod components;
pub mod network;
pub mod text;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{ActiveTab, AppState, InputMode, ModalState};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(root[1]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)].as_ref())
        .split(body[1]);

    let who = users::get_current_username()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    let tabs = match app.active_tab {
        ActiveTab::Text => "[Text]  Network",
        ActiveTab::Network => "Text  [Network]",
    };
    let prompt = match app.input_mode {
        InputMode::SearchText => format!("  Search samples: {}", app.search_query),
        InputMode::SearchNetwork => format!("  Search groups: {}", app.search_query),
        InputMode::Normal | InputMode::Modal => String::new(),
    };
    let counts = match app.active_tab {
        ActiveTab::Text => format!("samples:{}", app.samples.len()),
        ActiveTab::Network => format!(
            "groups:{}  users:{}",
            app.groups.len(),
            app.network.all_users().len()
        ),
    };
    let p = Paragraph::new(format!(
        "textnet ({who})  {tabs}{prompt}  {counts}  Tab: switch tab; Enter: actions; /: search; ?: help; q: quit"
    ))
    .block(
        Block::default()
            .title("textnet")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    match app.active_tab {
        ActiveTab::Text => {
            text::render_samples_table(f, body[0], app);
            text::render_sample_analysis(f, right[0], app);
            text::render_sample_text(f, right[1], app);
        }
        ActiveTab::Network => {
            network::render_groups_table(f, body[0], app);
            network::render_group_details(f, right[0], app);
            network::render_member_connections(f, right[1], app);
        }
    }

    components::render_status_bar(f, root[2], app);

    if app.modal.is_some() {
        render_modal(f, f.area(), app);
    }
}

fn render_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(state) = app.modal.as_ref() else { return };
    match state {
        ModalState::TextActions { .. } => text::render_text_modal(f, area, app, state),
        ModalState::NetworkActions { .. } | ModalState::GroupPicker { .. } => {
            network::render_network_modal(f, area, app, state)
        }
        ModalState::Prompt { .. } => components::render_prompt_modal(f, area, app, state),
        ModalState::Info { .. } => components::render_info_modal(f, area, app, state),
        ModalState::Help => components::render_help_modal(f, area, app),
    }
}
