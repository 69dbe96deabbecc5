//! Network screen rendering and modals.
//!
//! Contains the groups table, the group details panel, the member connections
//! table, and the network actions and group picker menus.
//!
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::app::ops::NetworkOp;
use crate::app::{AppState, ModalState};
use crate::network;

/// Render the groups table and manage selection/pagination state.
pub fn render_groups_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }

    let start = (app.selected_group_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.groups.len());
    let slice = &app.groups[start.min(end)..end];

    let rows = slice.iter().enumerate().map(|(i, g)| {
        let absolute_index = start + i;
        let style = if absolute_index == app.selected_group_index {
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![Cell::from(g.name.clone()), Cell::from(g.members.len().to_string())]).style(style)
    });

    let widths = [Constraint::Percentage(100), Constraint::Length(8)];
    let header = Row::new(vec!["GROUP", "MEMBERS"])
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let title = match app.selected_group() {
        Some(g) => format!("Groups - {}", g.name),
        None => "Groups".to_string(),
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

/// Render the selected group's members, density and tagged users.
pub fn render_group_details(f: &mut Frame, area: Rect, app: &AppState) {
    let body = match app.selected_group() {
        Some(g) => {
            let density = network::calculate_network_density(&g.members, &app.network.connections)
                .map(|d| format!("{d:.3}"))
                .unwrap_or_else(|_| "n/a".to_string());
            let influencers: network::UserSet =
                g.members.intersection(&app.network.influencers).cloned().collect();
            let newcomers: network::UserSet =
                g.members.intersection(&app.network.new_users).cloned().collect();
            let isolated = network::find_isolated_users(&g.members, &app.network.connections);
            [
                network::format_users_for_display(&g.name, &g.members),
                format!("Density: {density}"),
                network::format_users_for_display("Influencers", &influencers),
                network::format_users_for_display("New users", &newcomers),
                network::format_users_for_display("Isolated", &isolated),
            ]
            .join("\n")
        }
        None => "No group selected".to_string(),
    };
    let p = Paragraph::new(body)
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Group Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Render each member of the selected group with their direct connections.
pub fn render_member_connections(f: &mut Frame, area: Rect, app: &AppState) {
    let members: Vec<&String> = app
        .selected_group()
        .map(|g| g.members.iter().collect())
        .unwrap_or_default();

    let visible = area.height.saturating_sub(3) as usize;
    let rows = members.iter().take(visible).map(|m| {
        let peers = app
            .network
            .connections
            .get(m.as_str())
            .map(|p| p.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
            .unwrap_or_else(|| "-".to_string());
        Row::new(vec![Cell::from(m.to_string()), Cell::from(peers)]).style(Style::default().fg(app.theme.text))
    });
    let widths = [Constraint::Length(12), Constraint::Percentage(100)];
    let header = Row::new(vec!["USER", "CONNECTIONS"])
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Member Connections")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);
    f.render_widget(table, area);
}

/// Render the network actions menu or the second-group picker.
pub fn render_network_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    match state {
        ModalState::NetworkActions { selected, offset } => {
            let labels: Vec<&str> = NetworkOp::ALL.iter().map(|op| op.label()).collect();
            let title = match app.selected_group() {
                Some(g) => format!("Network actions - {}", g.name),
                None => "Network actions".to_string(),
            };
            crate::ui::components::render_menu(f, area, app, &title, &labels, *selected, *offset);
        }
        ModalState::GroupPicker { op, selected } => {
            let labels: Vec<&str> = app.network.groups.iter().map(|g| g.name.as_str()).collect();
            let title = format!("{} - pick second group", op.label());
            crate::ui::components::render_menu(f, area, app, &title, &labels, *selected, 0);
        }
        _ => {}
    }
}
