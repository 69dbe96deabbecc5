use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

use crate::app::ops::{NetworkOp, TextOp};
use crate::app::{ActiveTab, AppState, InputMode, ModalState, PromptTarget};
use crate::search::apply_search;
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }

    tracing::info!("leaving event loop");
    Ok(())
}

/// Apply one key press to the state. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match app.input_mode {
        InputMode::Normal => return handle_normal_key(app, code),
        InputMode::Modal => handle_modal_key(app, code),
        InputMode::SearchText | InputMode::SearchNetwork => match code {
            KeyCode::Enter => {
                apply_search(app);
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                app.search_query.clear();
                apply_search(app);
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                app.search_query.pop();
            }
            KeyCode::Char(c) => app.search_query.push(c),
            _ => {}
        },
    }
    false
}

fn handle_normal_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => {
            app.search_query.clear();
            app.input_mode = match app.active_tab {
                ActiveTab::Text => InputMode::SearchText,
                ActiveTab::Network => InputMode::SearchNetwork,
            };
        }
        KeyCode::Tab => {
            app.active_tab = match app.active_tab {
                ActiveTab::Text => ActiveTab::Network,
                ActiveTab::Network => ActiveTab::Text,
            };
        }
        KeyCode::Char('?') => open_modal(app, ModalState::Help),
        KeyCode::Char('c') if app.active_tab == ActiveTab::Text => {
            open_prompt(app, PromptTarget::CustomText);
        }
        KeyCode::Enter => match app.active_tab {
            ActiveTab::Text => {
                if !app.samples.is_empty() {
                    open_modal(app, ModalState::TextActions { selected: 0, offset: 0 });
                }
            }
            ActiveTab::Network => {
                if !app.groups.is_empty() {
                    open_modal(app, ModalState::NetworkActions { selected: 0, offset: 0 });
                }
            }
        },
        KeyCode::Up | KeyCode::Char('k') => navigate(app, |idx, _, _| idx.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => {
            navigate(app, |idx, len, _| if idx + 1 < len { idx + 1 } else { idx })
        }
        KeyCode::Left | KeyCode::Char('h') => navigate(app, |idx, _, rpp| idx.saturating_sub(rpp)),
        KeyCode::Right | KeyCode::Char('l') => {
            navigate(app, |idx, len, rpp| idx.saturating_add(rpp).min(len.saturating_sub(1)))
        }
        _ => {}
    }
    false
}

/// Move the active tab's selection with `step(index, len, rows_per_page)`.
fn navigate(app: &mut AppState, step: impl FnOnce(usize, usize, usize) -> usize) {
    let rpp = app.rows_per_page.max(1);
    let (idx, len) = match app.active_tab {
        ActiveTab::Text => (&mut app.selected_sample_index, app.samples.len()),
        ActiveTab::Network => (&mut app.selected_group_index, app.groups.len()),
    };
    if len > 0 {
        *idx = step(*idx, len, rpp);
    }
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    let Some(mut modal) = app.modal.take() else {
        app.input_mode = InputMode::Normal;
        return;
    };
    if code == KeyCode::Esc {
        close_modal(app);
        return;
    }

    match &mut modal {
        ModalState::TextActions { selected, offset } => {
            if code == KeyCode::Enter {
                let op = TextOp::ALL[*selected];
                start_text_op(app, op);
                return;
            }
            step_list(selected, offset, TextOp::ALL.len(), code);
        }
        ModalState::NetworkActions { selected, offset } => {
            if code == KeyCode::Enter {
                let op = NetworkOp::ALL[*selected];
                start_network_op(app, op);
                return;
            }
            step_list(selected, offset, NetworkOp::ALL.len(), code);
        }
        ModalState::GroupPicker { op, selected } => {
            if code == KeyCode::Enter {
                let (op, other) = (*op, *selected);
                if op.prompts().is_empty() {
                    run_network_op(app, op, Some(other), &[]);
                } else {
                    open_prompt(app, PromptTarget::Network { op, other_group: Some(other) });
                }
                return;
            }
            let mut unused_offset = 0;
            step_list(selected, &mut unused_offset, app.network.groups.len(), code);
        }
        ModalState::Prompt { target, values, field } => {
            let fields = values.len().max(1);
            match code {
                KeyCode::Enter if *field + 1 < fields => *field += 1,
                KeyCode::Enter => {
                    let (target, values) = (*target, std::mem::take(values));
                    submit_prompt(app, target, values);
                    return;
                }
                KeyCode::Tab | KeyCode::Down => *field = (*field + 1) % fields,
                KeyCode::BackTab | KeyCode::Up => *field = (*field + fields - 1) % fields,
                KeyCode::Backspace => {
                    if let Some(v) = values.get_mut(*field) {
                        v.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(v) = values.get_mut(*field) {
                        v.push(c);
                    }
                }
                _ => {}
            }
        }
        ModalState::Info { .. } | ModalState::Help => {
            if code == KeyCode::Enter {
                close_modal(app);
                return;
            }
        }
    }
    app.modal = Some(modal);
}

fn step_list(selected: &mut usize, offset: &mut usize, total: usize, code: KeyCode) {
    const PAGE: usize = 10;
    match code {
        KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < total {
                *selected += 1;
            }
        }
        KeyCode::PageUp => *selected = selected.saturating_sub(PAGE),
        KeyCode::PageDown => *selected = (*selected + PAGE).min(total.saturating_sub(1)),
        _ => {}
    }
    if *selected < *offset {
        *offset = *selected;
    }
}

fn open_modal(app: &mut AppState, state: ModalState) {
    app.modal = Some(state);
    app.input_mode = InputMode::Modal;
}

fn open_prompt(app: &mut AppState, target: PromptTarget) {
    let values = vec![String::new(); target.labels().len()];
    open_modal(app, ModalState::Prompt { target, values, field: 0 });
}

fn close_modal(app: &mut AppState) {
    app.modal = None;
    app.input_mode = InputMode::Normal;
}

fn show_result(app: &mut AppState, title: &str, message: String) {
    open_modal(app, ModalState::Info { title: title.to_string(), message });
}

fn start_text_op(app: &mut AppState, op: TextOp) {
    if op.prompts().is_empty() {
        run_text_op(app, op, &[]);
    } else {
        open_prompt(app, PromptTarget::Text(op));
    }
}

fn start_network_op(app: &mut AppState, op: NetworkOp) {
    if op.needs_other_group() {
        open_modal(app, ModalState::GroupPicker { op, selected: 0 });
    } else if op.prompts().is_empty() {
        run_network_op(app, op, None, &[]);
    } else {
        open_prompt(app, PromptTarget::Network { op, other_group: None });
    }
}

fn submit_prompt(app: &mut AppState, target: PromptTarget, values: Vec<String>) {
    match target {
        PromptTarget::Text(op) => run_text_op(app, op, &values),
        PromptTarget::Network { op, other_group } => run_network_op(app, op, other_group, &values),
        PromptTarget::CustomText => {
            let text = values.into_iter().next().unwrap_or_default();
            tracing::debug!(chars = text.chars().count(), "adding custom text sample");
            app.add_custom_sample(text);
            close_modal(app);
        }
    }
}

fn run_text_op(app: &mut AppState, op: TextOp, inputs: &[String]) {
    let Some(sample) = app.selected_sample().cloned() else {
        show_result(app, op.label(), "No text sample selected".to_string());
        return;
    };
    tracing::debug!(?op, sample = %sample.name, "running text operation");
    let message = match op.run(&sample.text, inputs) {
        Ok(result) => format!("Sample: {}\n\nResult:\n{result}", sample.name),
        Err(err) => {
            tracing::warn!(?op, %err, "text operation rejected its arguments");
            format!("Error: {err}")
        }
    };
    show_result(app, op.label(), message);
}

fn run_network_op(app: &mut AppState, op: NetworkOp, other_group: Option<usize>, inputs: &[String]) {
    let Some(group) = app.selected_group().cloned() else {
        show_result(app, op.label(), "No group selected".to_string());
        return;
    };
    tracing::debug!(?op, group = %group.name, ?other_group, "running network operation");
    let other = other_group.and_then(|i| app.network.groups.get(i));
    let message = match op.run(&app.network, &group, other, inputs) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(?op, %err, "network operation rejected its arguments");
            format!("Error: {err}")
        }
    };
    show_result(app, op.label(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut AppState, keys: &[KeyCode]) {
        for &k in keys {
            handle_key(app, k);
        }
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            handle_key(app, KeyCode::Char(c));
        }
    }

    fn info_message(app: &AppState) -> String {
        match &app.modal {
            Some(ModalState::Info { message, .. }) => message.clone(),
            other => panic!("expected info modal, got {other:?}"),
        }
    }

    #[test]
    fn quit_only_from_normal_mode() {
        let mut app = AppState::default();
        handle_key(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::Modal);
        assert!(!handle_key(&mut app, KeyCode::Char('q')));
        handle_key(&mut app, KeyCode::Esc);
        assert!(handle_key(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn navigation_is_clamped() {
        let mut app = AppState::default();
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.selected_sample_index, 0);
        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.selected_sample_index, 10);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.selected_sample_index, 10);
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.selected_sample_index, 0);
    }

    #[test]
    fn text_action_without_prompt_shows_result() {
        let mut app = AppState::default();
        // Palindrome sample, "Check palindrome" is the third action.
        app.selected_sample_index = 6;
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        let msg = info_message(&app);
        assert!(msg.contains("Sample: Palindrome"));
        assert!(msg.ends_with("Yes"));
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.modal.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn prompt_errors_keep_the_loop_alive() {
        let mut app = AppState::default();
        let substring = TextOp::ALL.iter().position(|op| *op == TextOp::Substring).unwrap();
        handle_key(&mut app, KeyCode::Enter);
        for _ in 0..substring {
            handle_key(&mut app, KeyCode::Down);
        }
        handle_key(&mut app, KeyCode::Enter);
        type_str(&mut app, "start");
        press(&mut app, &[KeyCode::Enter]);
        type_str(&mut app, "3");
        press(&mut app, &[KeyCode::Enter]);
        assert!(info_message(&app).starts_with("Error: Start index must be a non-negative integer"));
    }

    #[test]
    fn network_group_picker_runs_union() {
        let mut app = AppState::default();
        handle_key(&mut app, KeyCode::Tab);
        // Tech Group, then "Members in either group" with Arts Group
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        let union = NetworkOp::ALL.iter().position(|op| *op == NetworkOp::UnionWithGroup).unwrap();
        for _ in 0..union {
            handle_key(&mut app, KeyCode::Down);
        }
        handle_key(&mut app, KeyCode::Enter);
        assert!(matches!(app.modal, Some(ModalState::GroupPicker { .. })));
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(
            info_message(&app),
            "Tech Group | Arts Group (6): user1, user10, user3, user5, user7, user8"
        );
    }

    #[test]
    fn custom_text_is_added_and_selected() {
        let mut app = AppState::default();
        handle_key(&mut app, KeyCode::Char('c'));
        type_str(&mut app, "level");
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.samples.len(), 12);
        assert_eq!(app.selected_sample().unwrap().name, "Custom 12");
        assert_eq!(app.selected_sample().unwrap().text, "level");
    }
}
