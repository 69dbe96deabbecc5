// Integration tests for textnet

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    path.push(format!("textnet_it_{tag}_{}_{}", std::process::id(), nonce));
    path
}

// 1) Theme config roundtrip and init
#[test]
fn theme_roundtrip_and_init() {
    use std::fs;
    use textnet::app::Theme;

    let path_str = tmp_path("theme.conf").to_string_lossy().to_string();

    // Roundtrip write/read
    let t = Theme::mocha();
    t.write_file(&path_str).expect("write theme");
    let t2 = Theme::from_file(&path_str).expect("read theme");
    assert_eq!(t.text, t2.text);
    assert_eq!(t.title, t2.title);
    assert_eq!(t.header_bg, t2.header_bg);

    // load_or_init creates file if missing
    let p2_str = tmp_path("theme_init.conf").to_string_lossy().to_string();
    let _ = fs::remove_file(&p2_str);
    let _created = Theme::load_or_init(&p2_str);
    assert!(PathBuf::from(&p2_str).exists());

    let _ = fs::remove_file(&path_str);
    let _ = fs::remove_file(&p2_str);
}

// 2) Bad colors fall back to defaults, unknown keys are ignored
#[test]
fn theme_ignores_bad_entries() {
    use ratatui::style::Color;
    use std::fs;
    use textnet::app::Theme;

    let path = tmp_path("theme_bad.conf");
    fs::write(&path, "# comment\ntitle = #112233\ntext = not-a-color\nmystery = #000000\nborder=reset\n").unwrap();
    let t = Theme::from_file(&path.to_string_lossy()).expect("read theme");
    let _ = fs::remove_file(&path);

    assert_eq!(t.title, Color::Rgb(0x11, 0x22, 0x33));
    assert_eq!(t.text, Theme::mocha().text);
    assert_eq!(t.border, Color::Reset);
    assert_eq!(Theme::parse_color("12345"), None);
}

// 3) Loaded files drive the network operations
#[test]
fn loaded_network_files_feed_operations() {
    use std::fs;
    use textnet::app::ops::NetworkOp;
    use textnet::samples::{NetworkData, parse_connections_file, parse_group_file};

    let groups_path = tmp_path("groups");
    let conns_path = tmp_path("conns");
    fs::write(&groups_path, "devs: ann, bob, cat\nops: cat, dan\n").unwrap();
    fs::write(&conns_path, "ann: bob\nbob: ann, cat\ncat: bob\n").unwrap();

    let net = NetworkData {
        groups: parse_group_file(&groups_path).unwrap(),
        connections: parse_connections_file(&conns_path).unwrap(),
        ..NetworkData::default()
    };
    let _ = fs::remove_file(&groups_path);
    let _ = fs::remove_file(&conns_path);

    let devs = net.group("devs").unwrap().clone();
    let ops = net.group("ops").unwrap().clone();

    // 4 of 6 possible directed edges
    let out = NetworkOp::Density.run(&net, &devs, None, &[]).unwrap();
    assert_eq!(out, "Density of devs: 0.667");

    let out = NetworkOp::Isolated.run(&net, &ops, None, &[]).unwrap();
    assert_eq!(out, "Isolated in ops (1): dan");

    let out = NetworkOp::BridgeUsers.run(&net, &devs, None, &[]).unwrap();
    assert_eq!(out, "cat: devs, ops");

    let args = vec!["ann".to_string(), "cat".to_string()];
    let out = NetworkOp::SecondDegree.run(&net, &devs, None, &args).unwrap();
    assert!(out.starts_with("Yes"));
}

// 4) Search narrows the list and actions run on the filtered selection
#[test]
fn search_then_run_action_on_filtered_sample() {
    use crossterm::event::KeyCode;
    use textnet::app::update::handle_key;
    use textnet::app::{AppState, InputMode, ModalState};

    let mut app = AppState::default();
    handle_key(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::SearchText);
    for c in "log".chars() {
        handle_key(&mut app, KeyCode::Char(c));
    }
    handle_key(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.samples.len(), 1);

    // Open actions and pick "Extract dates"
    handle_key(&mut app, KeyCode::Enter);
    for _ in 0..13 {
        handle_key(&mut app, KeyCode::Down);
    }
    handle_key(&mut app, KeyCode::Enter);
    match &app.modal {
        Some(ModalState::Info { title, message }) => {
            assert_eq!(title, "Extract dates");
            assert!(message.starts_with("Sample: Log Entry"));
            assert!(message.ends_with("2023-03-15"));
        }
        other => panic!("expected result dialog, got {other:?}"),
    }

    // Closing the dialog keeps the filter, Esc in search mode clears it
    handle_key(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
    handle_key(&mut app, KeyCode::Char('/'));
    handle_key(&mut app, KeyCode::Esc);
    assert_eq!(app.samples.len(), 11);
}

// 5) Network prompts report errors without leaving the loop
#[test]
fn network_prompt_error_then_success() {
    use crossterm::event::KeyCode;
    use textnet::app::update::handle_key;
    use textnet::app::{ActiveTab, AppState, ModalState};

    let mut app = AppState::default();
    handle_key(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab, ActiveTab::Network);

    let type_str = |app: &mut AppState, s: &str| {
        for c in s.chars() {
            handle_key(app, KeyCode::Char(c));
        }
    };

    // "Mutual connections" is the second network action
    handle_key(&mut app, KeyCode::Enter);
    handle_key(&mut app, KeyCode::Down);
    handle_key(&mut app, KeyCode::Enter);
    type_str(&mut app, "user1");
    handle_key(&mut app, KeyCode::Tab);
    type_str(&mut app, "user9");
    handle_key(&mut app, KeyCode::Enter);
    match &app.modal {
        Some(ModalState::Info { message, .. }) => {
            assert_eq!(message, "Error: User user9 not found in connections");
        }
        other => panic!("expected error dialog, got {other:?}"),
    }
    assert!(!handle_key(&mut app, KeyCode::Enter));

    handle_key(&mut app, KeyCode::Enter);
    handle_key(&mut app, KeyCode::Down);
    handle_key(&mut app, KeyCode::Enter);
    type_str(&mut app, "user1");
    handle_key(&mut app, KeyCode::Enter);
    type_str(&mut app, "user5");
    handle_key(&mut app, KeyCode::Enter);
    match &app.modal {
        Some(ModalState::Info { message, .. }) => {
            assert_eq!(message, "Mutual connections of user1 and user5 (1): user3");
        }
        other => panic!("expected result dialog, got {other:?}"),
    }
}

// 6) Text files are added as samples
#[test]
fn text_file_becomes_a_sample() {
    use std::fs;
    use textnet::app::AppState;
    use textnet::app::Theme;
    use textnet::samples::{load_text_sample, sample_network, text_samples};

    let path = tmp_path("notes.txt");
    fs::write(&path, "Meeting on 2024-02-30 with ops@example.org").unwrap();
    let mut texts = text_samples();
    texts.push(load_text_sample(&path, texts.len() + 1).unwrap());
    let _ = fs::remove_file(&path);

    let mut app = AppState::new(texts, sample_network(), Theme::dark());
    app.selected_sample_index = 11;
    let sample = app.selected_sample().unwrap();
    assert_eq!(sample.key, 12);
    assert_eq!(textnet::text::extract_dates(&sample.text), vec!["2024-02-30"]);
    assert_eq!(textnet::text::extract_email_addresses(&sample.text), vec!["ops@example.org"]);
}
