//! Application state types and entry glue.
//!
//! Defines enums and structs that model the TUI state, the theme
//! configuration file, and re-exports the event loop as `run`.
//!
pub mod ops;
pub mod update;

use ratatui::style::Color;

use crate::samples::{self, NamedGroup, NetworkData, TextSample};
use ops::{NetworkOp, TextOp};

/// Top-level active tab in the UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Text,
    Network,
}

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    SearchText,
    SearchNetwork,
    Modal,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else { continue };
            let (key, val) = (key.trim(), val.trim());
            let Some(color) = Self::parse_color(val) else {
                tracing::warn!(path, key, val, "ignoring unparsable theme color");
                continue;
            };
            match key {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight_fg" => theme.highlight_fg = color,
                "highlight_bg" => theme.highlight_bg = color,
                _ => {}
            }
        }

        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or the name "reset".
    pub fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(&lower);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# textnet theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                Color::Reset => "reset".to_string(),
                // Named colors are written as their closest hex value
                Color::Black => "#000000".to_string(),
                Color::Red => "#FF0000".to_string(),
                Color::Green => "#00FF00".to_string(),
                Color::Yellow => "#FFFF00".to_string(),
                Color::Blue => "#0000FF".to_string(),
                Color::Magenta => "#FF00FF".to_string(),
                Color::Cyan => "#00FFFF".to_string(),
                Color::Gray => "#B3B3B3".to_string(),
                Color::DarkGray => "#4D4D4D".to_string(),
                Color::LightRed => "#FF6666".to_string(),
                Color::LightGreen => "#66FF66".to_string(),
                Color::LightYellow => "#FFFF66".to_string(),
                Color::LightBlue => "#6666FF".to_string(),
                Color::LightMagenta => "#FF66FF".to_string(),
                Color::LightCyan => "#66FFFF".to_string(),
                Color::White => "#FFFFFF".to_string(),
                Color::Indexed(_) => "reset".to_string(),
            }
        }

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };

        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("highlight_fg", self.highlight_fg);
        kv("highlight_bg", self.highlight_bg);

        std::fs::write(path, buf)
    }

    /// Load the theme at `path`, or write the default there and return it.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(err) = t.write_file(path) {
            tracing::warn!(path, %err, "could not write default theme");
        }
        t
    }
}

/// Which arguments a prompt dialog is collecting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptTarget {
    Text(TextOp),
    Network { op: NetworkOp, other_group: Option<usize> },
    CustomText,
}

impl PromptTarget {
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            PromptTarget::Text(op) => op.prompts(),
            PromptTarget::Network { op, .. } => op.prompts(),
            PromptTarget::CustomText => &["Custom text"],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PromptTarget::Text(op) => op.label(),
            PromptTarget::Network { op, .. } => op.label(),
            PromptTarget::CustomText => "Add custom text",
        }
    }
}

/// Modal dialog states.
#[derive(Clone, Debug)]
pub enum ModalState {
    TextActions {
        selected: usize,
        offset: usize,
    },
    NetworkActions {
        selected: usize,
        offset: usize,
    },
    GroupPicker {
        op: NetworkOp,
        selected: usize,
    },
    Prompt {
        target: PromptTarget,
        values: Vec<String>,
        field: usize,
    },
    Info {
        title: String,
        message: String,
    },
    Help,
}

pub struct AppState {
    pub samples_all: Vec<TextSample>,
    pub samples: Vec<TextSample>,
    pub network: NetworkData,
    pub groups: Vec<NamedGroup>,
    pub active_tab: ActiveTab,
    pub selected_sample_index: usize,
    pub selected_group_index: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub modal: Option<ModalState>,
}

impl AppState {
    pub fn new(samples: Vec<TextSample>, network: NetworkData, theme: Theme) -> Self {
        Self {
            samples: samples.clone(),
            samples_all: samples,
            groups: network.groups.clone(),
            network,
            active_tab: ActiveTab::Text,
            selected_sample_index: 0,
            selected_group_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            modal: None,
        }
    }

    pub fn selected_sample(&self) -> Option<&TextSample> {
        self.samples.get(self.selected_sample_index)
    }

    pub fn selected_group(&self) -> Option<&NamedGroup> {
        self.groups.get(self.selected_group_index)
    }

    /// Append a custom sample, clear any search and select it.
    pub fn add_custom_sample(&mut self, text: String) {
        let key = self.samples_all.iter().map(|s| s.key).max().unwrap_or(0) + 1;
        let name = format!("Custom {key}");
        self.samples_all.push(TextSample { key, name, text });
        self.samples = self.samples_all.clone();
        self.search_query.clear();
        self.selected_sample_index = self.samples.len() - 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(samples::text_samples(), samples::sample_network(), Theme::mocha())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
