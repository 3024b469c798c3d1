use ratatui::style::Color;
use uuid::Uuid;

// ============================================================
// Wish
// ============================================================

/// A single wishlist item. The `id` is generated at creation (or at load)
/// and is never persisted; it exists so that edit/complete/delete can
/// address an item unambiguously even when two items share all visible
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Wish {
    pub id: Uuid,
    pub name: String,
    pub price: Option<String>,
    pub photo: Option<String>,
    pub completed: bool,
}

impl Wish {
    pub fn new(name: String, price: Option<String>, photo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            photo,
            completed: false,
        }
    }
}

// ============================================================
// View
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Wishes,
    Archive,
}

impl ViewMode {
    pub fn label(&self) -> &str {
        match self {
            ViewMode::Wishes => "Wishes",
            ViewMode::Archive => "Archive",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "archive" => ViewMode::Archive,
            _ => ViewMode::Wishes,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewMode::Wishes => "wishes",
            ViewMode::Archive => "archive",
        }
    }
}

// ============================================================
// Theme
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeName {
    Dark,
    Light,
}

impl ThemeName {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeName::Light,
            _ => ThemeName::Dark,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeName::Dark => "Dark",
            ThemeName::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub fg: Color,
    pub border: Color,
    pub border_selected: Color,
    pub title: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub done: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme {
                fg: Color::White,
                border: Color::DarkGray,
                border_selected: Color::Cyan,
                title: Color::Cyan,
                muted: Color::DarkGray,
                accent: Color::Yellow,
                danger: Color::Red,
                done: Color::Green,
            },
            ThemeName::Light => Theme {
                fg: Color::Black,
                border: Color::Gray,
                border_selected: Color::Blue,
                title: Color::Blue,
                muted: Color::Gray,
                accent: Color::Magenta,
                danger: Color::Red,
                done: Color::Green,
            },
        }
    }
}
