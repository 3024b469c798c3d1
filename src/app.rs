use crate::model::{Theme, ThemeName, ViewMode, Wish};
use crate::state::ViewState;
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Name,
    Price,
    Photo,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Price => FormField::Photo,
            FormField::Photo => FormField::Name,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Normal,
    AddWish(FormField),
    EditWish(FormField),
    ConfirmDelete,
}

pub struct App {
    // Selection
    pub selected_index: usize,

    // Input
    pub input_mode: InputMode,
    pub should_quit: bool,

    // View
    pub view_mode: ViewMode,
    pub theme_name: ThemeName,
    pub theme: Theme,
    pub show_help: bool,

    // Add/edit form
    pub form_name: String,
    pub form_price: String,
    pub form_photo: String,
    pub editing_id: Option<Uuid>,
    // Filename stored on the wish when the edit form opened; an untouched
    // photo field keeps this reference instead of re-importing.
    pub editing_photo: Option<String>,

    // Status
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            input_mode: InputMode::Normal,
            should_quit: false,
            view_mode: ViewMode::Wishes,
            theme_name: ThemeName::Dark,
            theme: Theme::from_name(ThemeName::Dark),
            show_help: false,
            form_name: String::new(),
            form_price: String::new(),
            form_photo: String::new(),
            editing_id: None,
            editing_photo: None,
            status_message: None,
        }
    }

    // --- Selection ---

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = len - 1;
        }
    }

    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    // --- View ---

    pub fn switch_view(&mut self, view: ViewMode) {
        if self.view_mode != view {
            self.view_mode = view;
            self.selected_index = 0;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme_name = self.theme_name.next();
        self.theme = Theme::from_name(self.theme_name);
    }

    // --- Form ---

    pub fn start_add(&mut self) {
        self.reset_form();
        self.input_mode = InputMode::AddWish(FormField::Name);
    }

    pub fn start_edit(&mut self, wish: &Wish) {
        self.form_name = wish.name.clone();
        self.form_price = wish.price.clone().unwrap_or_default();
        self.form_photo = wish.photo.clone().unwrap_or_default();
        self.editing_id = Some(wish.id);
        self.editing_photo = wish.photo.clone();
        self.input_mode = InputMode::EditWish(FormField::Name);
    }

    pub fn reset_form(&mut self) {
        self.form_name.clear();
        self.form_price.clear();
        self.form_photo.clear();
        self.editing_id = None;
        self.editing_photo = None;
    }

    pub fn cancel_form(&mut self) {
        self.reset_form();
        self.input_mode = InputMode::Normal;
    }

    // --- Status ---

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    pub fn status_text(&self) -> Option<&str> {
        if let Some((msg, when)) = &self.status_message {
            if when.elapsed() < Duration::from_secs(5) {
                return Some(msg.as_str());
            }
        }
        None
    }

    // --- View state persistence ---

    pub fn to_view_state(&self) -> ViewState {
        ViewState {
            view: Some(self.view_mode.as_str().to_string()),
            theme_name: Some(self.theme_name.label().to_lowercase()),
            selected_index: Some(self.selected_index),
        }
    }

    pub fn restore_view_state(&mut self, state: &ViewState) {
        if let Some(ref v) = state.view {
            self.view_mode = ViewMode::from_str(v);
        }
        if let Some(ref tn) = state.theme_name {
            self.theme_name = ThemeName::from_str(tn);
            self.theme = Theme::from_name(self.theme_name);
        }
        if let Some(idx) = state.selected_index {
            self.selected_index = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_to_list_bounds() {
        let mut app = App::new();
        app.select_next(0);
        assert_eq!(app.selected_index, 0);

        app.select_next(3);
        app.select_next(3);
        app.select_next(3);
        assert_eq!(app.selected_index, 2);

        app.clamp_selection(1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn switching_view_resets_selection() {
        let mut app = App::new();
        app.select_next(5);
        app.switch_view(ViewMode::Archive);
        assert_eq!(app.selected_index, 0);
        // Same view again: selection untouched.
        app.select_next(5);
        app.switch_view(ViewMode::Archive);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn view_state_round_trips() {
        let mut app = App::new();
        app.view_mode = ViewMode::Archive;
        app.cycle_theme();
        app.selected_index = 2;

        let mut restored = App::new();
        restored.restore_view_state(&app.to_view_state());
        assert_eq!(restored.view_mode, ViewMode::Archive);
        assert_eq!(restored.theme_name, ThemeName::Light);
        assert_eq!(restored.selected_index, 2);
    }

    #[test]
    fn start_edit_seeds_form_from_wish() {
        let wish = Wish::new(
            "Bike".to_string(),
            Some("300".to_string()),
            Some("wish_abc.jpg".to_string()),
        );
        let mut app = App::new();
        app.start_edit(&wish);
        assert_eq!(app.form_name, "Bike");
        assert_eq!(app.form_price, "300");
        assert_eq!(app.form_photo, "wish_abc.jpg");
        assert_eq!(app.editing_id, Some(wish.id));
        assert_eq!(app.input_mode, InputMode::EditWish(FormField::Name));
    }
}
