use crate::app::{App, FormField, InputMode};
use crate::model::{ViewMode, Wish};
use crate::photos;
use crate::state;
use crate::store::WishStore;
use crate::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_RATE: Duration = Duration::from_millis(100);

pub fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut store: WishStore,
    data_dir: PathBuf,
) -> io::Result<()> {
    let photos_dir = crate::config::photos_dir(&data_dir);

    loop {
        // A restored or stale cursor may point past the current list.
        let len = current_list(&app, &store).len();
        app.clamp_selection(len);

        terminal.draw(|f| ui::draw(f, &app, &store))?;

        if event::poll(POLL_RATE)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(&mut app, &mut store, &photos_dir, key);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit {
            state::save_state(&data_dir, &app.to_view_state());
            return Ok(());
        }
    }
}

fn current_list<'a>(app: &App, store: &'a WishStore) -> &'a [Wish] {
    match app.view_mode {
        ViewMode::Wishes => store.active(),
        ViewMode::Archive => store.completed(),
    }
}

fn selected_wish<'a>(app: &App, store: &'a WishStore) -> Option<&'a Wish> {
    current_list(app, store).get(app.selected_index)
}

pub fn handle_key(app: &mut App, store: &mut WishStore, photos_dir: &Path, key: event::KeyEvent) {
    // Global: Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay
    if app.show_help {
        if key.code == KeyCode::Char('?') || key.code == KeyCode::Esc {
            app.show_help = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, store, key),
        InputMode::AddWish(_) | InputMode::EditWish(_) => {
            handle_form_key(app, store, photos_dir, key)
        }
        InputMode::ConfirmDelete => handle_confirm_delete_key(app, store, key),
    }
}

fn handle_normal_key(app: &mut App, store: &mut WishStore, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = !app.show_help,

        // View switching (the drawer of the original app)
        KeyCode::Tab => {
            let next = match app.view_mode {
                ViewMode::Wishes => ViewMode::Archive,
                ViewMode::Archive => ViewMode::Wishes,
            };
            app.switch_view(next);
        }
        KeyCode::Char('1') => app.switch_view(ViewMode::Wishes),
        KeyCode::Char('2') => app.switch_view(ViewMode::Archive),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            let len = current_list(app, store).len();
            app.select_next(len);
        }
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => {
            let len = current_list(app, store).len();
            app.select_last(len);
        }

        // Add (active view only, like the original's add row)
        KeyCode::Char('a') => {
            if app.view_mode == ViewMode::Wishes {
                app.start_add();
            }
        }

        // Edit
        KeyCode::Char('e') => {
            if let Some(wish) = selected_wish(app, store) {
                let wish = wish.clone();
                app.start_edit(&wish);
            }
        }

        // Complete (active view only)
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.view_mode == ViewMode::Wishes {
                if let Some(wish) = selected_wish(app, store) {
                    let (id, name) = (wish.id, wish.name.clone());
                    if store.complete(id) {
                        app.set_status(format!("Completed: {}", name));
                        app.clamp_selection(store.active_count());
                    }
                }
            }
        }

        // Delete (with confirmation)
        KeyCode::Char('d') => {
            if selected_wish(app, store).is_some() {
                app.input_mode = InputMode::ConfirmDelete;
            }
        }

        // Theme
        KeyCode::Char('t') => {
            app.cycle_theme();
            app.set_status(format!("Theme: {}", app.theme_name.label()));
        }

        _ => {}
    }
}

fn handle_form_key(app: &mut App, store: &mut WishStore, photos_dir: &Path, key: event::KeyEvent) {
    let field = match app.input_mode {
        InputMode::AddWish(f) | InputMode::EditWish(f) => f,
        _ => return,
    };
    let is_add = matches!(app.input_mode, InputMode::AddWish(_));

    let set_field = |app: &mut App, f: FormField| {
        app.input_mode = if is_add {
            InputMode::AddWish(f)
        } else {
            InputMode::EditWish(f)
        };
    };

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab => set_field(app, field.next()),
        KeyCode::Enter => match field {
            FormField::Name => set_field(app, FormField::Price),
            FormField::Price => set_field(app, FormField::Photo),
            FormField::Photo => submit_form(app, store, photos_dir),
        },
        KeyCode::Backspace => {
            match field {
                FormField::Name => app.form_name.pop(),
                FormField::Price => app.form_price.pop(),
                FormField::Photo => app.form_photo.pop(),
            };
        }
        KeyCode::Char(c) => match field {
            FormField::Name => app.form_name.push(c),
            FormField::Price => app.form_price.push(c),
            FormField::Photo => app.form_photo.push(c),
        },
        _ => {}
    }
}

fn submit_form(app: &mut App, store: &mut WishStore, photos_dir: &Path) {
    let name = app.form_name.trim().to_string();
    if name.is_empty() {
        // Disabled-submit equivalent: stay in the form, back on the name field.
        let is_add = matches!(app.input_mode, InputMode::AddWish(_));
        app.input_mode = if is_add {
            InputMode::AddWish(FormField::Name)
        } else {
            InputMode::EditWish(FormField::Name)
        };
        app.set_status("Name is required".to_string());
        return;
    }

    let price = Some(app.form_price.clone());
    let photo = resolve_form_photo(app, photos_dir);

    match app.editing_id {
        Some(id) => {
            if store.edit(id, &name, price, photo) {
                app.set_status(format!("Updated: {}", name));
            }
        }
        None => {
            store.add(&name, price, photo);
            app.set_status(format!("Added: {}", name));
        }
    }
    app.cancel_form();
}

/// A photo field left as the stored filename keeps the existing reference;
/// cleared means no photo; anything else is a path to import. Unreadable
/// sources simply produce no reference, and a replaced photo's old file is
/// left behind.
fn resolve_form_photo(app: &App, photos_dir: &Path) -> Option<String> {
    let text = app.form_photo.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(existing) = &app.editing_photo {
        if text == existing {
            return Some(existing.clone());
        }
    }
    photos::import_photo(photos_dir, Path::new(text))
}

fn handle_confirm_delete_key(app: &mut App, store: &mut WishStore, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(wish) = selected_wish(app, store) {
                let (id, name) = (wish.id, wish.name.clone());
                if store.delete(id) {
                    app.set_status(format!("Deleted: {}", name));
                    let len = current_list(app, store).len();
                    app.clamp_selection(len);
                }
            }
            app.input_mode = InputMode::Normal;
        }
        _ => {
            app.input_mode = InputMode::Normal;
            app.set_status("Delete cancelled".to_string());
        }
    }
}
