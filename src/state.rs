use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// View state restored between sessions: which list was open, the theme,
/// and the cursor position. Absent or corrupt state falls back to defaults.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ViewState {
    pub view: Option<String>,
    pub theme_name: Option<String>,
    pub selected_index: Option<usize>,
}

fn state_path(data_dir: &Path) -> PathBuf {
    let _ = fs::create_dir_all(data_dir);
    data_dir.join("state.json")
}

pub fn load_state(data_dir: &Path) -> ViewState {
    let path = state_path(data_dir);
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_state(data_dir: &Path, state: &ViewState) {
    let path = state_path(data_dir);
    if let Ok(json) = serde_json::to_string_pretty(state) {
        let _ = fs::write(path, json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let state = ViewState {
            view: Some("archive".to_string()),
            theme_name: Some("light".to_string()),
            selected_index: Some(3),
        };
        save_state(dir.path(), &state);

        let loaded = load_state(dir.path());
        assert_eq!(loaded.view.as_deref(), Some("archive"));
        assert_eq!(loaded.theme_name.as_deref(), Some("light"));
        assert_eq!(loaded.selected_index, Some(3));
    }

    #[test]
    fn missing_or_corrupt_state_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_state(dir.path());
        assert_eq!(loaded.view, None);

        fs::write(dir.path().join("state.json"), "{broken").unwrap();
        let loaded = load_state(dir.path());
        assert_eq!(loaded.selected_index, None);
    }
}
