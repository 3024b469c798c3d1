use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Copy a user-supplied image into the private photo area under a fresh
/// generated name, returning the filename to store on the wish. Any read
/// or write failure yields no reference, silently.
pub fn import_photo(photos_dir: &Path, source: &Path) -> Option<String> {
    let bytes = fs::read(source).ok()?;
    let file_name = format!("wish_{}.jpg", Uuid::new_v4());
    fs::create_dir_all(photos_dir).ok()?;
    fs::write(photos_dir.join(&file_name), bytes).ok()?;
    Some(file_name)
}

/// Resolve a stored filename to its location in the photo area. No
/// existence check: a dangling reference only shows up when the file is
/// actually opened.
pub fn photo_path(photos_dir: &Path, file_name: &str) -> PathBuf {
    photos_dir.join(file_name)
}
