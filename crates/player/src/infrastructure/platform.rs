//! Desktop platform helpers: default save location and native file dialogs.

use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

/// Where save dialogs open by default.
///
/// Prefers the user's documents folder, then the app's data directory
/// (e.g. `~/.local/share/rpgpt` on Linux).
pub fn default_save_dir() -> Option<PathBuf> {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .or_else(|| ProjectDirs::from("io", "rpgpt", "rpgpt").map(|d| d.data_dir().to_path_buf()))
}

fn json_dialog() -> rfd::AsyncFileDialog {
    let dialog = rfd::AsyncFileDialog::new().add_filter("JSON", &["json"]);
    match default_save_dir() {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

/// Ask where to write a save file. `None` if the user cancelled.
pub async fn pick_save_path(file_name: &str) -> Option<PathBuf> {
    json_dialog()
        .set_file_name(file_name)
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Ask which save file to open. `None` if the user cancelled.
pub async fn pick_open_path() -> Option<PathBuf> {
    json_dialog()
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
