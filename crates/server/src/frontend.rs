//! Locating the built browser bundle on disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Root document served for every unmatched path.
pub const INDEX_FILE: &str = "index.html";

/// Directory name searched next to the working directory and the executable.
pub const DEFAULT_WEB_DIR: &str = "web";

/// Attempts to find the directory holding the built client, checking common locations.
///
/// Checks the following locations in order:
/// 1. The provided path (if any)
/// 2. A `web` directory in the current working directory
/// 3. A `web` directory in the executable's directory
pub fn find_web_root(configured_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = configured_path {
        if path.is_dir() {
            info!("Using configured web root: {}", path.display());
            return Some(path);
        }
        warn!("Configured web root does not exist: {}", path.display());
    }

    let candidates = [
        std::env::current_dir().ok(),
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf)),
    ];

    for base in candidates.into_iter().flatten() {
        let web_dir = base.join(DEFAULT_WEB_DIR);
        if web_dir.is_dir() {
            info!("Found web root: {}", web_dir.display());
            return Some(web_dir);
        }
    }

    warn!("No web root found");
    None
}

/// Whether `root` contains the root HTML document.
pub fn has_index(root: &Path) -> bool {
    root.join(INDEX_FILE).is_file()
}
