//! Workspace root discovery

use std::path::{Path, PathBuf};

/// Marker file identifying a JavaScript project root
pub const WORKSPACE_MARKER: &str = "package.json";

/// Nearest ancestor of `start` (including itself) containing `package.json`
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(WORKSPACE_MARKER).is_file())
        .map(Path::to_path_buf)
}
