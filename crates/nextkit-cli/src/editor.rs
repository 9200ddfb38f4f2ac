//! Opening scaffolded files in the user's editor

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use tokio::process::Command;

/// Editor command from config, then `$VISUAL`, then `$EDITOR`
pub fn editor_command(configured: Option<&str>) -> Option<String> {
    configured
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|cmd| !cmd.trim().is_empty())
}

/// Launch `editor` on `file` without waiting for it.
///
/// Returns whether the editor started. Failures are logged, never raised.
pub fn open_in_editor(editor: &str, file: &Path) -> bool {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return false;
    };
    match Command::new(program).args(parts).arg(file).spawn() {
        Ok(_) => {
            tracing::debug!("Opened {} with {}", file.display(), program);
            true
        }
        Err(e) => {
            tracing::warn!("Could not open {} with {}: {}", file.display(), program, e);
            false
        }
    }
}
