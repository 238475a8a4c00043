//! Path display helpers for diagnostic lines.

use std::path::Path;

/// Format a filesystem path for user-facing output.
///
/// Replaces the home directory prefix with `~` (e.g.
/// `/Users/alex/projects/app` -> `~/projects/app`). Paths outside home are
/// returned unchanged.
pub fn tilde_display(path: &Path) -> String {
    if let Some(home) = home::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(stripped).display().to_string();
    }

    path.display().to_string()
}

/// Render a path relative to the process working directory.
///
/// Falls back to the path as given when the working directory is
/// unavailable or no relative form exists (e.g. different drive on
/// Windows).
pub fn relative_to_cwd(path: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };
    pathdiff::diff_paths(path, &cwd)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
