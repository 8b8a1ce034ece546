//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.
//! These helpers map user-facing `~` paths into the sandbox and back, and name
//! the directory holding the recipe collection and trace logs.

use std::path::PathBuf;

/// Returns the data directory for recipebox storage.
///
/// The directory is located at `/host/.local/share/zellij/recipebox` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the folder
/// where Zellij was started, which is usually the user's home directory. The
/// collection lives in `recipes.json` within this directory.
///
/// # Examples
///
/// ```
/// use recipebox::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/recipebox");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("recipebox")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use recipebox::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/Downloads"), "/host/Downloads");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Turns a sandbox path back into the `~` form the user configured.
///
/// # Examples
///
/// ```
/// use recipebox::infrastructure::collapse_host;
///
/// assert_eq!(collapse_host("/host/recipes.json"), "~/recipes.json");
/// assert_eq!(collapse_host("/host"), "~");
/// assert_eq!(collapse_host("/hostile/x"), "/hostile/x");
/// ```
#[must_use]
pub fn collapse_host(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
