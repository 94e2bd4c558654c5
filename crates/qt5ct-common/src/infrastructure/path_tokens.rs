//! Expansion of `~` and `$VARIABLE/` tokens in user-supplied paths.
//!
//! Settings files store paths such as `~/.config/qt5ct/colors/dark.conf` or
//! `$XDG_DATA_HOME/qt5ct/qss/fusion.qss`.  Before such a path is opened:
//!
//! 1. A leading `~` is replaced by the home directory.
//! 2. Every `$NAME` immediately followed by `/`, where `NAME` is made of
//!    upper-case ASCII letters and underscores, is replaced by the value of
//!    the environment variable `NAME`.  Unset variables expand to an empty
//!    string.
//!
//! Tokens that do not have that exact shape (`$lower/`, `$NAME` at the end of
//! the string, `${NAME}`) are left as written.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\$([A-Z_]+)/").expect("path token regex"))
}

/// Expands `path` against the current home directory and process environment.
pub fn resolve_path(path: &str) -> String {
    let home = dirs::home_dir().unwrap_or_default();
    resolve_path_with(path, &home, |name| std::env::var(name).ok())
}

/// Expands `path` using an explicit home directory and variable lookup.
///
/// `lookup` returns `None` for unset variables, which then expand to `""`.
pub fn resolve_path_with<F>(path: &str, home: &Path, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut resolved = match path.strip_prefix('~') {
        Some(rest) => format!("{}{rest}", home.to_string_lossy()),
        None => path.to_string(),
    };
    if !resolved.contains('$') {
        return resolved;
    }

    let names: Vec<String> = {
        let mut seen = HashSet::new();
        token_regex()
            .captures_iter(&resolved)
            .map(|caps| caps[1].to_string())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    };

    for name in names {
        let value = lookup(&name).unwrap_or_default();
        resolved = resolved.replace(&format!("${name}"), &value);
    }
    resolved
}

// ── Tests ─────────────────────────────────────────────────────────────────────
