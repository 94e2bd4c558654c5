//! Color-scheme and stylesheet files on disk.
//!
//! Loading never fails: a missing or unreadable file, or lists of the wrong
//! length, yield the caller's fallback palette.  Malformed lines are skipped
//! so they cannot hide valid lists.  The reason is traced at `debug` level so
//! it can be diagnosed with `RUST_LOG=debug`.

use std::path::{Path, PathBuf};

use qt5ct_core::{parse_color_scheme, scheme_from_palette, IniDocument, Palette};
use tracing::{debug, info};

use super::config::ConfigError;

/// Extension of color-scheme files.
pub const COLOR_SCHEME_EXTENSION: &str = "conf";
/// Extension of stylesheet files.
pub const STYLE_SHEET_EXTENSION: &str = "qss";

/// Reads and strictly parses a color-scheme file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Ini`] if it is not valid INI.
pub fn read_color_scheme(path: &Path) -> Result<IniDocument, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(ConfigError::io(path))?;
    IniDocument::parse(&text).map_err(|source| ConfigError::Ini {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the palette stored in `path`, or a clone of `fallback` if the file
/// cannot be used.
pub fn load_color_scheme(path: &Path, fallback: &Palette) -> Palette {
    match std::fs::read_to_string(path).map_err(ConfigError::io(path)) {
        Ok(text) => parse_color_scheme(&text, fallback),
        Err(e) => {
            debug!("{e}; using fallback palette");
            fallback.clone()
        }
    }
}

/// Writes `palette` to `path` in the current 21-role layout, creating
/// parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures.
pub fn save_color_scheme(path: &Path, palette: &Palette) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;
    }
    let content = scheme_from_palette(palette).to_string();
    std::fs::write(path, content).map_err(ConfigError::io(path))?;
    info!(path = %path.display(), "color scheme saved");
    Ok(())
}

/// All `*.conf` files in `dirs`.
///
/// Directories are visited in order; files within one directory are sorted
/// by name.  Missing directories are skipped.
pub fn list_color_schemes(dirs: &[PathBuf]) -> Vec<PathBuf> {
    list_files_with_extension(dirs, COLOR_SCHEME_EXTENSION)
}

/// All `*.qss` files in `dirs`, ordered like [`list_color_schemes`].
pub fn list_style_sheets(dirs: &[PathBuf]) -> Vec<PathBuf> {
    list_files_with_extension(dirs, STYLE_SHEET_EXTENSION)
}

fn list_files_with_extension(dirs: &[PathBuf], extension: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in dirs {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), "skipping directory: {e}");
                continue;
            }
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == extension))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        found.extend(files);
    }
    found
}

// ── Tests ─────────────────────────────────────────────────────────────────────
