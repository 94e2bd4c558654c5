//! Platform standard locations.
//!
//! qt5ct never hard-codes `~/.config`: it asks for the *writable config
//! location*, the *generic config search list*, and the *generic data search
//! list*, and derives everything else from those.
//!
//! # XDG base directories (for beginners)
//!
//! On Linux and other Unix desktops these locations follow the XDG
//! base-directory specification:
//!
//! | Concept                | Variable           | Default                      |
//! |------------------------|--------------------|------------------------------|
//! | writable config        | `XDG_CONFIG_HOME`  | `~/.config`                  |
//! | system config list     | `XDG_CONFIG_DIRS`  | `/etc/xdg`                   |
//! | writable data          | `XDG_DATA_HOME`    | `~/.local/share`             |
//! | system data list       | `XDG_DATA_DIRS`    | `/usr/local/share:/usr/share`|
//!
//! The search lists always start with the writable location, so user files
//! shadow system ones.  Relative entries in the `*_DIRS` variables are
//! ignored, following the XDG base-directory rules.
//!
//! # Implementations
//!
//! | Type              | Use                                                  |
//! |-------------------|------------------------------------------------------|
//! | [`XdgLocations`]  | the real environment (`dirs` crate + `XDG_*_DIRS`)   |
//! | [`FixedLocations`]| fixed directories for tests and embedding            |

use std::ffi::OsStr;
use std::path::PathBuf;

/// Source of the standard directories qt5ct derives its paths from.
#[cfg_attr(test, mockall::automock)]
pub trait StandardLocations {
    /// The user's home directory.
    fn home_dir(&self) -> PathBuf;

    /// Directory where per-user configuration is written.
    fn writable_config_dir(&self) -> PathBuf;

    /// Generic config search list, writable location first.
    fn config_dirs(&self) -> Vec<PathBuf>;

    /// Generic data search list, writable location first.
    fn data_dirs(&self) -> Vec<PathBuf>;
}

// ── Real environment ──────────────────────────────────────────────────────────

/// [`StandardLocations`] backed by the process environment.
///
/// Every call re-reads the environment, so changes to `XDG_*` variables are
/// picked up without rebuilding the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct XdgLocations;

impl XdgLocations {
    pub fn new() -> Self {
        Self
    }
}

impl StandardLocations for XdgLocations {
    fn home_dir(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    }

    fn writable_config_dir(&self) -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| self.home_dir().join(".config"))
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.writable_config_dir()];
        dirs.extend(system_dirs("XDG_CONFIG_DIRS", "/etc/xdg"));
        dirs
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        let home_data =
            dirs::data_dir().unwrap_or_else(|| self.home_dir().join(".local").join("share"));
        let mut dirs = vec![home_data];
        dirs.extend(system_dirs("XDG_DATA_DIRS", "/usr/local/share:/usr/share"));
        dirs
    }
}

#[cfg(unix)]
fn system_dirs(var: &str, default: &str) -> Vec<PathBuf> {
    split_search_path(std::env::var_os(var).as_deref(), default)
}

#[cfg(not(unix))]
fn system_dirs(_var: &str, _default: &str) -> Vec<PathBuf> {
    Vec::new()
}

/// Splits a colon-separated search path, keeping only absolute entries.
///
/// An unset or empty value yields `default` instead.
pub fn split_search_path(value: Option<&OsStr>, default: &str) -> Vec<PathBuf> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => OsStr::new(default),
    };
    std::env::split_paths(value)
        .filter(|p| p.is_absolute())
        .collect()
}

// ── Fixed directories ─────────────────────────────────────────────────────────

/// [`StandardLocations`] with explicitly supplied directories.
///
/// Used by tests (pointing everything into a scratch directory) and by
/// embedders that manage their own directory layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocations {
    pub home: PathBuf,
    pub config_home: PathBuf,
    pub system_config_dirs: Vec<PathBuf>,
    pub data_home: PathBuf,
    pub system_data_dirs: Vec<PathBuf>,
}

impl FixedLocations {
    /// Lays out XDG-style directories below `root`:
    /// `home/`, `home/.config`, `home/.local/share`, `etc/xdg`, `usr/share`.
    ///
    /// Nothing is created on disk.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let home = root.join("home");
        Self {
            config_home: home.join(".config"),
            data_home: home.join(".local").join("share"),
            system_config_dirs: vec![root.join("etc").join("xdg")],
            system_data_dirs: vec![root.join("usr").join("share")],
            home,
        }
    }
}

impl StandardLocations for FixedLocations {
    fn home_dir(&self) -> PathBuf {
        self.home.clone()
    }

    fn writable_config_dir(&self) -> PathBuf {
        self.config_home.clone()
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.config_home.clone()];
        dirs.extend(self.system_config_dirs.iter().cloned());
        dirs
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.data_home.clone()];
        dirs.extend(self.system_data_dirs.iter().cloned());
        dirs
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
