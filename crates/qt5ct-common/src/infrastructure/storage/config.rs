//! First-run bootstrap of the user's `qt5ct.conf`.
//!
//! Distributions may install a system-wide default at
//! `/etc/xdg/qt5ct/qt5ct.conf` (or any other entry of `XDG_CONFIG_DIRS`).
//! The first time qt5ct runs for a user who has no config file yet, that
//! template is copied to `~/.config/qt5ct/qt5ct.conf` so later edits only
//! touch the user's copy.
//!
//! The copy happens at most once: an existing user file is never
//! overwritten, and when no template is installed nothing is created.

use std::path::{Path, PathBuf};

use qt5ct_core::IniError;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::paths::PathResolver;

/// Error type for qt5ct file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("failed to parse {path}: {source}")]
    Ini {
        path: PathBuf,
        #[source]
        source: IniError,
    },
}

impl ConfigError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
        move |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What [`init_config`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The user config file already existed; nothing was touched.
    AlreadyPresent,
    /// No system-wide template is installed; nothing was created.
    NoTemplate,
    /// The template at `from` was copied to `to`.
    Copied { from: PathBuf, to: PathBuf },
    /// Creating the directory or copying the template failed.
    Failed,
}

/// Creates the user config file from the system template if it is missing.
///
/// Never fails: I/O problems are logged and reported as
/// [`InitOutcome::Failed`].
pub fn init_config(resolver: &PathResolver) -> InitOutcome {
    match try_init_config(resolver) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("could not create user config: {e}");
            InitOutcome::Failed
        }
    }
}

/// Like [`init_config`], but returns I/O errors to the caller.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the config directory cannot be created or
/// the template cannot be copied.
pub fn try_init_config(resolver: &PathResolver) -> Result<InitOutcome, ConfigError> {
    let target = resolver.config_file();
    if target.exists() {
        debug!(path = %target.display(), "user config already present");
        return Ok(InitOutcome::AlreadyPresent);
    }

    let Some(template) = resolver.locate_global_config() else {
        debug!("no system-wide qt5ct.conf template installed");
        return Ok(InitOutcome::NoTemplate);
    };

    let dir = resolver.config_path();
    std::fs::create_dir_all(&dir).map_err(ConfigError::io(&dir))?;
    std::fs::copy(&template, &target).map_err(ConfigError::io(&target))?;

    info!(
        from = %template.display(),
        to = %target.display(),
        "created user config from system template"
    );
    Ok(InitOutcome::Copied {
        from: template,
        to: target,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
