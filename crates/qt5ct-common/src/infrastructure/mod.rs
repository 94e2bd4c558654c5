//! Infrastructure layer: everything that touches the environment or disk.
//!
//! Layout:
//! ```text
//! locations.rs    -- StandardLocations trait (XDG directories, home)
//! paths.rs        -- PathResolver: qt5ct's well-known paths
//! path_tokens.rs  -- `~` and `$VAR/` expansion in user-supplied paths
//! storage/        -- config bootstrap, settings, color-scheme files
//! ```

pub mod locations;
pub mod path_tokens;
pub mod paths;
pub mod storage;
