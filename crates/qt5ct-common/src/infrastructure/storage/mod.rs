//! Storage infrastructure: qt5ct's files on disk.
//!
//! This module is a thin adapter between the application and the file
//! system:
//!
//! - `config` creates the user's `qt5ct.conf` from the system template on
//!   first run and defines the shared [`ConfigError`](config::ConfigError).
//! - `settings` reads the `[Appearance]` and `[Interface]` sections.
//! - `color_schemes` loads, saves, and lists color-scheme and stylesheet
//!   files.
//!
//! The public entry points mirror the degrade-silently contract of the
//! desktop integration: a missing or broken file produces defaults or a
//! fallback palette, never a hard failure.  `try_*` variants expose the
//! underlying `Result` for callers that want to report problems.

pub mod color_schemes;
pub mod config;
pub mod settings;
