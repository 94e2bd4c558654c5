//! `qt5ct-info`: inspect qt5ct's paths, settings, and color schemes.
//!
//! ```text
//! qt5ct-info                 print every resolved path
//! qt5ct-info init            create ~/.config/qt5ct/qt5ct.conf from the template
//! qt5ct-info schemes         list color schemes and stylesheets
//! qt5ct-info scheme <FILE>   load a color-scheme file and dump it as TOML
//! qt5ct-info current         dump the settings and the palette they select
//! qt5ct-info resolve <PATH>  expand `~` and `$VAR/` tokens
//! ```
//!
//! Set `RUST_LOG=debug` to see why a scheme fell back to the default palette.

use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qt5ct_common::application::appearance::{
    current_style_sheets, load_current_palette, load_settings,
};
use qt5ct_common::{
    init_config, list_color_schemes, list_style_sheets, load_color_scheme, InitOutcome,
    PathResolver,
};
use qt5ct_core::Palette;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let resolver = PathResolver::system();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["paths"] => print_paths(&resolver),
        ["init"] => run_init(&resolver),
        ["schemes"] => print_listing(&resolver),
        ["scheme", file] => print_scheme(&resolver, file)?,
        ["current"] => print_current(&resolver)?,
        ["resolve", path] => println!("{}", resolver.resolve_path(path)),
        other => bail!("unrecognised arguments: {other:?} (see module docs for usage)"),
    }
    Ok(())
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn print_paths(resolver: &PathResolver) {
    println!("config path:        {}", resolver.config_path().display());
    println!("config file:        {}", resolver.config_file().display());
    println!("style colors file:  {}", resolver.style_color_scheme_file().display());
    println!("user stylesheets:   {}", resolver.user_style_sheet_path().display());
    print_list("shared stylesheets:", &resolver.shared_style_sheet_paths());
    println!("user color schemes: {}", resolver.user_color_scheme_path().display());
    print_list("shared color schemes:", &resolver.shared_color_scheme_paths());
    print_list("icon paths:", &resolver.icon_paths());
}

fn run_init(resolver: &PathResolver) {
    match init_config(resolver) {
        InitOutcome::AlreadyPresent => println!("config already present"),
        InitOutcome::NoTemplate => println!("no system template installed; nothing created"),
        InitOutcome::Copied { from, to } => {
            println!("copied {} -> {}", from.display(), to.display())
        }
        InitOutcome::Failed => println!("could not create config (see log)"),
    }
}

fn print_listing(resolver: &PathResolver) {
    let mut scheme_dirs = vec![resolver.user_color_scheme_path()];
    scheme_dirs.extend(resolver.shared_color_scheme_paths());
    print_list("color schemes:", &list_color_schemes(&scheme_dirs));

    let mut sheet_dirs = vec![resolver.user_style_sheet_path()];
    sheet_dirs.extend(resolver.shared_style_sheet_paths());
    print_list("stylesheets:", &list_style_sheets(&sheet_dirs));
}

fn print_scheme(resolver: &PathResolver, file: &str) -> anyhow::Result<()> {
    let path = PathBuf::from(resolver.resolve_path(file));
    if !path.is_file() {
        bail!("color scheme not found: {}", path.display());
    }
    info!(path = %path.display(), "loading color scheme");
    let palette = load_color_scheme(&path, &Palette::default());
    print_toml(&palette)
}

fn print_current(resolver: &PathResolver) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Current<'a> {
        // Plain values must precede tables in TOML output.
        style_sheets: Vec<PathBuf>,
        settings: &'a qt5ct_common::Qt5ctSettings,
        palette: Palette,
    }

    let settings = load_settings(resolver);
    let current = Current {
        style_sheets: current_style_sheets(resolver, &settings),
        palette: load_current_palette(resolver, &Palette::default()),
        settings: &settings,
    };
    print_toml(&current)
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_list(title: &str, paths: &[PathBuf]) {
    println!("{title}");
    if paths.is_empty() {
        println!("  (none)");
    }
    for path in paths {
        println!("  {}", path.display());
    }
}

fn print_toml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(value).context("failed to render TOML")?;
    print!("{text}");
    Ok(())
}
