//! qt5ct's well-known paths.
//!
//! ```text
//! <config>/qt5ct/qt5ct.conf          main settings file
//! <config>/qt5ct/qss/                user stylesheets
//! <config>/qt5ct/colors/             user color schemes
//! <config>/qt5ct/style-colors.conf   palette exported by the active style
//! <data>/qt5ct/{qss,colors}/         shared, one per data directory
//! <DATADIR>/qt5ct/{qss,colors}/      install prefix, always searched last
//! ~/.icons, <data>/icons             icon theme search path
//! ```
//!
//! `<config>` is the writable config location and `<data>` iterates the
//! generic data search list (see [`StandardLocations`]).  `DATADIR` is fixed
//! at build time through the `QT5CT_DATADIR` environment variable and
//! defaults to `/usr/share`.
//!
//! Everything here is a pure function of the locations, except
//! [`PathResolver::icon_paths`] which drops directories that do not exist.

use std::collections::HashSet;
use std::path::PathBuf;

use super::locations::{StandardLocations, XdgLocations};
use super::path_tokens::resolve_path_with;

/// System data directory baked in at build time.
pub const DEFAULT_DATADIR: &str = match option_env!("QT5CT_DATADIR") {
    Some(dir) => dir,
    None => "/usr/share",
};

/// Name of qt5ct's directory inside config and data locations.
pub const APP_DIR_NAME: &str = "qt5ct";
pub const CONFIG_FILE_NAME: &str = "qt5ct.conf";
pub const STYLE_COLORS_FILE_NAME: &str = "style-colors.conf";

/// Computes qt5ct paths from a set of [`StandardLocations`].
pub struct PathResolver {
    locations: Box<dyn StandardLocations>,
    datadir: PathBuf,
}

impl PathResolver {
    /// Creates a resolver over `locations` using [`DEFAULT_DATADIR`].
    pub fn new(locations: impl StandardLocations + 'static) -> Self {
        Self {
            locations: Box::new(locations),
            datadir: PathBuf::from(DEFAULT_DATADIR),
        }
    }

    /// Creates a resolver over the real XDG environment.
    pub fn system() -> Self {
        Self::new(XdgLocations::new())
    }

    /// Replaces the build-time system data directory.
    pub fn with_datadir(mut self, datadir: impl Into<PathBuf>) -> Self {
        self.datadir = datadir.into();
        self
    }

    /// `<config>/qt5ct`
    pub fn config_path(&self) -> PathBuf {
        self.locations.writable_config_dir().join(APP_DIR_NAME)
    }

    /// `<config>/qt5ct/qt5ct.conf`
    pub fn config_file(&self) -> PathBuf {
        self.config_path().join(CONFIG_FILE_NAME)
    }

    /// `<config>/qt5ct/style-colors.conf`
    pub fn style_color_scheme_file(&self) -> PathBuf {
        self.config_path().join(STYLE_COLORS_FILE_NAME)
    }

    /// Existing icon directories: `~/.icons` then `<data>/icons` for every
    /// data directory, without duplicates.
    pub fn icon_paths(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.locations.home_dir().join(".icons")];
        candidates.extend(
            self.locations
                .data_dirs()
                .into_iter()
                .map(|dir| dir.join("icons")),
        );
        dedup_paths(candidates)
            .into_iter()
            .filter(|p| p.is_dir())
            .collect()
    }

    /// `<config>/qt5ct/qss`
    pub fn user_style_sheet_path(&self) -> PathBuf {
        self.config_path().join("qss")
    }

    /// `<data>/qt5ct/qss` for every data directory, then `<DATADIR>/qt5ct/qss`.
    pub fn shared_style_sheet_paths(&self) -> Vec<PathBuf> {
        self.shared_app_paths("qss")
    }

    /// `<config>/qt5ct/colors`
    pub fn user_color_scheme_path(&self) -> PathBuf {
        self.config_path().join("colors")
    }

    /// `<data>/qt5ct/colors` for every data directory, then
    /// `<DATADIR>/qt5ct/colors`.
    pub fn shared_color_scheme_paths(&self) -> Vec<PathBuf> {
        self.shared_app_paths("colors")
    }

    /// First existing `qt5ct/qt5ct.conf` in the generic config search list.
    ///
    /// Used as the template for a user's first config file.
    pub fn locate_global_config(&self) -> Option<PathBuf> {
        self.locations
            .config_dirs()
            .into_iter()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .find(|p| p.is_file())
    }

    /// Expands a leading `~` and `$VAR/` tokens using this resolver's home
    /// directory and the process environment.
    pub fn resolve_path(&self, path: &str) -> String {
        let home = self.locations.home_dir();
        resolve_path_with(path, &home, |name| std::env::var(name).ok())
    }

    fn shared_app_paths(&self, leaf: &str) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .locations
            .data_dirs()
            .into_iter()
            .map(|dir| dir.join(APP_DIR_NAME).join(leaf))
            .collect();
        paths.push(self.datadir.join(APP_DIR_NAME).join(leaf));
        dedup_paths(paths)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::system()
    }
}

/// Removes repeated paths, keeping the first occurrence of each.
///
/// `Path` equality is component-wise, so `/usr/share/` and `/usr/share`
/// count as the same directory.
fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(paths.len());
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::locations::{FixedLocations, MockStandardLocations};

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qt5ct_paths_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn mock_with_data_dirs(data: Vec<PathBuf>) -> MockStandardLocations {
        let mut mock = MockStandardLocations::new();
        mock.expect_home_dir().return_const(PathBuf::from("/home/u"));
        mock.expect_writable_config_dir()
            .return_const(PathBuf::from("/home/u/.config"));
        mock.expect_data_dirs().return_const(data);
        mock
    }

    #[test]
    fn test_config_paths_hang_off_writable_config_dir() {
        // Arrange
        let resolver = PathResolver::new(mock_with_data_dirs(vec![]));

        // Act / Assert
        assert_eq!(resolver.config_path(), PathBuf::from("/home/u/.config/qt5ct"));
        assert_eq!(
            resolver.config_file(),
            PathBuf::from("/home/u/.config/qt5ct/qt5ct.conf")
        );
        assert_eq!(
            resolver.user_style_sheet_path(),
            PathBuf::from("/home/u/.config/qt5ct/qss")
        );
        assert_eq!(
            resolver.user_color_scheme_path(),
            PathBuf::from("/home/u/.config/qt5ct/colors")
        );
        assert_eq!(
            resolver.style_color_scheme_file(),
            PathBuf::from("/home/u/.config/qt5ct/style-colors.conf")
        );
    }

    #[test]
    fn test_shared_paths_append_datadir_last() {
        let resolver = PathResolver::new(mock_with_data_dirs(vec![
            PathBuf::from("/home/u/.local/share"),
            PathBuf::from("/usr/local/share"),
        ]))
        .with_datadir("/opt/qt5ct/share");

        assert_eq!(
            resolver.shared_color_scheme_paths(),
            vec![
                PathBuf::from("/home/u/.local/share/qt5ct/colors"),
                PathBuf::from("/usr/local/share/qt5ct/colors"),
                PathBuf::from("/opt/qt5ct/share/qt5ct/colors"),
            ]
        );
        assert_eq!(
            resolver.shared_style_sheet_paths().last(),
            Some(&PathBuf::from("/opt/qt5ct/share/qt5ct/qss"))
        );
    }

    #[test]
    fn test_shared_paths_drop_datadir_already_in_data_dirs() {
        let resolver = PathResolver::new(mock_with_data_dirs(vec![
            PathBuf::from("/usr/share/"),
            PathBuf::from("/usr/local/share"),
        ]))
        .with_datadir("/usr/share");

        let paths = resolver.shared_style_sheet_paths();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/usr/share/qt5ct/qss"),
                PathBuf::from("/usr/local/share/qt5ct/qss"),
            ]
        );
    }

    #[test]
    fn test_icon_paths_keep_only_existing_unique_dirs() {
        // Arrange: data dirs list the same root twice; only some icon dirs exist.
        let root = scratch_dir();
        let locations = FixedLocations {
            home: root.join("home"),
            config_home: root.join("home/.config"),
            system_config_dirs: vec![],
            data_home: root.join("share-a"),
            system_data_dirs: vec![root.join("share-b"), root.join("share-a"), root.join("share-c")],
        };
        std::fs::create_dir_all(root.join("home/.icons")).unwrap();
        std::fs::create_dir_all(root.join("share-a/icons")).unwrap();
        std::fs::create_dir_all(root.join("share-c/icons")).unwrap();
        let resolver = PathResolver::new(locations);

        // Act
        let icons = resolver.icon_paths();

        // Assert
        assert_eq!(
            icons,
            vec![
                root.join("home/.icons"),
                root.join("share-a/icons"),
                root.join("share-c/icons"),
            ]
        );

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_icon_paths_empty_when_nothing_exists() {
        let resolver = PathResolver::new(FixedLocations::under("/nonexistent/qt5ct/root"));
        assert!(resolver.icon_paths().is_empty());
    }

    #[test]
    fn test_locate_global_config_prefers_earlier_dirs() {
        // Arrange
        let root = scratch_dir();
        let locations = FixedLocations {
            system_config_dirs: vec![root.join("etc-a"), root.join("etc-b")],
            ..FixedLocations::under(&root)
        };
        for dir in ["etc-a", "etc-b"] {
            let app = root.join(dir).join("qt5ct");
            std::fs::create_dir_all(&app).unwrap();
            std::fs::write(app.join("qt5ct.conf"), "[Appearance]\n").unwrap();
        }
        let resolver = PathResolver::new(locations);

        // Act / Assert
        assert_eq!(
            resolver.locate_global_config(),
            Some(root.join("etc-a/qt5ct/qt5ct.conf"))
        );

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_locate_global_config_none_without_template() {
        let resolver = PathResolver::new(FixedLocations::under("/nonexistent/qt5ct/root"));
        assert_eq!(resolver.locate_global_config(), None);
    }

    #[test]
    fn test_resolve_path_uses_resolver_home() {
        let resolver = PathResolver::new(mock_with_data_dirs(vec![]));
        assert_eq!(resolver.resolve_path("~/colors/x.conf"), "/home/u/colors/x.conf");
    }
}
