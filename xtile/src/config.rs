//! `xtile` general configuration

mod checks;
mod default;
mod keybind;
mod notification;

pub use self::keybind::{Keybind, Modifier};
pub use self::notification::NotificationConfig;

use anyhow::{Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::prelude::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use xdg::BaseDirectories;
use xtile_core::{
    config::{DesktopDefaults, NotificationEvent, TilerDefaults},
    models::{DesktopId, IgnoreRule, Pattern, TilerKind},
    Notification,
};

const COMMENT_HEADER: &str = r"// xtile configuration
//
// Ignore rules: `name` is matched against the start of the class part of WM_CLASS, `title`
// against the start of the window title. With `negate_title: true` a window is ignored unless
// its title matches.
// Keybinds use hardware keycodes as printed by `xev`.

";

/// Initial settings of every desktop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DesktopConfig {
    pub tiler: TilerKind,
    pub tiling: bool,
    pub resize_sync: bool,
    pub decoration: bool,
    pub maximize_when_one_window_left: bool,
}

/// Per desktop exceptions to [`DesktopConfig`]. Index 0 is the first desktop.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DesktopOverride {
    pub tiler: Option<TilerKind>,
    pub tiling: Option<bool>,
    pub resize_sync: Option<bool>,
    pub decoration: Option<bool>,
    pub maximize_when_one_window_left: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TilerConfig {
    pub max_windows: usize,
    /// Share of the usable area given to the master window. Unused by the plain stack tilers.
    pub master_fraction: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TilersConfig {
    pub master_stack_vertical: TilerConfig,
    pub master_stack_horizontal: TilerConfig,
    pub stack_vertical: TilerConfig,
    pub stack_horizontal: TilerConfig,
}

impl TilersConfig {
    /// Every configurable tiler, `Maximize` has nothing to configure.
    pub fn iter(&self) -> impl Iterator<Item = (TilerKind, &TilerConfig)> {
        [
            (TilerKind::MasterStackVertical, &self.master_stack_vertical),
            (TilerKind::MasterStackHorizontal, &self.master_stack_horizontal),
            (TilerKind::StackVertical, &self.stack_vertical),
            (TilerKind::StackHorizontal, &self.stack_horizontal),
        ]
        .into_iter()
    }
}

/// General configuration
#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    /// Distance, in pixels, under which two edges count as docked.
    pub margin: i32,
    pub min_size: i32,
    /// Pixels added or removed by `ShrinkMaster`/`EnlargeMaster`.
    pub step_size: i32,
    pub move_mouse_into_active_window: bool,
    pub delay_tiling_windows_with_names: Vec<Pattern>,
    /// Seconds to wait before tiling a window from `delay_tiling_windows_with_names`.
    pub delay_time_tiling: f32,
    pub ignore_windows: Vec<IgnoreRule>,
    pub ignore_windows_for_decoration: Vec<IgnoreRule>,
    pub default_desktop: DesktopConfig,
    pub desktops: Vec<DesktopOverride>,
    pub tilers: TilersConfig,
    pub notification: NotificationConfig,
    pub modkey: Modifier,
    pub keybind: Vec<Keybind>,
    /// Where `LogActiveWindow` appends to, `/tmp/xtile_<USER>.log` when unset.
    pub active_window_log: Option<PathBuf>,
}

/// Loads the configuration from `path`, or from the XDG config directory.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if the file cannot be read
/// or parsed, or if the default configuration cannot be written on first start.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => load_file(path)?,
        None => load_default_file()?,
    };
    config.check()?;
    Ok(config)
}

/// Parses a `ron` or `toml` file, picked by extension.
///
/// # Errors
///
/// Errors if file cannot be read or does not parse.
pub fn load_file(path: &Path) -> Result<Config> {
    tracing::debug!("Config file '{}' found.", path.to_string_lossy());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read {}", path.display()))?;
    if path.extension() == Some(std::ffi::OsStr::new("toml")) {
        return toml::from_str(&contents)
            .with_context(|| format!("Couldn't parse {}", path.display()));
    }
    let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    ron.from_str(&contents)
        .with_context(|| format!("Couldn't parse {}", path.display()))
}

fn load_default_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    let path = BaseDirectories::with_prefix("xtile")?;
    let config_file_ron = path.place_config_file("config.ron")?;
    let config_file_toml = path.place_config_file("config.toml")?;

    if config_file_ron.exists() {
        load_file(&config_file_ron)
    } else if config_file_toml.exists() {
        load_file(&config_file_toml)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&config_file_ron, &config)?;
        Ok(config)
    }
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron = to_ron(config)?;
    let mut file = File::create(ron_file)?;
    file.write_all((String::from(COMMENT_HEADER) + &ron).as_bytes())?;
    Ok(())
}

fn to_ron(config: &Config) -> Result<String> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(3)
        .extensions(Extensions::IMPLICIT_SOME);
    Ok(to_string_pretty(config, ron_pretty_conf)?)
}

/// Expands `~` and environment variables, leaving the path as given when that fails.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw).map_or_else(|_| path.to_path_buf(), |p| PathBuf::from(p.as_ref()))
}

impl Config {
    fn desktop_override(&self, desktop: DesktopId) -> Option<&DesktopOverride> {
        desktop.checked_sub(1).and_then(|index| self.desktops.get(index))
    }

    fn tiler_config(&self, tiler: TilerKind) -> Option<&TilerConfig> {
        self.tilers
            .iter()
            .find(|(kind, _)| *kind == tiler)
            .map(|(_, config)| config)
    }
}

impl xtile_core::Config for Config {
    fn margin(&self) -> i32 {
        self.margin
    }

    fn min_size(&self) -> i32 {
        self.min_size
    }

    fn step_size(&self) -> i32 {
        self.step_size
    }

    fn tiling_ignore_rules(&self) -> &[IgnoreRule] {
        &self.ignore_windows
    }

    fn decoration_ignore_rules(&self) -> &[IgnoreRule] {
        &self.ignore_windows_for_decoration
    }

    fn delays_tiling(&self, name: &str) -> bool {
        self.delay_tiling_windows_with_names
            .iter()
            .any(|pattern| pattern.is_match(name))
    }

    fn delay_time_tiling(&self) -> Duration {
        Duration::try_from_secs_f32(self.delay_time_tiling).unwrap_or_else(|err| {
            tracing::warn!("Ignoring delay_time_tiling {}: {}", self.delay_time_tiling, err);
            Duration::ZERO
        })
    }

    fn desktop_defaults(&self, desktop: DesktopId) -> DesktopDefaults {
        let base = &self.default_desktop;
        let over = self.desktop_override(desktop).cloned().unwrap_or_default();
        DesktopDefaults {
            tiler: over.tiler.unwrap_or(base.tiler),
            tiling: over.tiling.unwrap_or(base.tiling),
            resize_sync: over.resize_sync.unwrap_or(base.resize_sync),
            decoration: over.decoration.unwrap_or(base.decoration),
            maximize_when_one_left: over
                .maximize_when_one_window_left
                .unwrap_or(base.maximize_when_one_window_left),
        }
    }

    fn tiler_defaults(&self, tiler: TilerKind) -> TilerDefaults {
        match self.tiler_config(tiler) {
            Some(config) => TilerDefaults {
                max_windows: config.max_windows,
                master_fraction: config.master_fraction,
            },
            None => TilerDefaults {
                max_windows: 1,
                master_fraction: 0.5,
            },
        }
    }

    fn move_mouse_into_active_window(&self) -> bool {
        self.move_mouse_into_active_window
    }

    fn notification(&self, event: NotificationEvent) -> Option<Notification> {
        self.notification.build(event)
    }

    fn keybinds(&self) -> Vec<xtile_core::config::Keybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| match keybind.to_core(&self.modkey) {
                Ok(keybind) => Some(keybind),
                Err(err) => {
                    tracing::warn!("Skipping keybind {:?}: {}", keybind, err);
                    None
                }
            })
            .collect()
    }

    fn active_window_log(&self) -> PathBuf {
        match &self.active_window_log {
            Some(path) => expand_path(path),
            None => {
                let user = std::env::var("USER").unwrap_or_default();
                std::env::temp_dir().join(format!("xtile_{user}.log"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtile_core::Config as _;

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::default();

        let ron = to_ron(&config);
        assert!(ron.is_ok(), "Could not serialize default config");

        let ron_config = ron::from_str::<'_, Config>(ron.unwrap().as_str());
        assert!(ron_config.is_ok(), "Could not deserialize default config");
        let ron_config = ron_config.unwrap();
        assert_eq!(ron_config.keybind, config.keybind);
        assert_eq!(ron_config.ignore_windows, config.ignore_windows);
    }

    #[test]
    fn written_default_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        write_to_file(&path, &Config::default()).unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.margin, 100);
        assert_eq!(config.tilers, Config::default().tilers);
    }

    #[test]
    fn desktop_overrides_apply_by_index() {
        let config: Config = ron::from_str(
            "(desktops: [(tiling: Some(true)), (tiler: Some(Maximize), maximize_when_one_window_left: Some(false))])",
        )
        .unwrap();
        assert_eq!(
            config.desktop_defaults(1).tiler,
            TilerKind::MasterStackVertical
        );
        let second = config.desktop_defaults(2);
        assert_eq!(second.tiler, TilerKind::Maximize);
        assert!(!second.maximize_when_one_left);
        assert!(second.tiling);
        assert_eq!(config.desktop_defaults(3), config.desktop_defaults(1));
        assert_eq!(config.desktop_defaults(0), config.desktop_defaults(1));
    }

    #[test]
    fn maximize_tiler_holds_one_window() {
        let config = Config::default();
        assert_eq!(config.tiler_defaults(TilerKind::Maximize).max_windows, 1);
        assert_eq!(
            config.tiler_defaults(TilerKind::StackHorizontal).max_windows,
            3
        );
    }

    #[test]
    fn invalid_ignore_regex_fails_to_parse() {
        let parsed = ron::from_str::<Config>(r#"(ignore_windows: [(name: "(unclosed")])"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn delay_patterns_match_the_start_of_the_name() {
        let config: Config =
            ron::from_str(r#"(delay_tiling_windows_with_names: ["Thunder"])"#).unwrap();
        assert!(config.delays_tiling("Thunderbird"));
        assert!(!config.delays_tiling("Mozilla Thunderbird"));
        assert_eq!(config.delay_time_tiling(), Duration::from_millis(500));

        let config = Config {
            delay_time_tiling: f32::INFINITY,
            ..Config::default()
        };
        assert_eq!(config.delay_time_tiling(), Duration::ZERO);
    }

    #[test]
    fn toml_config_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "margin = 20\nmin_size = 200\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.margin, 20);
        assert_eq!(config.min_size, 200);
        assert_eq!(config.step_size, 50);
    }

    #[test]
    fn active_window_log_expands_the_home_directory() {
        let config = Config {
            active_window_log: Some(PathBuf::from("~/xtile.log")),
            ..Config::default()
        };
        let path = config.active_window_log();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("xtile.log"));
    }
}
