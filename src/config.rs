use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub normalize_line_endings: Option<bool>,
    #[serde(default)]
    pub require_title: Option<bool>,
}

impl Config {
    /// Convert `\r\n` to `\n` before rendering. On unless disabled.
    pub fn normalize_line_endings(&self) -> bool {
        self.normalize_line_endings.unwrap_or(true)
    }

    /// Fail documents that have no `# ` title line.
    pub fn require_title(&self) -> bool {
        self.require_title.unwrap_or(false)
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mdhtml.toml", "mdhtml.toml"];

/// Where the active configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Found next to the document or in one of its parent directories.
    Project(PathBuf),
    /// Per-user file under the XDG config directory.
    User(PathBuf),
    Default,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (explicit)", p.display()),
            ConfigSource::Project(p) => write!(f, "{} (project)", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::Default => f.write_str("built-in defaults"),
        }
    }
}

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    let s = fs::read_to_string(path)?;
    parse_config_str(&s, path)
}

/// Existing project files from `start_dir` upwards, nearest first.
fn project_files(start_dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    start_dir
        .ancestors()
        .flat_map(|dir| CANDIDATE_NAMES.iter().map(move |name| dir.join(name)))
        .filter(|p| p.is_file())
}

/// `$XDG_CONFIG_HOME/mdhtml/config.toml`, then `~/.config/mdhtml/config.toml`.
fn user_files(xdg_config_home: Option<&OsStr>, home: Option<&OsStr>) -> Vec<PathBuf> {
    let xdg = xdg_config_home.map(PathBuf::from);
    let home = home.map(|h| Path::new(h).join(".config"));
    xdg.into_iter()
        .chain(home)
        .map(|base| base.join("mdhtml").join("config.toml"))
        .collect()
}

fn discover(start_dir: &Path, user: Vec<PathBuf>) -> Vec<ConfigSource> {
    project_files(start_dir)
        .map(ConfigSource::Project)
        .chain(
            user.into_iter()
                .filter(|p| p.is_file())
                .map(ConfigSource::User),
        )
        .collect()
}

fn load_from(
    explicit: Option<&Path>,
    start_dir: &Path,
    user: Vec<PathBuf>,
) -> io::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, ConfigSource::Explicit(path.to_path_buf())));
    }

    for source in discover(start_dir, user) {
        let Some(path) = source.path() else {
            continue;
        };
        match read_config(path) {
            Ok(cfg) => return Ok((cfg, source)),
            Err(e) => log::warn!("Skipping {source}: {e}"),
        }
    }

    Ok((Config::default(), ConfigSource::Default))
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mdhtml.toml, mdhtml.toml
/// 3) XDG: $XDG_CONFIG_HOME/mdhtml/config.toml or ~/.config/mdhtml/config.toml
/// 4) default config
///
/// A discovered file that fails to parse is logged and skipped.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, ConfigSource)> {
    let user = user_files(
        env::var_os("XDG_CONFIG_HOME").as_deref(),
        env::var_os("HOME").as_deref(),
    );
    load_from(explicit, start_dir, user)
}
