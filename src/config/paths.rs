use std::env;
use std::path::{Path, PathBuf};

use super::error::ProfileError;

/// Directory name under the user config root
pub const APP_NAME: &str = "igctl";

/// File name of the profiles document
pub const PROFILES_FILE: &str = "profiles.toml";

const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Inputs used to locate the per-user config root
///
/// Resolution never reads the process environment itself. Build one with
/// [`ConfigRoot::from_env`] at the edge of the program, or with
/// [`ConfigRoot::new`] when the inputs are already known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRoot {
    config_home: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl ConfigRoot {
    pub fn new(config_home: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        Self { config_home, home }
    }

    /// Capture `$XDG_CONFIG_HOME` and the user's home directory
    pub fn from_env() -> Self {
        let config_home = env::var_os(CONFIG_HOME_VAR).map(PathBuf::from);
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::new(config_home, home)
    }

    /// Per-user config directory
    ///
    /// Returns `$XDG_CONFIG_HOME` when set, or `~/.config` otherwise.
    pub fn user_config_dir(&self) -> Result<PathBuf, ProfileError> {
        match self.config_home.as_deref().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) if dir.is_absolute() => Ok(dir.to_path_buf()),
            Some(dir) => Err(ProfileError::ConfigDir(format!(
                "{} is a relative path: {}",
                CONFIG_HOME_VAR,
                dir.display()
            ))),
            None => self
                .home
                .as_deref()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|home| home.join(".config"))
                .ok_or_else(|| {
                    ProfileError::ConfigDir(format!(
                        "neither {} nor a home directory is set",
                        CONFIG_HOME_VAR
                    ))
                }),
        }
    }

    /// igctl config directory: `<user-config-dir>/igctl`
    pub fn app_dir(&self) -> Result<PathBuf, ProfileError> {
        Ok(self.user_config_dir()?.join(APP_NAME))
    }
}

/// Location of the profiles document
///
/// Pure path computation; nothing is created.
pub fn profiles_path(root: &ConfigRoot) -> Result<PathBuf, ProfileError> {
    Ok(root.app_dir()?.join(PROFILES_FILE))
}

pub(crate) fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}
