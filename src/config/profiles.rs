use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::LazyLock;
use tempfile::NamedTempFile;
use tracing::debug;

use super::error::ProfileError;
use super::paths::{parent_dir, profiles_path, ConfigRoot};

static PROFILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("profile name pattern is valid"));

/// Identifiers addressing one account/page/business context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub ig_user_id: String,
    pub page_id: String,
    pub business_id: String,
}

/// Profiles document stored in `<config-dir>/igctl/profiles.toml`
///
/// Keys are expected to be normalized with [`normalize_profile_name`]
/// before insertion; the document itself does not re-check them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl ProfilesFile {
    /// Look up a profile by its normalized name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Insert or replace a profile, returning the previous record
    pub fn upsert(&mut self, name: impl Into<String>, profile: Profile) -> Option<Profile> {
        self.profiles.insert(name.into(), profile)
    }

    /// Drop a profile, returning it if it was present
    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        self.profiles.remove(name)
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profiles are stored
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Lowercase a profile name and check it against `[a-z0-9_]+`
pub fn normalize_profile_name(raw: &str) -> Result<String, ProfileError> {
    let name = raw.to_lowercase();
    if PROFILE_NAME.is_match(&name) {
        Ok(name)
    } else {
        Err(ProfileError::InvalidName {
            name: raw.to_string(),
        })
    }
}

/// Read the profiles document from disk
///
/// A missing file is a first run and yields an empty document.
pub fn read_profiles(root: &ConfigRoot) -> Result<ProfilesFile, ProfileError> {
    let path = profiles_path(root)?;

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "profiles file not found, starting empty");
            return Ok(ProfilesFile::default());
        }
        Err(err) => return Err(ProfileError::io(&path, err)),
    };

    let cfg: ProfilesFile =
        toml::from_str(&contents).map_err(|source| ProfileError::Parse {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), count = cfg.len(), "read profiles");
    Ok(cfg)
}

/// Replace the profiles document on disk with `cfg`
///
/// The document is written to a temporary file next to the target and
/// renamed into place, so readers see either the old or the new contents.
pub fn write_profiles(root: &ConfigRoot, cfg: &ProfilesFile) -> Result<(), ProfileError> {
    let path = profiles_path(root)?;
    let dir = parent_dir(&path);

    create_config_dir(dir).map_err(|err| ProfileError::io(dir, err))?;

    let contents = toml::to_string_pretty(cfg)?;

    let mut file = NamedTempFile::new_in(dir).map_err(|err| ProfileError::io(dir, err))?;
    restrict_to_owner(file.as_file()).map_err(|err| ProfileError::io(file.path(), err))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|err| ProfileError::io(file.path(), err))?;
    file.persist(&path)
        .map_err(|err| ProfileError::io(&path, err.error))?;

    debug!(path = %path.display(), count = cfg.len(), "wrote profiles");
    Ok(())
}

/// Profile names in ascending order
pub fn list_profiles(cfg: &ProfilesFile) -> Vec<String> {
    let mut names: Vec<String> = cfg.profiles.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(unix)]
fn create_config_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_config_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn restrict_to_owner(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
