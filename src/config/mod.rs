//! Profile store: named account profiles kept in a single TOML document
//! under the user's config directory.
//!
//! The document is always read whole and replaced whole. Callers load it
//! with [`read_profiles`], change it in memory, and hand it back to
//! [`write_profiles`].

mod error;
mod paths;
mod profiles;

pub use error::ProfileError;
pub use paths::{profiles_path, ConfigRoot, APP_NAME, PROFILES_FILE};
pub use profiles::{
    list_profiles, normalize_profile_name, read_profiles, write_profiles, Profile, ProfilesFile,
};
