// Public API
pub mod cli;
pub mod commands;
pub mod config;

mod ui;

// Re-export the profile store
pub use config::{
    list_profiles, normalize_profile_name, profiles_path, read_profiles, write_profiles,
    ConfigRoot, Profile, ProfileError, ProfilesFile,
};
