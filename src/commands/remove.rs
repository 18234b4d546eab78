use crate::config::{self, ConfigRoot};
use crate::ui;
use anyhow::{Context, Result};

pub fn execute(root: &ConfigRoot, name: &str) -> Result<()> {
    let name = config::normalize_profile_name(name)?;
    let mut profiles = config::read_profiles(root).context("Failed to load profiles")?;

    if profiles.remove(&name).is_none() {
        anyhow::bail!("Profile '{}' does not exist", name);
    }

    config::write_profiles(root, &profiles).context("Failed to save profiles")?;
    ui::success("Removed", format!("profile '{}'", name));
    Ok(())
}
