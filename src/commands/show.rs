use crate::config::{self, ConfigRoot};
use crate::ui;
use anyhow::{Context, Result};

pub fn execute(root: &ConfigRoot, name: &str) -> Result<()> {
    let name = config::normalize_profile_name(name)?;
    let profiles = config::read_profiles(root).context("Failed to load profiles")?;

    let profile = profiles
        .get(&name)
        .ok_or_else(|| anyhow::anyhow!("Profile '{}' does not exist", name))?;

    ui::status("Profile", &name);
    ui::status("IG user", display_id(&profile.ig_user_id));
    ui::status("Page", display_id(&profile.page_id));
    ui::status("Business", display_id(&profile.business_id));
    Ok(())
}

fn display_id(id: &str) -> &str {
    if id.is_empty() {
        "(unset)"
    } else {
        id
    }
}
