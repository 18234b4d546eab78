use crate::config::{self, ConfigRoot};
use crate::ui;
use anyhow::{Context, Result};

pub fn execute(root: &ConfigRoot) -> Result<()> {
    let profiles = config::read_profiles(root).context("Failed to load profiles")?;
    let names = config::list_profiles(&profiles);

    if names.is_empty() {
        ui::info("No profiles found. Use 'igctl profile set <NAME>' to create one.");
    } else {
        for name in names {
            ui::status("Profile", name);
        }
    }
    Ok(())
}
