use crate::config::{self, ConfigRoot, Profile};
use crate::ui;
use anyhow::{Context, Result};
use tracing::debug;

/// Identifiers given on the command line; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct Changes {
    pub ig_user_id: Option<String>,
    pub page_id: Option<String>,
    pub business_id: Option<String>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.ig_user_id.is_none() && self.page_id.is_none() && self.business_id.is_none()
    }

    fn apply(self, profile: &mut Profile) {
        if let Some(id) = self.ig_user_id {
            profile.ig_user_id = id;
        }
        if let Some(id) = self.page_id {
            profile.page_id = id;
        }
        if let Some(id) = self.business_id {
            profile.business_id = id;
        }
    }
}

pub fn execute(root: &ConfigRoot, name: &str, changes: Changes) -> Result<()> {
    let name = config::normalize_profile_name(name)?;
    let mut profiles = config::read_profiles(root).context("Failed to load profiles")?;

    let existing = profiles.get(&name).cloned();
    if changes.is_empty() && existing.is_some() {
        ui::warn(format!("No identifiers given; profile '{}' unchanged", name));
        return Ok(());
    }

    let created = existing.is_none();
    let mut profile = existing.unwrap_or_default();
    changes.apply(&mut profile);
    profiles.upsert(name.clone(), profile);

    debug!(profile = %name, created, "saving profile");
    config::write_profiles(root, &profiles).context("Failed to save profiles")?;

    if created {
        ui::success("Created", format!("profile '{}'", name));
    } else {
        ui::success("Updated", format!("profile '{}'", name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_root() -> (TempDir, ConfigRoot) {
        let temp = TempDir::new().unwrap();
        let root = ConfigRoot::new(Some(temp.path().to_path_buf()), None);
        (temp, root)
    }

    #[test]
    fn test_set_creates_profile_with_normalized_name() {
        let (_temp, root) = setup_test_root();

        let changes = Changes {
            ig_user_id: Some("ig1".into()),
            ..Default::default()
        };
        execute(&root, "Brand_A", changes).unwrap();

        let profiles = config::read_profiles(&root).unwrap();
        let profile = profiles.get("brand_a").unwrap();
        assert_eq!(profile.ig_user_id, "ig1");
        assert_eq!(profile.page_id, "");
    }

    #[test]
    fn test_set_keeps_fields_not_given() {
        let (_temp, root) = setup_test_root();

        execute(
            &root,
            "default",
            Changes {
                ig_user_id: Some("ig1".into()),
                page_id: Some("page1".into()),
                business_id: Some("biz1".into()),
            },
        )
        .unwrap();
        execute(
            &root,
            "default",
            Changes {
                page_id: Some("page2".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let profiles = config::read_profiles(&root).unwrap();
        let profile = profiles.get("default").unwrap();
        assert_eq!(profile.ig_user_id, "ig1");
        assert_eq!(profile.page_id, "page2");
        assert_eq!(profile.business_id, "biz1");
    }

    #[test]
    fn test_set_without_identifiers_leaves_profile_unchanged() {
        let (_temp, root) = setup_test_root();

        execute(
            &root,
            "default",
            Changes {
                ig_user_id: Some("ig1".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let path = config::profiles_path(&root).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        execute(&root, "default", Changes::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_set_rejects_invalid_name() {
        let (_temp, root) = setup_test_root();

        let err = execute(&root, "bad name", Changes::default()).unwrap_err();
        assert!(err.to_string().contains("invalid profile name"));
        assert!(!config::profiles_path(&root).unwrap().exists());
    }
}
