use crate::config::{self, ConfigRoot};
use anyhow::Result;

pub fn execute(root: &ConfigRoot) -> Result<()> {
    println!("{}", config::profiles_path(root)?.display());
    Ok(())
}
