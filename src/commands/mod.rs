use crate::cli::{Cli, Commands, ProfileAction};
use crate::config::ConfigRoot;
use anyhow::Result;

mod list;
mod path;
mod remove;
mod set;
mod show;

pub fn execute(cli: Cli) -> Result<()> {
    // Environment is read once here; everything below takes explicit paths
    let root = ConfigRoot::from_env();

    match cli.command {
        Commands::Profile(action) => match action {
            ProfileAction::List => list::execute(&root),

            ProfileAction::Show { name } => show::execute(&root, &name),

            ProfileAction::Set {
                name,
                ig_user_id,
                page_id,
                business_id,
            } => set::execute(
                &root,
                &name,
                set::Changes {
                    ig_user_id,
                    page_id,
                    business_id,
                },
            ),

            ProfileAction::Remove { name } => remove::execute(&root, &name),

            ProfileAction::Path => path::execute(&root),
        },
    }
}
