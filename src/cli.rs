use clap::{Parser, Subcommand};

/// igctl - Instagram Graph command line tool
///
/// Profiles bundle the Instagram user, Facebook page, and business IDs
/// a command should act on. They are stored in `profiles.toml` under
/// `$XDG_CONFIG_HOME/igctl` (default: `~/.config/igctl`).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stored profiles
    #[command(subcommand)]
    Profile(ProfileAction),
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List profile names
    List,

    /// Show the identifiers stored for a profile
    Show {
        /// Profile name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Create a profile or update its identifiers
    ///
    /// Only the given identifiers change; the rest keep their stored values.
    Set {
        /// Profile name: letters, digits, and underscore
        #[arg(value_name = "NAME")]
        name: String,

        /// Instagram user ID
        #[arg(long, value_name = "ID")]
        ig_user_id: Option<String>,

        /// Facebook page ID
        #[arg(long, value_name = "ID")]
        page_id: Option<String>,

        /// Business account ID
        #[arg(long, value_name = "ID")]
        business_id: Option<String>,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Remove {
        /// Profile name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the location of the profiles file
    Path,
}
