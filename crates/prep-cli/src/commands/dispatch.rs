use prep_config::PrepConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command that needs configuration.
pub fn dispatch(
    command: Commands,
    config: &PrepConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Reconcile(args) => commands::reconcile::handle(&args, config, flags),
        Commands::Saved { action } => commands::saved::handle(&action, config, flags),
        Commands::Sanitize(_)
        | Commands::Split(_)
        | Commands::Normalize(_)
        | Commands::Generic(_)
        | Commands::Schema(_) => {
            unreachable!("text stages and schema are pre-dispatched in main")
        }
    }
}
