use prep_config::PrepConfig;
use prep_core::responses::{SavedChangeResponse, SavedListResponse};

use crate::bootstrap::store_path;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SavedCommands;
use crate::output::output;
use crate::store;

/// Handle `prep saved`.
pub fn handle(
    action: &SavedCommands,
    config: &PrepConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = store_path(flags, config);
    let mut set = store::load(&path)?;

    match action {
        SavedCommands::List => {
            let questions = set.as_slice().to_vec();
            let total = count(questions.len());
            output(&SavedListResponse { questions, total }, flags.format)
        }
        SavedCommands::Add { raw } => {
            let changed = set.save(raw.as_str())?;
            if changed {
                store::save(&path, &set)?;
            }
            let response = SavedChangeResponse {
                question: raw.clone(),
                changed,
                total: count(set.len()),
            };
            output(&response, flags.format)
        }
        SavedCommands::Remove { raw } => {
            let changed = set.unsave(raw);
            if changed {
                store::save(&path, &set)?;
            } else {
                tracing::warn!(question = %raw, "question was not saved; nothing removed");
            }
            let response = SavedChangeResponse {
                question: raw.clone(),
                changed,
                total: count(set.len()),
            };
            output(&response, flags.format)
        }
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
