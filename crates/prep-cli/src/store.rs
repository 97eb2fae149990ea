//! Saved-question set persistence: one JSON file, `{"questions": [...]}`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use prep_core::entities::SavedQuestionSet;

/// Read the saved set. A missing file is an empty set.
pub fn load(path: &Path) -> anyhow::Result<SavedQuestionSet> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no saved-questions file; starting empty");
        return Ok(SavedQuestionSet::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read saved questions at {}", path.display()))?;
    let set: SavedQuestionSet = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse saved questions at {}", path.display()))?;

    // Deserializing bypasses the set's blank/duplicate checks.
    Ok(set.iter().collect())
}

/// Write the saved set, creating parent directories as needed.
pub fn save(path: &Path, set: &SavedQuestionSet) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(set)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("failed to write saved questions at {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = set.len(), "saved questions written");
    Ok(())
}
