use prep_core::entities::{AnswerCandidate, GeneratedDeck, QuestionEntry, SavedQuestionSet};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `prep schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.type_name)?, flags.format)
}

fn schema_value(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::QuestionEntry => schema_for!(QuestionEntry),
        SchemaType::AnswerCandidate => schema_for!(AnswerCandidate),
        SchemaType::SavedQuestionSet => schema_for!(SavedQuestionSet),
        SchemaType::GeneratedDeck => schema_for!(GeneratedDeck),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_entry_schema_lists_fields() {
        let schema = schema_value(SchemaType::QuestionEntry).unwrap();
        let properties = schema["properties"].as_object().expect("properties");
        for field in ["id", "raw_value", "text", "tags", "suggested_approach", "saved"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn saved_set_schema_is_object() {
        let schema = schema_value(SchemaType::SavedQuestionSet).unwrap();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["questions"].is_object());
    }
}
