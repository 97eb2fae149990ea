//! Serde roundtrip and JsonSchema validation tests for all entity types.

use std::collections::BTreeSet;

use prep_core::entities::*;
use prep_core::enums::QuestionTag;
use prep_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn tags(list: &[QuestionTag]) -> BTreeSet<QuestionTag> {
    list.iter().copied().collect()
}

roundtrip_and_validate!(
    question_entry_roundtrip,
    QuestionEntry,
    QuestionEntry {
        id: 0,
        raw_value: "\"question\": \"Tell me about yourself?\"".into(),
        text: "Tell me about yourself?".into(),
        tags: tags(&[QuestionTag::Behavioral]),
        suggested_approach: Some("Open with your current role, then two highlights.".into()),
        saved: true,
    }
);

roundtrip_and_validate!(
    question_entry_without_answer_roundtrip,
    QuestionEntry,
    QuestionEntry {
        id: 3,
        raw_value: "How would you design a rate limiter?".into(),
        text: "How would you design a rate limiter?".into(),
        tags: tags(&[QuestionTag::Technical, QuestionTag::RoleSpecific]),
        suggested_approach: None,
        saved: false,
    }
);

roundtrip_and_validate!(
    answer_candidate_roundtrip,
    AnswerCandidate,
    AnswerCandidate::new(
        "How do you handle conflict?",
        "Give a specific example using STAR."
    )
);

roundtrip_and_validate!(
    saved_set_roundtrip,
    SavedQuestionSet,
    ["Tell me about yourself?", "Why do you want this role?"]
        .into_iter()
        .collect::<SavedQuestionSet>()
);

roundtrip_and_validate!(
    generated_deck_roundtrip,
    GeneratedDeck,
    GeneratedDeck {
        questions: vec!["What is your greatest weakness?".into()],
        answers: vec![AnswerCandidate::new(
            "What is your greatest weakness?",
            "Pick a real weakness and show what you changed."
        )],
    }
);

roundtrip_and_validate!(
    reconcile_response_roundtrip,
    ReconcileResponse,
    ReconcileResponse::from_entries(vec![QuestionEntry {
        id: 0,
        raw_value: "Why this company?".into(),
        text: "Why this company?".into(),
        tags: tags(&[QuestionTag::CompanySpecific]),
        suggested_approach: None,
        saved: false,
    }])
);

roundtrip_and_validate!(
    split_response_roundtrip,
    SplitResponse,
    SplitResponse {
        input: "\"Q\", \"answer\": \"A\"".into(),
        pair: None,
    }
);

roundtrip_and_validate!(
    generic_check_roundtrip,
    GenericCheckResponse,
    GenericCheckResponse {
        answer: "Use the STAR method".into(),
        generic: true,
        usable: false,
    }
);

#[test]
fn absent_approach_is_omitted_from_json() {
    let entry = QuestionEntry {
        id: 1,
        raw_value: "What is your greatest weakness?".into(),
        text: "What is your greatest weakness?".into(),
        tags: BTreeSet::new(),
        suggested_approach: None,
        saved: false,
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("suggested_approach").is_none());
}

#[test]
fn saved_set_serializes_as_questions_array() {
    let set: SavedQuestionSet = ["Tell me about yourself?"].into_iter().collect();
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "questions": ["Tell me about yourself?"] })
    );
}
