//! Entity structs for the prepdeck question/answer pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. They are immutable values: the pipeline
//! rebuilds them from its inputs on every run.

mod answer;
mod deck;
mod question;
mod saved;

pub use answer::AnswerCandidate;
pub use deck::GeneratedDeck;
pub use question::QuestionEntry;
pub use saved::SavedQuestionSet;
