//! # prep-pipeline
//!
//! Recovers a clean interview-question deck from dirty AI output.
//!
//! Stages, each usable on its own:
//! - [`sanitize`]: strip JSON and quoting artifacts from one fragment
//! - [`split`]: recover a question/answer pair flattened into one string
//! - [`normalize`]: case and punctuation insensitive matching key
//! - [`generic`]: reject boilerplate answers
//! - [`matcher`]: pick an answer for a question from a candidate pool
//! - [`reconcile`]: merge saved questions with a fresh deck
//!
//! [`response`] turns the raw model text into a [`prep_core::entities::GeneratedDeck`]
//! and [`tagger`] assigns tags to reconciled questions.
//!
//! Everything here is synchronous and pure. Malformed input degrades to empty
//! results rather than errors.

pub mod error;
pub mod generic;
pub mod matcher;
pub mod normalize;
pub mod reconcile;
pub mod response;
pub mod sanitize;
pub mod split;
pub mod tagger;

pub use error::ResponseError;
pub use reconcile::{ReconcileInput, Reconciler, reconcile};
pub use response::{parse_generation, try_parse_generation};
pub use tagger::{KeywordTagger, QuestionTagger};
