//! # prep-core
//!
//! Core value types and error types for prepdeck.
//!
//! This crate provides the foundational types shared across all prepdeck crates:
//! - Entity structs for the question/answer pipeline (entries, answer candidates,
//!   the saved-question set, parsed decks)
//! - The question tag vocabulary
//! - Cross-cutting error types
//! - CLI response types
//!
//! Every entity is a plain value recomputed on each pipeline run. None of them
//! hold references to each other.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
