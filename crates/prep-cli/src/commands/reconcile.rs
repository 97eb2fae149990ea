use anyhow::Context;
use prep_config::{PrepConfig, TaggerConfig};
use prep_core::entities::AnswerCandidate;
use prep_core::enums::QuestionTag;
use prep_core::responses::ReconcileResponse;
use prep_pipeline::{KeywordTagger, ReconcileInput, Reconciler, parse_generation};

use crate::bootstrap::store_path;
use crate::cli::root_commands::ReconcileArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::input::read_source;
use crate::output::output;
use crate::store;

/// Handle `prep reconcile`.
pub fn handle(
    args: &ReconcileArgs,
    config: &PrepConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = read_source(&args.response)?;
    let deck = parse_generation(&raw);

    let saved = store::load(&store_path(flags, config))?;
    let prior = match &args.prior {
        Some(path) => load_prior(path)?,
        None => Vec::new(),
    };

    let tagger = build_tagger(&config.tagger, args.company.as_deref(), args.role.as_deref());
    let input = ReconcileInput::from_deck(&saved, deck, prior);
    let entries = Reconciler::new(tagger).reconcile(&input);

    if entries.is_empty() {
        tracing::warn!("failed to generate questions: nothing usable in the response");
    }

    let response = ReconcileResponse::from_entries(entries);
    if flags.format == OutputFormat::Table {
        return output(&response.entries, flags.format);
    }
    output(&response, flags.format)
}

fn load_prior(path: &str) -> anyhow::Result<Vec<AnswerCandidate>> {
    let contents = read_source(path)?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse prior answers at {path}"))
}

/// Configured keyword lists, with command-line company/role taking precedence.
fn build_tagger(
    config: &TaggerConfig,
    company: Option<&str>,
    role: Option<&str>,
) -> KeywordTagger {
    let tagger = KeywordTagger::default()
        .with_keywords(QuestionTag::Technical, &config.technical)
        .with_keywords(QuestionTag::Behavioral, &config.behavioral)
        .with_keywords(QuestionTag::CompanySpecific, &config.company_specific)
        .with_keywords(QuestionTag::RoleSpecific, &config.role_specific);

    tagger
        .with_company(company.unwrap_or(&config.company))
        .with_role(role.unwrap_or(&config.role))
}
