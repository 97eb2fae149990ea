use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the question deck from an AI response and the saved questions.
    Reconcile(ReconcileArgs),
    /// Strip JSON and quoting artifacts from one fragment.
    Sanitize(SanitizeArgs),
    /// Recover a question/answer pair flattened into one string.
    Split(TextArgs),
    /// Print the matching key of a question.
    Normalize(TextArgs),
    /// Check whether an answer is too generic to suggest.
    Generic(TextArgs),
    /// Saved-question management.
    Saved {
        #[command(subcommand)]
        action: SavedCommands,
    },
    /// Print the JSON Schema of a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReconcileArgs {
    /// File holding the raw AI response, or '-' for stdin.
    #[arg(short, long)]
    pub response: String,

    /// JSON file with answers from earlier runs, as `[{"question", "answer"}]`.
    #[arg(long)]
    pub prior: Option<String>,

    /// Company name; mentions are tagged company-specific.
    #[arg(long)]
    pub company: Option<String>,

    /// Role title; mentions are tagged role-specific.
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SanitizeArgs {
    /// Text to clean, or '-' for stdin.
    pub text: String,

    /// Clean as an answer instead of a question.
    #[arg(long)]
    pub answer: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// Input text, or '-' for stdin.
    pub text: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SavedCommands {
    /// List saved questions in saved order.
    List,
    /// Save a raw question value.
    Add {
        /// Raw question value, exactly as generated.
        raw: String,
    },
    /// Remove a raw question value.
    Remove {
        /// Raw question value, exactly as saved.
        raw: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type whose schema to print.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    QuestionEntry,
    AnswerCandidate,
    SavedQuestionSet,
    GeneratedDeck,
}
