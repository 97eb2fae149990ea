//! Single-stage commands: `sanitize`, `split`, `normalize`, `generic`.

use prep_core::responses::{GenericCheckResponse, SplitResponse, TextResponse};
use prep_pipeline::generic::{is_generic, is_usable_answer};
use prep_pipeline::sanitize::{SanitizeMode, sanitize as sanitize_text};
use prep_pipeline::split::try_split;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SanitizeArgs, TextArgs};
use crate::commands::input::read_text_arg;
use crate::output::output;

/// Handle `prep sanitize`.
pub fn sanitize(args: &SanitizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_text_arg(&args.text)?;
    let mode = if args.answer {
        SanitizeMode::Answer
    } else {
        SanitizeMode::Question
    };
    let output_text = sanitize_text(&input, mode);
    output(
        &TextResponse {
            input,
            output: output_text,
        },
        flags.format,
    )
}

/// Handle `prep split`.
pub fn split(args: &TextArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_text_arg(&args.text)?;
    let pair = try_split(&input);
    output(&SplitResponse { input, pair }, flags.format)
}

/// Handle `prep normalize`.
pub fn normalize(args: &TextArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_text_arg(&args.text)?;
    let output_text = prep_pipeline::normalize::normalize(&input);
    output(
        &TextResponse {
            input,
            output: output_text,
        },
        flags.format,
    )
}

/// Handle `prep generic`.
pub fn generic(args: &TextArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let answer = read_text_arg(&args.text)?;
    let response = GenericCheckResponse {
        generic: is_generic(&answer),
        usable: is_usable_answer(&answer),
        answer,
    };
    output(&response, flags.format)
}
