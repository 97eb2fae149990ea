use std::io::Read;

use anyhow::Context;

/// Read a file, or stdin when `source` is `-`.
pub fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

/// Inline text argument, or stdin when it is `-`.
pub fn read_text_arg(text: &str) -> anyhow::Result<String> {
    if text == "-" {
        return read_source(text).map(|s| s.trim_end_matches(['\n', '\r']).to_string());
    }
    Ok(text.to_string())
}
