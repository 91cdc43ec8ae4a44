use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use finsight_core::{parse_financial_data, FinancialData};

/// Load a `FinancialData` record from `--input` or piped stdin.
///
/// Validation happens at this boundary; the computation layer assumes a
/// structurally valid record.
pub fn load_financial_data(
    input: &Option<String>,
) -> Result<FinancialData, Box<dyn std::error::Error>> {
    let json = match input {
        Some(path) => read_file(path)?,
        None => read_piped_stdin()?
            .ok_or("--input is required (or pipe JSON on stdin)")?,
    };
    Ok(parse_financial_data(&json)?)
}

fn read_file(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e).into())
}

/// Read stdin only when data is actually being piped; a TTY yields None.
fn read_piped_stdin() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(buffer))
}

fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }
    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}
