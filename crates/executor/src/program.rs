//! Program loading from hex text files.
//!
//! A program file holds one instruction word per line, written in
//! hexadecimal with or without an `0x` prefix. Blank lines are skipped;
//! anything else that does not parse as a 32-bit hex number is rejected
//! with the offending line number.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Read and parse a program file into instruction words.
pub fn read_program(path: &Path) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_program(&text, &path.display().to_string())
}

/// Parse hex instruction words, one per line.
///
/// `path` only labels diagnostics.
pub fn parse_program(text: &str, path: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::BadWord {
            path: path.to_string(),
            line: idx + 1,
            text: token.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}
