use std::str::FromStr;

use crate::translator::ast::{mnemonic::Mnemonic, SourceLine, Statement};

/// Strip the trailing comment (first `;` onward) and surrounding
/// whitespace.
fn strip_comment(line: &str) -> &str {
    match line.split_once(';') {
        Some((code, _comment)) => code,
        None => line,
    }
    .trim()
}

/// Split a line into its leading word and the remaining operand text.
///
/// The leading word is a run of alphanumeric or underscore characters.
/// A non-empty remainder must be separated from the word by whitespace;
/// an empty remainder is valid and covers operand-less instructions
/// such as `ret`.
fn split_leading_word(line: &str) -> Option<(&str, &str)> {
    let word_end = line
        .find(|ch: char| !ch.is_alphanumeric() && ch != '_')
        .unwrap_or(line.len());
    if word_end == 0 {
        return None;
    }

    let (word, rest) = line.split_at(word_end);
    if rest.is_empty() {
        Some((word, rest))
    } else if rest.starts_with(char::is_whitespace) {
        Some((word, rest.trim_start()))
    } else {
        None
    }
}

/// Classify one comment-stripped, non-empty line.
fn parse_line(line: &str) -> Statement {
    match split_leading_word(line) {
        Some((word, operands)) => match Mnemonic::from_str(word) {
            Ok(mnemonic) => Statement::Instruction {
                mnemonic,
                operands: operands.to_string(),
            },
            Err(_) => Statement::UnknownInstruction,
        },
        None => Statement::Unparsable,
    }
}

/// Parse source text into one statement per non-empty line.
///
/// Lines that are empty after comment stripping are skipped entirely;
/// they produce no statement and leave no trace in the output.
#[tracing::instrument]
pub fn parse_program(input: &str) -> Vec<SourceLine> {
    input
        .lines()
        .map(strip_comment)
        .filter(|line| !line.is_empty())
        .map(|line| SourceLine::new(line, parse_line(line)))
        .collect()
}
