use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::WordRecord;

// <word> [<reading>] /(<type>,<type>,...) <definition>/
static WORD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+) \[([^\]]*)\] /\(([^)]*)\) ([^/]*)/").unwrap());

/// Parses one EDICT-style word line into a record.
///
/// The type list between `/(` and `)` can hold several comma-separated
/// codes; their order is preserved.
pub fn parse_word_line(line: &str) -> Result<WordRecord, ParseError> {
    let caps = WORD_LINE
        .captures(line)
        .ok_or_else(|| ParseError::malformed(line))?;

    Ok(WordRecord {
        word: caps[1].to_string(),
        reading: caps[2].to_string(),
        word_types: caps[3].split(',').map(str::to_string).collect(),
        definition: caps[4].to_string(),
    })
}
