#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed entry line: {line}")]
    MalformedEntry { line: String },
}

impl ParseError {
    pub(crate) fn malformed(line: &str) -> Self {
        ParseError::MalformedEntry {
            line: line.to_string(),
        }
    }
}
