use crate::error::ParseError;
use crate::kanji::parse_kanji_line;
use crate::types::{Entry, SearchKind};
use crate::word::parse_word_line;

/// Line parser for one response entry shape
pub trait EntryParser: Send + Sync {
    fn parse_entry(&self, line: &str) -> Result<Entry, ParseError>;
}

/// Parses EDICT word lines
pub struct WordEntryParser;

/// Parses KANJIDIC kanji lines
pub struct KanjiEntryParser;

impl EntryParser for WordEntryParser {
    fn parse_entry(&self, line: &str) -> Result<Entry, ParseError> {
        parse_word_line(line).map(Entry::Word)
    }
}

impl EntryParser for KanjiEntryParser {
    fn parse_entry(&self, line: &str) -> Result<Entry, ParseError> {
        parse_kanji_line(line).map(Entry::Kanji)
    }
}

impl SearchKind {
    /// Entry parser for the response shape this kind produces
    pub fn entry_parser(self) -> &'static dyn EntryParser {
        match self {
            SearchKind::WordByEnglish | SearchKind::WordByJapanese => &WordEntryParser,
            SearchKind::SingleKanji | SearchKind::KanjiByRadical => &KanjiEntryParser,
        }
    }
}
