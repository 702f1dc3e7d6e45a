use std::fmt;

use serde::{Deserialize, Serialize};

/// Dictionary query kinds supported by the wwwjdic backdoor interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    WordByEnglish,
    WordByJapanese,
    SingleKanji,
    KanjiByRadical,
}

/// One EDICT word entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub reading: String,
    pub word_types: Vec<String>,
    pub definition: String,
}

/// One KANJIDIC entry
///
/// `kun_readings` is `None` when the line carries no kun-yomi section at
/// all, which is distinct from a section that is present but empty.
/// `name_readings` is reserved and currently never populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    pub kanji: char,
    pub meanings: Vec<String>,
    pub on_readings: Vec<String>,
    pub kun_readings: Option<Vec<String>>,
    pub name_readings: Vec<String>,
}

/// Kind-polymorphic record, tagged by the entry shape that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Word(WordRecord),
    Kanji(KanjiRecord),
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}) {}",
            self.word,
            self.reading,
            self.word_types.join(","),
            self.definition
        )
    }
}

impl fmt::Display for KanjiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kanji, self.meanings.join("; "))?;
        if !self.on_readings.is_empty() {
            write!(f, " on: {}", self.on_readings.join(" "))?;
        }
        if let Some(kun) = &self.kun_readings {
            write!(f, " kun: {}", kun.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Word(record) => record.fmt(f),
            Entry::Kanji(record) => record.fmt(f),
        }
    }
}
