pub mod error;
pub mod kanji;
pub mod parser;
pub mod response;
pub mod types;
pub mod word;

pub use error::ParseError;
pub use kanji::parse_kanji_line;
pub use parser::{EntryParser, KanjiEntryParser, WordEntryParser};
pub use response::parse_response;
pub use types::{Entry, KanjiRecord, SearchKind, WordRecord};
pub use word::parse_word_line;
