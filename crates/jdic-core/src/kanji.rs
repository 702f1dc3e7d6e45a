use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::KanjiRecord;

// The Unicode ranges below are load-bearing: kanji are matched over CJK
// Unified Ideographs, on-yomi over katakana, kun-yomi over hiragana.
static KANJI_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4E00}-\x{9FBF}]+").unwrap());
static MEANING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]*)\}").unwrap());
static ON_YOMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\x{30A0}-\x{30FF}]+) ").unwrap());
// Hiragana groups (plus `-` and `.` okurigana markers) directly in front of
// the T1 marker form the kun-yomi section.
static KUN_YOMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?:[\x{3040}-\x{309F}\-.]+ )+)T1").unwrap());

/// Parses one KANJIDIC-style line into a record.
///
/// Each field is an independent match over the whole line; only the leading
/// kanji can fail. Meanings and readings are collected in order of
/// appearance, and an on-yomi run only counts when a space follows it.
pub fn parse_kanji_line(line: &str) -> Result<KanjiRecord, ParseError> {
    let kanji = KANJI_LEAD
        .find(line)
        .and_then(|lead| lead.as_str().chars().next())
        .ok_or_else(|| ParseError::malformed(line))?;

    let meanings = MEANING
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .collect();

    let on_readings = ON_YOMI
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .collect();

    let kun_readings = KUN_YOMI
        .captures(line)
        .map(|caps| caps[1].trim().split(' ').map(str::to_string).collect());

    Ok(KanjiRecord {
        kanji,
        meanings,
        on_readings,
        kun_readings,
        name_readings: Vec::new(),
    })
}
