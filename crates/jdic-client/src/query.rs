use jdic_core::SearchKind;

/// Backdoor query code used by wwwjdic for the given search kind
///
/// Details: http://www.csse.monash.edu.au/~jwb/wwwjdicinf.html#backdoor_tag
pub fn query_code(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::WordByEnglish => "4ZUE",
        SearchKind::WordByJapanese => "4ZUJ",
        SearchKind::SingleKanji => "1ZMJ",
        SearchKind::KanjiByRadical => "1ZFX",
    }
}

/// Builds the query URL for a search.
///
/// The service accepts raw UTF-8 directly in the query, so the search value
/// is passed through unescaped.
pub fn build_url(base_url: &str, kind: SearchKind, value: &str) -> String {
    format!("{}{}{}", base_url, query_code(kind), value)
}
