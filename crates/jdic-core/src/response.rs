use crate::error::ParseError;

/// Extracts the dictionary payload from a wwwjdic HTML response and parses
/// one record per non-blank line, in source order.
///
/// The payload is the text strictly between the first `<pre>` and the first
/// `</pre>` after it. Missing markers yield an empty payload rather than an
/// error; the first malformed line aborts the whole response.
pub fn parse_response<T>(
    raw: &str,
    parse_entry: impl Fn(&str) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    pre_block(raw)
        .unwrap_or("")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_entry(line))
        .collect()
}

fn pre_block(raw: &str) -> Option<&str> {
    let start = raw.find("<pre>")? + "<pre>".len();
    let end = start + raw[start..].find("</pre>")?;
    Some(&raw[start..end])
}
