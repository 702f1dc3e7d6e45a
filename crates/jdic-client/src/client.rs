use std::sync::Arc;

use jdic_core::{
    Entry, KanjiRecord, ParseError, SearchKind, WordRecord, parse_kanji_line, parse_response,
    parse_word_line,
};

use crate::query::build_url;
use crate::transport::{HttpTransport, Transport, TransportError};

pub const DEFAULT_BASE_URL: &str = "http://www.csse.monash.edu.au/~jwb/cgi-bin/wwwjdic.cgi?";

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Client for the wwwjdic dictionary service
///
/// Each lookup performs exactly one fetch, fully resolved before returning;
/// transport failures propagate unmodified.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    /// Client backed by a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(transport),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// English/Japanese definitions for a word entered in English
    pub async fn get_word_en(&self, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let body = self.fetch(SearchKind::WordByEnglish, word).await?;
        Ok(parse_response(&body, parse_word_line)?)
    }

    /// English/Japanese definitions for a word entered in Japanese
    pub async fn get_word_jp(&self, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let body = self.fetch(SearchKind::WordByJapanese, word).await?;
        Ok(parse_response(&body, parse_word_line)?)
    }

    /// Meanings and readings for a single kanji character
    pub async fn get_kanji(&self, kanji: &str) -> Result<Vec<KanjiRecord>, LookupError> {
        let body = self.fetch(SearchKind::SingleKanji, kanji).await?;
        Ok(parse_response(&body, parse_kanji_line)?)
    }

    /// Meanings and readings for every kanji containing the given radical
    pub async fn get_kanji_by_radical(
        &self,
        radical: &str,
    ) -> Result<Vec<KanjiRecord>, LookupError> {
        let body = self.fetch(SearchKind::KanjiByRadical, radical).await?;
        Ok(parse_response(&body, parse_kanji_line)?)
    }

    /// Kind-generic lookup producing tagged entries
    pub async fn lookup(&self, kind: SearchKind, value: &str) -> Result<Vec<Entry>, LookupError> {
        let body = self.fetch(kind, value).await?;
        let parser = kind.entry_parser();
        Ok(parse_response(&body, |line| parser.parse_entry(line))?)
    }

    async fn fetch(&self, kind: SearchKind, value: &str) -> Result<String, TransportError> {
        let url = build_url(&self.base_url, kind, value);
        tracing::debug!("fetching {url}");
        self.transport.fetch(&url).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;

    struct MockTransport {
        responses: HashMap<String, &'static str>,
    }

    impl MockTransport {
        fn with_response(kind: SearchKind, value: &str, body: &'static str) -> Self {
            let url = build_url(DEFAULT_BASE_URL, kind, value);
            Self {
                responses: HashMap::from([(url, body)]),
            }
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn fetch(&self, url: &str) -> Result<String, TransportError> {
            match self.responses.get(url) {
                Some(body) => Ok(body.to_string()),
                None => panic!("unexpected url: {url}"),
            }
        }
    }

    const WORD_RESPONSE: &str = r#"<HTML>
<HEAD><META http-equiv="Content-Type" content="text/html; charset=UTF-8"><TITLE>WWWJDIC: Word Display</TITLE>
</HEAD><BODY>
<p>
<pre>

向上 [こうじょう] /(n) improvement/

</pre>
</BODY>
</HTML>"#;

    const EMPTY_RESPONSE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN">
<HTML>
<HEAD><META http-equiv="Content-Type" content="text/html; charset=UTF-8"><TITLE>WWWJDIC: Kanji Display</TITLE>
</HEAD><BODY>
<br>
<pre>
</pre>
<p>
</BODY>
</HTML>"#;

    const SINGLE_KANJI_RESPONSE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN">
<HTML>
<HEAD><META http-equiv="Content-Type" content="text/html; charset=UTF-8"><TITLE>WWWJDIC: Kanji Display</TITLE>
</HEAD><BODY>
<pre>
付 4955 U4ed8 B9 G4 S5 F322 J2 N363 V124 H31 DK19 L1000 K251 O126 DO259 MN373 MP1.0601 E574 IN192 DS502 DF302 DH602 DT454 DJ365 DB2.15 DG62 DM1009 P1-2-3 I2a3.6 Q2420.0 DR2148 Yfu4 Wbu フ つ.ける -つ.ける -づ.ける つ.け つ.け- -つ.け -づ.け -づけ つ.く -づ.く つ.き -つ.き -つき -づ.き -づき T1 つけ {adhere} {attach} {refer to} {append}
</pre>
<p>
</BODY>
</HTML>"#;

    const MULTI_KANJI_RESPONSE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN">
<HTML>
<HEAD><META http-equiv="Content-Type" content="text/html; charset=UTF-8"><TITLE>WWWJDIC: Multirad Kanji Display</TITLE>
</HEAD><BODY>
<font size="-3">&nbsp;</font><br>
Target Radicals: 一 (5) <br>
<pre>
一 306C U4e00 B1 G1 S1 XJ05021 F2 J4 N1 V1 H3341 DK2105 L1 K4 O3 DO1 MN1 MP1.0001 E1 IN2 DS1 DF1 DH1 DT1 DC1 DJ1 DB1.A DG1 DM1 P4-1-4 I0a1.1 Q1000.0 DR3072 Yyi1 Wil イチ イツ ひと- ひと.つ T1 かず い いっ いる かつ かづ てん はじめ ひ ひとつ まこと {one} {one radical (no.1)}
丁 437A U4e01 B1 G3 S2 F1312 J1 N2 V2 H3348 DK2106 L91 K794 O8 DO166 MN2 MP1.0072 E346 IN184 DS473 DF1024 DH367 DT241 DJ550 DG3 DM92 P4-2-1 I0a2.4 Q1020.0 DR3153 Yding1 Yzheng1 Wjeong チョウ テイ チン トウ チ ひのと {street} {ward} {town} {counter for guns, tools, leaves or cakes of something} {even number} {4th calendar sign}
乃 4735 U4e43 B4 G9 S2 F1978 J1 N145 V42 H2927 DK1858 L686 K1960 O27 DO1962 MN113 MP1.0339 IN2003 DM693 P3-1-1 I0a2.10 Q1722.7 DR3545 ZPP4-2-1 ZSP3-2-1 ZBP4-3-1 Ynai3 Wnae ナイ ダイ ノ アイ の すなわ.ち なんじ T1 おさむ お のり {from} {possessive particle} {whereupon} {accordingly}
了 4E3B U4e86 B6 G8 S2 F792 J2 N268 V67 H3350 DK2107 L97 K919 O9 DO1018 MN226 MP1.0409 E1905 IN941 DF293 DT1008 DJ818 DG273 DM98 P4-2-1 I2c0.3 Q1720.7 DR3553 ZSP4-1-1 Yliao3 Yle5 Wryo リョウ T1 さとる {complete} {finish}
下 323C U4e0b B1 G1 S3 XJ13023 F97 J4 N9 V9 H3378 DK2115 L50 K72 O46 DO30 MN14 MP1.0220 E7 IN31 DS21 DF6 DH24 DT13 DC75 DJ32 DB2.1 DG4 DM50 P4-3-1 I2m1.2 Q1023.0 DR3154 Yxia4 Wha カ ゲ した しも もと さ.げる さ.がる くだ.る くだ.り くだ.す -くだ.す くだ.さる お.ろす お.りる T1 さか しと {below} {down} {descend} {give} {low} {inferior}
</pre>
<p>
</BODY>
</HTML>"#;

    #[tokio::test]
    async fn get_word_jp_parses_word_records() {
        let transport =
            MockTransport::with_response(SearchKind::WordByJapanese, "koujou", WORD_RESPONSE);
        let client = Client::with_transport(transport);

        let records = client.get_word_jp("koujou").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "向上");
        assert_eq!(records[0].definition, "improvement");
    }

    #[tokio::test]
    async fn get_kanji_parses_a_single_record() {
        let transport =
            MockTransport::with_response(SearchKind::SingleKanji, "付", SINGLE_KANJI_RESPONSE);
        let client = Client::with_transport(transport);

        let records = client.get_kanji("付").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kanji, '付');
        assert_eq!(records[0].meanings[0], "adhere");
        assert_eq!(records[0].on_readings, vec!["フ"]);
    }

    #[tokio::test]
    async fn get_kanji_with_empty_response() {
        let transport = MockTransport::with_response(SearchKind::SingleKanji, "a", EMPTY_RESPONSE);
        let client = Client::with_transport(transport);

        let records = client.get_kanji("a").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn get_kanji_by_radical_parses_every_line() {
        let transport =
            MockTransport::with_response(SearchKind::KanjiByRadical, "一", MULTI_KANJI_RESPONSE);
        let client = Client::with_transport(transport);

        let records = client.get_kanji_by_radical("一").await.unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].kanji, '一');
        assert_eq!(records[4].kanji, '下');
    }

    #[tokio::test]
    async fn get_kanji_by_radical_with_empty_response() {
        let transport =
            MockTransport::with_response(SearchKind::KanjiByRadical, "一", EMPTY_RESPONSE);
        let client = Client::with_transport(transport);

        let records = client.get_kanji_by_radical("一").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn lookup_tags_entries_by_kind() {
        let transport =
            MockTransport::with_response(SearchKind::WordByJapanese, "koujou", WORD_RESPONSE);
        let client = Client::with_transport(transport);

        let entries = client
            .lookup(SearchKind::WordByJapanese, "koujou")
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], Entry::Word(_)));
    }

    #[tokio::test]
    async fn set_base_url_redirects_lookups() {
        let url = build_url("http://localhost:8000/?", SearchKind::WordByJapanese, "koujou");
        let transport = MockTransport {
            responses: HashMap::from([(url, WORD_RESPONSE)]),
        };
        let mut client = Client::with_transport(transport);
        client.set_base_url("http://localhost:8000/?");

        let records = client.get_word_jp("koujou").await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
