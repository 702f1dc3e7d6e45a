use anyhow::Result;
use clap::{ArgGroup, Parser};
use jdic_client::Client;
use jdic_core::SearchKind;

/// Look up words and kanji on the wwwjdic dictionary service
#[derive(Parser)]
#[command(name = "jdic", version, about)]
#[command(group(ArgGroup::new("kind").required(true).args(["en", "jp", "kanji", "radical"])))]
struct Args {
    /// Word or kanji to search for
    search_term: String,

    /// Search for a word entered in English
    #[arg(short, long)]
    en: bool,

    /// Search for a word entered in Japanese
    #[arg(short, long)]
    jp: bool,

    /// Search for a single kanji definition
    #[arg(short, long)]
    kanji: bool,

    /// Search for all kanji containing the radical
    #[arg(short, long)]
    radical: bool,

    /// Print records as JSON
    #[arg(long)]
    json: bool,

    /// Override the service base URL
    #[arg(long)]
    base_url: Option<String>,
}

impl Args {
    fn search_kind(&self) -> SearchKind {
        if self.en {
            SearchKind::WordByEnglish
        } else if self.jp {
            SearchKind::WordByJapanese
        } else if self.kanji {
            SearchKind::SingleKanji
        } else {
            SearchKind::KanjiByRadical
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut client = Client::new();
    if let Some(base_url) = &args.base_url {
        client.set_base_url(base_url.clone());
    }

    let entries = client.lookup(args.search_kind(), &args.search_term).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{entry}");
        }
    }

    Ok(())
}
