use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "transcache")]
#[command(about = "Translate short texts through DeepL with a persistent cache.")]
#[command(version)]
pub struct Cli {
    /// Invocation event as a JSON document
    #[arg(short = 'e', long, conflicts_with_all = ["event_file", "text"])]
    pub event: Option<String>,

    /// Read events from a file, one JSON document per line ("-" for stdin)
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub event_file: Option<PathBuf>,

    /// Text to translate (shortcut for a direct event)
    #[arg(short = 't', long, requires = "lang")]
    pub text: Option<String>,

    /// Target language code, used with --text
    #[arg(short = 'l', long, requires = "text")]
    pub lang: Option<String>,

    /// Pretty-print response envelopes
    #[arg(long)]
    pub pretty: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,
}

impl Cli {
    /// Event built from `--text` / `--lang`, if given.
    pub fn direct_event(&self) -> Option<serde_json::Value> {
        match (&self.text, &self.lang) {
            (Some(text), Some(lang)) => Some(serde_json::json!({
                "text": text,
                "target_lang": lang,
            })),
            _ => None,
        }
    }
}
