use std::fmt;
use std::path::PathBuf;

use cb_core::GenerationRequest;
use cb_inference::ModelKind;
use clap::Parser;

pub const DEFAULT_AUDIENCE: &str = "Business owners and marketing leads";
pub const DEFAULT_PLATFORM: &str = "linkedin";
pub const DEFAULT_WORDS: u32 = 1200;
pub const DEFAULT_TONE: &str = "smart, friendly, practical";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CalendarPeriod {
    Weekly,
    Monthly,
}

impl fmt::Display for CalendarPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarPeriod::Weekly => write!(f, "weekly"),
            CalendarPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "content-bot", author, version)]
#[command(about = "Generate long-form articles, social snippets and metadata with an LLM backend")]
#[command(long_about = "\
Generate long-form articles, social snippets and metadata with an LLM backend.

Single article:
  content-bot --topic \"CRM hygiene for agencies\" --platform linkedin --words 1200

Content calendar (topics generated from content.pillars in the config):
  content-bot --calendar weekly --count 4

Each article lands in outputs/<YYYY-MM-DD>/<slug>/ as article.md, social.md
and meta.json. The openai backend reads its key from OPENAI_API_KEY.")]
pub struct Cli {
    /// Article topic
    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long, default_value = DEFAULT_AUDIENCE)]
    pub audience: String,

    #[arg(long, default_value = DEFAULT_PLATFORM)]
    pub platform: String,

    /// Target article length in words
    #[arg(long, default_value_t = DEFAULT_WORDS)]
    pub words: u32,

    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,

    /// Generate a content calendar from generated topic ideas
    #[arg(long, value_enum)]
    pub calendar: Option<CalendarPeriod>,

    /// Number of articles to generate in calendar mode
    #[arg(long, default_value_t = 4)]
    pub count: usize,

    /// Path to config file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Root of the dated output tree
    #[arg(long, default_value = "outputs")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = ModelKind::OpenAi)]
    pub backend: ModelKind,

    /// Generate and validate without writing files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The single-article topic, ignoring a blank `--topic`.
    pub fn single_topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|topic| !topic.trim().is_empty())
    }

    /// Request template; calendar items replace the topic.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            topic: self.topic.clone().unwrap_or_default(),
            audience: self.audience.clone(),
            platform: self.platform.clone(),
            target_words: self.words,
            tone: self.tone.clone(),
        }
    }

    pub fn storage_kind(&self) -> &'static str {
        if self.dry_run {
            "memory"
        } else {
            "file"
        }
    }
}
