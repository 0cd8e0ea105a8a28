use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, DEFAULT_CACHE_TTL_SECS, QuizService, Shuffle};
use sources::{SheetConfig, Sources};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const SAMPLE_LABEL: &str = "bundled sample deck";
const SAMPLE_WORDS: &str = include_str!("../data/sample_words.csv");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTtl { raw: String },
    InvalidSeed { raw: String },
    ConflictingSources,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTtl { raw } => write!(f, "invalid --cache-ttl value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::ConflictingSources => {
                write!(f, "choose only one of --sheet, --csv and --sample")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceChoice {
    Sheet(String),
    CsvFile(PathBuf),
    Sample,
}

#[derive(Debug)]
struct Args {
    source: SourceChoice,
    cache_ttl: Duration,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--sheet <url> | --csv <path> | --sample]");
    eprintln!("                      [--cache-ttl <secs>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  bundled sample deck, --cache-ttl {DEFAULT_CACHE_TTL_SECS}, random order");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCAB_SHEET_URL, VOCAB_CSV_PATH, VOCAB_CACHE_TTL_SECS, VOCAB_SEED, RUST_LOG");
}

fn parse_ttl(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs >= 0)
        .and_then(Duration::try_seconds)
        .ok_or(ArgsError::InvalidTtl { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn choose_source(
    choice: SourceChoice,
    current: &mut Option<SourceChoice>,
) -> Result<(), ArgsError> {
    if current.is_some() {
        return Err(ArgsError::ConflictingSources);
    }
    *current = Some(choice);
    Ok(())
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let mut source: Option<SourceChoice> = None;
        let mut cache_ttl = None;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sheet" => {
                    let value = require_value(&mut args, "--sheet")?;
                    choose_source(SourceChoice::Sheet(value), &mut source)?;
                }
                "--csv" => {
                    let value = require_value(&mut args, "--csv")?;
                    choose_source(SourceChoice::CsvFile(PathBuf::from(value)), &mut source)?;
                }
                "--sample" => choose_source(SourceChoice::Sample, &mut source)?,
                "--cache-ttl" => {
                    cache_ttl = Some(parse_ttl(require_value(&mut args, "--cache-ttl")?)?);
                }
                "--seed" => seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Flags win over the environment.
        let source = match source {
            Some(choice) => choice,
            None => {
                if let Some(config) = SheetConfig::from_env() {
                    SourceChoice::Sheet(config.share_url)
                } else if let Some(path) = env_value("VOCAB_CSV_PATH") {
                    SourceChoice::CsvFile(PathBuf::from(path))
                } else {
                    SourceChoice::Sample
                }
            }
        };
        let cache_ttl = match cache_ttl {
            Some(ttl) => ttl,
            None => env_value("VOCAB_CACHE_TTL_SECS")
                .map(parse_ttl)
                .transpose()?
                .unwrap_or_else(|| Duration::seconds(DEFAULT_CACHE_TTL_SECS)),
        };
        let seed = match seed {
            Some(seed) => Some(seed),
            None => env_value("VOCAB_SEED").map(parse_seed).transpose()?,
        };

        Ok(Self {
            source,
            cache_ttl,
            seed,
        })
    }
}

fn build_sources(choice: &SourceChoice) -> Result<Sources, Box<dyn std::error::Error>> {
    let sources = match choice {
        SourceChoice::Sheet(url) => Sources::sheet(url)?,
        SourceChoice::CsvFile(path) => Sources::csv_file(path.clone()),
        SourceChoice::Sample => Sources::embedded(SAMPLE_LABEL, SAMPLE_WORDS),
    };
    Ok(sources)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let sources = build_sources(&parsed.source)?;
    let shuffle = parsed.seed.map_or(Shuffle::Random, Shuffle::Seeded);
    let quiz = QuizService::new(Clock::system(), Arc::clone(&sources.words))
        .with_shuffle(shuffle)
        .with_cache_ttl(parsed.cache_ttl);
    info!(
        source = %quiz.describe_source(),
        cache_ttl_secs = parsed.cache_ttl.num_seconds(),
        ?shuffle,
        "starting vocabulary quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: Arc::new(quiz),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vocabulary Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
