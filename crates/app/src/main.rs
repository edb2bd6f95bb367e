mod input;
mod render;

use std::fmt;
use std::sync::Arc;

use exam_core::Catalog;
use exam_core::session::{PassPolicy, QuizEvent};
use services::{GeneratorConfig, HttpQuestionGenerator, QuizSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use crate::input::Input;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPassMark { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPassMark { raw } => {
                write!(f, "invalid --pass-mark value (expected 0-100): {raw}")
            }
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  ic38 [--model <name>] [--base-url <url>] [--pass-mark <percent>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {}", GeneratorConfig::DEFAULT_BASE_URL);
    eprintln!("  --model {}", GeneratorConfig::DEFAULT_MODEL);
    eprintln!("  --pass-mark {}", PassPolicy::DEFAULT_THRESHOLD_PERCENT);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  IC38_AI_API_KEY (or API_KEY), IC38_AI_BASE_URL, IC38_AI_MODEL,");
    eprintln!("  IC38_AI_TIMEOUT_SECS, IC38_PASS_MARK, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    model: Option<String>,
    base_url: Option<String>,
    pass_mark: Option<u32>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            pass_mark: std::env::var("IC38_PASS_MARK")
                .ok()
                .and_then(|value| parse_pass_mark(&value).ok()),
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => parsed.model = Some(require_value(args, "--model")?),
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    parsed.base_url = Some(value);
                }
                "--pass-mark" => {
                    let value = require_value(args, "--pass-mark")?;
                    parsed.pass_mark = Some(parse_pass_mark(&value)?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn generator_config(&self) -> Option<GeneratorConfig> {
        let mut config = GeneratorConfig::from_env()?;
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        Some(config)
    }

    fn pass_policy(&self) -> PassPolicy {
        self.pass_mark.map_or_else(PassPolicy::default, PassPolicy::new)
    }
}

fn parse_pass_mark(raw: &str) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or_else(|| ArgsError::InvalidPassMark {
            raw: raw.to_string(),
        })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Screens go to stdout; keep logs on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let generator = Arc::new(HttpQuestionGenerator::new(args.generator_config()));
    if !generator.enabled() {
        tracing::warn!("no API key set; quizzes cannot be generated");
    }
    if let Some(config) = generator.config() {
        tracing::info!(model = %config.model, base_url = %config.base_url, "question generator configured");
    }

    let catalog = Catalog::ic38();
    let policy = args.pass_policy();
    let mut session = QuizSession::new(generator).with_pass_policy(policy);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<JoinHandle<QuizEvent>> = None;

    println!("{}", render::screen(session.state(), &catalog, &policy));
    loop {
        tokio::select! {
            Some(joined) = join_pending(&mut pending) => {
                pending = None;
                match joined {
                    Ok(completion) => session.complete(completion),
                    Err(err) => tracing::error!(error = %err, "generation task failed"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match input::parse(&line, session.state(), &catalog) {
                    Input::Quit => break,
                    Input::Help => {
                        print_usage();
                        continue;
                    }
                    Input::Unknown => {
                        println!("? (h for help)");
                        continue;
                    }
                    Input::Event(event) => match session.dispatch(event) {
                        Ok(Some(generation)) => {
                            pending = Some(tokio::spawn(generation.run()));
                        }
                        Ok(None) => {}
                        Err(err) => {
                            println!("{err}");
                            continue;
                        }
                    },
                }
                // Nothing awaits the in-flight call any more (e.g. exit while loading).
                if session.state().active_attempt().is_none() {
                    if let Some(stale) = pending.take() {
                        stale.abort();
                    }
                }
            }
        }
        println!("{}", render::screen(session.state(), &catalog, &policy));
    }

    if let Some(stale) = pending.take() {
        stale.abort();
    }
    Ok(())
}

/// Resolves with the generation task's result, or never when nothing is in flight.
async fn join_pending(
    pending: &mut Option<JoinHandle<QuizEvent>>,
) -> Option<Result<QuizEvent, tokio::task::JoinError>> {
    match pending {
        Some(handle) => Some(handle.await),
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
