use std::fmt;
use std::io;
use std::path::PathBuf;

use services::{AppServices, SessionConfig};
use wordcards_core::model::ListId;

mod terminal;

use terminal::Terminal;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidList { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidList { raw } => write!(f, "invalid --list value: {raw}"),
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
    eprintln!("  wordcards [--words-dir <dir>] [--progress <file>] [--list <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --words-dir vocabulary_csv");
    eprintln!("  --progress progress.json");
    eprintln!("  --list list1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WORDCARDS_WORDS_DIR, WORDCARDS_PROGRESS, WORDCARDS_LIST, RUST_LOG");
}

struct Args {
    words_dir: Option<PathBuf>,
    progress_path: Option<PathBuf>,
    list: Option<ListId>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut words_dir = env_value("WORDCARDS_WORDS_DIR").map(PathBuf::from);
        let mut progress_path = env_value("WORDCARDS_PROGRESS").map(PathBuf::from);
        let mut list = env_value("WORDCARDS_LIST").map(parse_list).transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--words-dir" => words_dir = Some(require_value(args, "--words-dir")?.into()),
                "--progress" => progress_path = Some(require_value(args, "--progress")?.into()),
                "--list" => list = Some(parse_list(require_value(args, "--list")?)?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            words_dir,
            progress_path,
            list,
        })
    }

    fn into_config(self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(dir) = self.words_dir {
            config = config.with_words_dir(dir);
        }
        if let Some(path) = self.progress_path {
            config = config.with_progress_path(path);
        }
        if let Some(list) = self.list {
            config = config.with_initial_list(list);
        }
        config
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_list(raw: String) -> Result<ListId, ArgsError> {
    ListId::new(raw.as_str()).map_err(|_| ArgsError::InvalidList { raw })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = Args::parse(&mut argv)
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?
        .into_config();

    log::debug!(
        "words from {}, progress at {}",
        config.words_dir.display(),
        config.progress_path.display()
    );
    let mut session = AppServices::from_config(config).start_session()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Terminal::new(stdin.lock(), stdout.lock()).run(&mut session)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
