use clap::Parser;
use pera::core::config::{self, CliOverrides, PeraConfig, ResolvedConfig};
use pera::core::deck::Deck;
use pera::source::Source;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pera", about = "Present plain text as full-screen slides")]
struct Args {
    /// Wrap around at both ends of the deck (leave with Esc)
    #[arg(short, long = "loop")]
    looping: bool,

    /// Align pages to the bottom of the terminal
    #[arg(short, long)]
    gravity: bool,

    /// Play automatically, one page every MS milliseconds (minimum 10, 0 = manual)
    #[arg(short, long, value_name = "MS")]
    interval: Option<u64>,

    /// Encoding tried first when decoding the input; Shift_JIS and UTF-8 follow
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,

    /// File to present; `-` reads typed lines from stdin. Defaults to piped input.
    file: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("pera: {e}, using defaults");
        PeraConfig::default()
    });
    let cli = CliOverrides {
        looping: args.looping,
        gravity: args.gravity,
        interval_ms: args.interval,
        encoding: args.encoding,
    };
    let config = config::resolve(&file_config, &cli);

    init_logging(&config);
    log::info!("Pera starting up: {:?}", config);

    let source = Source::from_arg(args.file.as_deref());
    let text = match source.read(&config.encoding) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to read input: {}", e);
            eprintln!("pera: {e}");
            return ExitCode::FAILURE;
        }
    };

    let deck = Deck::from_text(&text);
    log::info!("Deck has {} pages", deck.len());

    match pera::tui::run(&deck, &config) {
        Ok(reason) => {
            log::info!("Exit: {:?}", reason);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("pera: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger; the terminal itself is busy showing slides.
fn init_logging(config: &ResolvedConfig) {
    let level = config.log_level.parse().unwrap_or_else(|_| {
        eprintln!("pera: unknown log level {:?}, using info", config.log_level);
        LevelFilter::Info
    });
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("pera: cannot create {}: {e}", parent.display());
    }
    match File::create(path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(level, log_config, log_file) {
                eprintln!("pera: logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("pera: cannot open log {}: {e}, logging disabled", path.display()),
    }
}
