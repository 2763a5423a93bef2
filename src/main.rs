#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;

use clue_lib::{
    reports::{Belief, Snapshot},
    transcript::{Step, Transcript},
    types::err::{self},
};

/// The transcript replayed when no transcript is given.
const CLASSIC: &str = include_str!("../demos/classic.txt");

/// Replays the transcript of a game of Clue, printing a detective's notepad on request.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A transcript of a game.
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Print notepads as plain tab separated text.
    #[arg(short, long)]
    plain: bool,

    /// Print solver statistics after the replay.
    #[arg(short, long)]
    stats: bool,

    /// The level of logs written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.log_level);

    if let Err(e) = run(&args) {
        println!("c Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), err::ErrorKind> {
    let transcript = match &args.transcript {
        Some(path) => Transcript::from_file(path)?,
        None => Transcript::parse(CLASSIC)?,
    };

    let mut reasoner = transcript.reasoner()?;
    let mut notepads = transcript.replay(&mut reasoner)?;

    if !matches!(transcript.steps.last(), Some((_, Step::Notepad))) {
        notepads.push(reasoner.snapshot()?);
    }

    for (index, notepad) in notepads.iter().enumerate() {
        if index > 0 {
            println!();
        }
        match args.plain {
            true => println!("{notepad}"),
            false => print_styled(notepad),
        }
    }

    if args.stats {
        println!("c EVENTS       {}", reasoner.event_count());
        println!("{}", reasoner.oracle().counters);
    }

    Ok(())
}

fn print_styled(notepad: &Snapshot) {
    let mut header = String::default();
    for location in &notepad.locations {
        header.push_str(&format!("\t{location}"));
    }
    println!("{}", header.bold());

    for (card, beliefs) in notepad.rows() {
        print!("{}", card.to_string().bold());
        for belief in beliefs {
            let glyph = belief.glyph().to_string();
            match belief {
                Belief::True => print!("\t{}", glyph.green()),
                Belief::False => print!("\t{}", glyph.dim()),
                Belief::Unknown => print!("\t{glyph}"),
            }
        }
        println!();
    }
}

#[cfg(feature = "log")]
fn init_logging(level: LogLevel) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level.into()));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                println!("c Unable to initialise logs: {e:?}");
            }
        }
        Err(e) => println!("c Unable to configure logs: {e:?}"),
    }
}

#[cfg(not(feature = "log"))]
fn init_logging(_level: LogLevel) {}
