//! Logger setup: everything goes to stdout, optionally teed to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Install the global logger.
///
/// `--quiet` keeps warnings and errors only; `--verbose` adds debug output and
/// timestamps. `RUST_LOG` still applies on top.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let target: Box<dyn Write + Send> = match logfile {
        Some(path) => {
            let file = File::create(path)?;
            Box::new(Tee {
                stdout: io::stdout(),
                file: strip_ansi_escapes::Writer::new(file),
            })
        }
        None => Box::new(io::stdout()),
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            } else if record.level() == Level::Error {
                writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                )
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .target(env_logger::Target::Pipe(target))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Writes to stdout and to a log file with colour codes removed.
struct Tee {
    stdout: io::Stdout,
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.file.flush()
    }
}
