#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
use clap::{Args, Parser, Subcommand};
use std::io::{Read, Write};
use tracing::{Level, debug, info};

mod config;
pub mod error;
pub mod hex;
mod output;
#[cfg(test)]
mod test;
mod version;

pub use error::Error;
pub use hex::{DecodeError, decode};
pub use output::OutputFormat;

/// Strictly decode hex strings into raw bytes.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct App {
    /// Global cli options
    #[clap(flatten)]
    pub global_opts: GlobalOpts,

    /// The subcommand to run
    #[clap(subcommand)]
    pub command: Command,
}

impl App {
    /// Run the application, reading from stdin and writing to stdout.
    pub fn run(self) -> Result<(), String> {
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        self.execute(&mut stdin, &mut stdout)
            .map_err(|e| error::full_error_stack(&e))
    }

    /// Run the application with the given input and output streams.
    pub fn execute<R: Read, W: Write>(self, input: &mut R, out: &mut W) -> Result<(), Error> {
        match self.command {
            Command::Decode {
                input_opts,
                format,
                output: out_file,
            } => {
                let config = self.global_opts.setup()?;
                let hex = read_input(input_opts.hex, input, config.output.trim)?;
                let bytes = decode(&hex)?;
                let format = format.unwrap_or(config.output.format);
                debug!("Decoded {} bytes, writing them as {format:?}", bytes.len());

                match out_file {
                    Some(path) => {
                        let mut file =
                            std::fs::File::create(&path).map_err(Error::WriteOutput)?;
                        output::write_bytes(&mut file, &bytes, format, config.output.line_width)
                            .map_err(Error::WriteOutput)?;
                        info!("Wrote {} bytes to '{path}'", bytes.len());
                    }
                    None => {
                        output::write_bytes(out, &bytes, format, config.output.line_width)
                            .map_err(Error::WriteOutput)?;
                    }
                }
            }
            Command::Check { input_opts } => {
                let config = self.global_opts.setup()?;
                let hex = read_input(input_opts.hex, input, config.output.trim)?;
                let bytes = decode(&hex)?;
                writeln!(out, "valid: {} bytes", bytes.len()).map_err(Error::WriteOutput)?;
            }
            Command::Version => {
                writeln!(out, "{}", version::VersionInfo::current()).map_err(Error::WriteOutput)?;
            }
        }
        Ok(())
    }
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a hex string and write the bytes
    Decode {
        #[clap(flatten)]
        input_opts: InputOptions,

        /// Output format, overrides the format given in the config file
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the output to this file instead of stdout
        #[clap(long, short)]
        output: Option<String>,
    },
    /// Validate a hex string without writing the bytes
    Check {
        #[clap(flatten)]
        input_opts: InputOptions,
    },
    /// Print the version and exit
    Version,
}

/// Global cli options used by all commands (except `version`).
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Log level to use, overrides the level given in the config file
    #[clap(long, global = true)]
    pub log: Option<String>,

    /// Path to an optional config file
    #[clap(long, short, global = true)]
    pub config: Option<String>,
}

impl GlobalOpts {
    /// Load the configuration and initialize logging.
    fn setup(&self) -> Result<config::Configuration, Error> {
        let config = config::Configuration::load_or_default(self.config.as_deref())?;

        let log_level = match &self.log {
            Some(level) => level,
            None => &config.log_level,
        };
        set_log_level(log_level);
        Ok(config)
    }
}

/// Input options shared by `decode` and `check`.
#[derive(Debug, Args)]
pub struct InputOptions {
    /// Hex string to decode, read from stdin when omitted
    #[clap(index = 1)]
    pub hex: Option<String>,
}

fn set_log_level(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => {
            eprintln!("Invalid log level: {level}. Defaulting to 'info'.");
            Level::INFO
        }
    };
    // Decoded bytes go to stdout, so logs must not.
    let logger = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    #[cfg(not(test))]
    logger.init();

    // We can only init the logger once, but testing might call the parent function multiple times.
    #[cfg(test)]
    logger.try_init().unwrap_or_default();
}

/// Take the hex string from the argument, or read it from the input stream.
fn read_input<R: Read>(arg: Option<String>, input: &mut R, trim: bool) -> Result<String, Error> {
    let hex = match arg {
        Some(hex) => hex,
        None => {
            let mut buf = String::new();
            let read = input.read_to_string(&mut buf).map_err(Error::ReadInput)?;
            if read == 0 {
                return Err(Error::EmptyInput());
            }
            debug!("Read {read} bytes from stdin");
            buf
        }
    };

    if trim {
        Ok(hex.trim().to_string())
    } else {
        Ok(hex)
    }
}
