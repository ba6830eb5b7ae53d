use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;


/// How decoded bytes are written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The raw bytes themselves
    #[default]
    Raw,
    /// Lowercase hex dump, space separated
    Hex,
    /// JSON array of integers
    Json,
    /// Bytes as text, invalid UTF-8 is replaced
    Text,
}

/// Options controlling input handling and output rendering
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct OutputOptions {
    /// Output format, defaults to "raw"
    #[serde(default)]
    pub format: OutputFormat,
    /// Strip leading and trailing whitespace from the input before decoding
    #[serde(default = "default_trim")]
    pub trim: bool,
    /// Bytes per line when using the "hex" format
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_trim() -> bool {
    true
}

fn default_line_width() -> usize {
    16
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            trim: default_trim(),
            line_width: default_line_width(),
        }
    }
}

impl OutputOptions {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.line_width == 0 {
            return Err("line-width must be at least 1");
        }
        Ok(())
    }
}

/// Write the bytes to the writer in the given format.
pub fn write_bytes<W: Write>(
    w: &mut W,
    bytes: &[u8],
    format: OutputFormat,
    line_width: usize,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Raw => w.write_all(bytes)?,
        OutputFormat::Hex => {
            for line in bytes.chunks(line_width.max(1)) {
                let line = line
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(w, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *w, bytes)?;
            writeln!(w)?;
        }
        OutputFormat::Text => {
            writeln!(w, "{}", String::from_utf8_lossy(bytes))?;
        }
    }
    w.flush()
}
