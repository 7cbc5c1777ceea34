//! Argument parsing layer (clap).

use clap::{Parser, ValueEnum};

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Destination host
    pub host: String,

    /// Destination port (`-p`)
    #[arg(short, long, default_value_t = 12000)]
    pub port: u16,

    /// Number of probes (`-c`)
    #[arg(short, long, default_value_t = 10, value_parser = parse_count)]
    pub count: usize,

    /// Per-probe reply timeout in seconds (`-w`)
    #[arg(short = 'w', long, default_value_t = 1.0, value_parser = parse_timeout)]
    pub timeout: f64,

    /// Output format (`-o`)
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputMode::Normal,
        help = "normal | json | csv | md | color"
    )]
    pub output_mode: OutputMode,
}

/// Supported output modes.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Normal,
    Json,
    Csv,
    Md,    // Markdown
    Color, // ANSI-colored TTY
}

fn parse_count(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if count >= 1 {
        Ok(count)
    } else {
        Err("count must be >= 1".into())
    }
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err("timeout must be > 0".into())
    }
}
