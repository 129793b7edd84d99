use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "phongtracer")]
#[command(about = "Render a Phong-shaded sphere scene")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Field of view of the longer image side, in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f64,

    /// Number of render threads (defaults to one per CPU core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output file path (.ppm for plain-text P3, .png for 8-bit PNG)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,
}
