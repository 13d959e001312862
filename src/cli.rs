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
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A stochastic sphere path tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "720", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "360", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray scattering events
    #[arg(long, default_value = "20", help = "Maximum number of ray scattering events")]
    pub max_depth: u32,

    /// Render seed; drawn from OS entropy when absent
    #[arg(long, help = "Render seed; drawn from OS entropy when absent")]
    pub seed: Option<u64>,

    /// Output destination: "-" streams PPM text to stdout, .ppm and .png write files
    #[arg(
        short,
        long,
        default_value = "-",
        help = "Output destination: \"-\" streams PPM text to stdout, .ppm and .png write files"
    )]
    pub output: String,
}
