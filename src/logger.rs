use env_logger::Env;
use log::LevelFilter;

/// Initialize the logger with the specified default level.
///
/// A `RUST_LOG` environment filter still takes precedence when set.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_env(Env::default().default_filter_or(level.to_string())).init();
}
