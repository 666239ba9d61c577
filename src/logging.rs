use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise `verbose` selects debug output and
/// the default is info.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A second call keeps the logger already installed. The binary calls this
    // once, but tests that exercise the drivers may call it repeatedly.
    if builder.try_init().is_err() {
        log::debug!("logger already initialized; keeping existing configuration");
    }
}
