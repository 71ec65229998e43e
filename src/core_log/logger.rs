use env_logger::{Builder, Env};
use std::io::Write;

/// Initializes the logger with a `[timestamp] [LEVEL] message` format.
///
/// `RUST_LOG` still wins; otherwise the filter is `info`, or `debug` when
/// `verbose` is set.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();
}
