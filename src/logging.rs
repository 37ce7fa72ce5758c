// 📝 Logging - stderr subscriber for the binary

use tracing::level_filters::LevelFilter;

/// Level used by the binary. Fixed: no env var is consulted.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Install the global fmt subscriber.
///
/// Logs go to stderr so stdout stays empty on success. Calling this twice
/// is harmless: the second install is ignored.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
