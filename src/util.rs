use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a fmt subscriber for the process. Filtering comes from `RUST_LOG`;
/// an unset or unparsable value means `info`. Later calls are no-ops, and a
/// subscriber installed elsewhere is left alone.
pub fn init_tracing_once() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
    });
}
