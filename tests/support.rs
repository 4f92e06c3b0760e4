// tests/support.rs
//! Test utilities — shared tracing setup

/// Installs a fmt subscriber once per test binary when the `logging` feature
/// is enabled; a no-op otherwise.
pub fn init_tracing() {
    #[cfg(feature = "logging")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        });
    }
}
