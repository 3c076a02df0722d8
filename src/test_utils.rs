//! Utilities for testing securedigest components

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Routes `log` output through the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Returns true if every byte of `bytes` is zero.
pub(crate) fn is_zeroized(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}
