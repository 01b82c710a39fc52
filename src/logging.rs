//! Console Logging
//!
//! Routes the `log` facade to the browser console.

use crate::config::ClientConfig;

/// Install the console logger. Safe to call more than once.
pub fn init(config: &ClientConfig) {
    if console_log::init_with_level(config.log_level).is_ok() {
        log::info!("[APP] Logging at level {}", config.log_level);
    }
}
