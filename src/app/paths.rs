// SPDX-License-Identifier: MPL-2.0
//! Location of the configuration directory.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir`, latched once by [`init_cli_overrides`]
//! 3. **Environment variable** `APOD_GALLERY_CONFIG_DIR` (ignored when empty)
//! 4. **Platform default** - `dirs::config_dir()` joined with the app name:
//!    - Linux: `~/.config/ApodGallery/`
//!    - macOS: `~/Library/Application Support/ApodGallery/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\ApodGallery\`
//!
//! The gallery keeps no state between sessions, so there is no data
//! directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ApodGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "APOD_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Latches the `--config-dir` CLI argument.
///
/// Call once at startup, before any configuration is loaded.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the configuration directory, `None` if the platform has none.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the configuration directory, preferring `override_path`.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = config_dir() {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        let override_path = PathBuf::from("/override/config");
        let result = config_dir_with_override(Some(override_path.clone()));

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(result, Some(PathBuf::from("/test/config/dir")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let result = config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = result {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
