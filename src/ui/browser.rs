// SPDX-License-Identifier: MPL-2.0
//! Hands video player URLs to the system browser.

use crate::error::{Error, Result};

/// Opens `url` in the default browser without going through a shell.
///
/// # Errors
///
/// Returns [`Error::UnsupportedUrl`] when `url` is not http(s) and
/// [`Error::Browser`] when the launcher cannot be spawned.
pub fn open_in_browser(url: &str) -> Result<()> {
    if !is_web_url(url) {
        return Err(Error::UnsupportedUrl(url.to_string()));
    }

    launcher()
        .arg(url)
        .spawn()
        .map(|_| ())
        .map_err(|err| Error::Browser(format!("failed to launch browser for {url}: {err}")))
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

#[cfg(target_os = "windows")]
fn launcher() -> std::process::Command {
    std::process::Command::new("explorer")
}

#[cfg(target_os = "macos")]
fn launcher() -> std::process::Command {
    std::process::Command::new("open")
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher() -> std::process::Command {
    std::process::Command::new("xdg-open")
}
