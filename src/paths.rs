//! Application base directories and path expansion
//!
//! Base directories come from the `dirs` and `directories` crates, which
//! resolve the platform conventions (XDG variables on Linux): config and
//! cache through `dirs`, the state directory through `directories`.
//! [`expand`] handles `~` prefixes and `$VAR` references in user-supplied
//! path strings.

use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::APP_NAME;

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Per-app config directory, `$XDG_CONFIG_HOME/luminol` on Linux
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| home().join(".config"))
        .join(APP_NAME)
}

/// Per-app cache directory, `$XDG_CACHE_HOME/luminol` on Linux
#[must_use]
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| home().join(".cache"))
        .join(APP_NAME)
}

/// Per-app state directory, `$XDG_STATE_HOME/luminol` on Linux
#[must_use]
pub fn state_dir() -> PathBuf {
    BaseDirs::new()
        .and_then(|base| base.state_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| home().join(".local/state"))
        .join(APP_NAME)
}

/// Expand a leading `~` and any `$VAR`/`${VAR}` references
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let tilde_expanded = if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home().to_string_lossy().into_owned()
    } else {
        path.to_string()
    };
    PathBuf::from(expand_env(&tilde_expanded))
}

fn expand_env(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }
        // ${VAR} or $VAR; anything else stays literal
        let braced = matches!(chars.peek(), Some((_, '{')));
        if braced {
            chars.next();
        }
        let mut name = String::new();
        while let Some((_, n)) = chars.peek() {
            if braced && *n == '}' {
                chars.next();
                break;
            }
            if !braced && !(n.is_ascii_alphanumeric() || *n == '_') {
                break;
            }
            name.push(*n);
            chars.next();
        }
        if name.is_empty() {
            output.push('$');
            if braced {
                output.push_str("{}");
            }
        } else {
            match env::var(&name) {
                Ok(value) => output.push_str(&value),
                Err(_) => {
                    output.push('$');
                    output.push_str(&name);
                }
            }
        }
    }
    output
}
