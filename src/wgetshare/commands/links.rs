//! Link and command derivation.
//!
//! The three artifacts handed back after a publish are pure functions of the
//! id, the display name and the origin the service is reached at. Their format
//! is consumed by external tooling and must stay byte-exact:
//!
//! ```text
//! <origin>/share/<id>
//! <origin>/raw/<id>
//! wget "<origin>/raw/<id>" -O "<filename>.txt"
//! ```
//!
//! The filename goes into the quoted `-O` argument verbatim. A name holding a
//! `"` (or `$`, backtick, backslash) produces a broken shell command; see
//! [`is_shell_safe`].

use serde::Serialize;
use uuid::Uuid;

pub const SHARE_PREFIX: &str = "/share/";
pub const RAW_PREFIX: &str = "/raw/";

/// Everything the editor shows after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareBundle {
    pub id: Uuid,
    pub filename: String,
    pub view_url: String,
    pub raw_url: String,
    pub download_command: String,
}

impl ShareBundle {
    pub fn derive(origin: &str, id: Uuid, filename: &str) -> Self {
        let raw = raw_url(origin, &id);
        Self {
            id,
            filename: filename.to_string(),
            view_url: view_url(origin, &id),
            download_command: download_command(&raw, filename),
            raw_url: raw,
        }
    }
}

/// Strips trailing slashes so `{origin}/share/..` never doubles up.
pub fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

pub fn view_url(origin: &str, id: &Uuid) -> String {
    format!("{}{}{}", normalize_origin(origin), SHARE_PREFIX, id)
}

pub fn raw_url(origin: &str, id: &Uuid) -> String {
    format!("{}{}{}", normalize_origin(origin), RAW_PREFIX, id)
}

pub fn download_command(raw_url: &str, filename: &str) -> String {
    format!("wget \"{}\" -O \"{}.txt\"", raw_url, filename)
}

/// Whether `filename` survives interpolation into a double-quoted shell word.
///
/// Inside `"..."` a POSIX shell still interprets `"`, `$`, backtick and
/// backslash; a newline splits the command. None of these are escaped by
/// [`download_command`].
pub fn is_shell_safe(filename: &str) -> bool {
    !filename
        .chars()
        .any(|c| matches!(c, '"' | '$' | '`' | '\\' | '\n' | '\r'))
}
