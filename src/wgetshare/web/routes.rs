use crate::commands::links::{RAW_PREFIX, SHARE_PREFIX};

pub const PUBLISH_PATH: &str = "/api/share";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Editor,
    Publish,
    /// `/share/{id}`; `None` when the id segment is missing.
    Share(Option<String>),
    /// `/raw/{id}`; `None` when the id segment is missing.
    Raw(Option<String>),
    Health,
    MethodNotAllowed,
    NotFound,
}

/// Maps a request line onto a surface. Query strings and fragments are ignored,
/// and one trailing slash after the id is tolerated.
pub fn resolve(method: &str, url: &str) -> Route {
    let path = strip_query(url);

    let (route, expected) = if path.is_empty() || path == "/" {
        (Route::Editor, "GET")
    } else if path == PUBLISH_PATH {
        (Route::Publish, "POST")
    } else if path == HEALTH_PATH {
        (Route::Health, "GET")
    } else if let Some(id) = id_segment(path, SHARE_PREFIX) {
        (Route::Share(id), "GET")
    } else if let Some(id) = id_segment(path, RAW_PREFIX) {
        (Route::Raw(id), "GET")
    } else {
        return Route::NotFound;
    };

    if method.eq_ignore_ascii_case(expected) {
        route
    } else {
        Route::MethodNotAllowed
    }
}

fn strip_query(url: &str) -> &str {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    &url[..end]
}

/// `Some(Some(id))` for `{prefix}{id}`, `Some(None)` for a bare prefix,
/// `None` when the path is not under `prefix` at all.
fn id_segment(path: &str, prefix: &str) -> Option<Option<String>> {
    let bare = prefix.trim_end_matches('/');
    if path == bare {
        return Some(None);
    }
    let rest = path.strip_prefix(prefix)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        Some(None)
    } else {
        Some(Some(rest.to_string()))
    }
}
