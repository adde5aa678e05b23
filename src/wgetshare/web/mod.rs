//! # HTTP Surface
//!
//! The web client of the API. Three routes map onto the three surfaces:
//!
//! ```text
//! GET  /              editor page
//! POST /api/share     publish (JSON in, JSON out)
//! GET  /share/{id}    viewer page (HTML)
//! GET  /raw/{id}      raw snippet body (text/plain)
//! GET  /health        liveness probe
//! ```
//!
//! [`Site::handle`] turns a [`WebRequest`] into a [`WebResponse`] and never
//! touches a socket, which keeps every route testable with an in-memory store.
//! [`server::serve`] is the `tiny_http` loop that feeds it.

use crate::api::{failure_notice, CmdMessage, RenderMode, Rendered, ShareApi, ShareBundle};
use crate::commands::view::{ViewError, ViewState};
use crate::error::{Result, ShareError};
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

pub mod pages;
pub mod routes;
pub mod server;

use pages::Pages;
use routes::Route;

pub const HTML: &str = "text/html; charset=utf-8";
pub const TEXT: &str = "text/plain; charset=utf-8";
pub const JSON: &str = "application/json";

#[derive(Debug, Clone, Default)]
pub struct WebRequest {
    pub method: String,
    pub url: String,
    pub host: Option<String>,
    pub body: String,
}

impl WebRequest {
    pub fn get(url: &str) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn post(url: &str, body: &str) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.to_string(),
            body: body.to_string(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl WebResponse {
    fn new(status: u16, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, TEXT, body)
    }
}

#[derive(Debug, Deserialize)]
struct PublishRequest {
    code: String,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Serialize)]
struct PublishResponse {
    #[serde(flatten)]
    bundle: ShareBundle,
    messages: Vec<CmdMessage>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    title: &'a str,
    error: &'a str,
}

/// Routing plus page rendering, shared by every request.
pub struct Site {
    pages: Pages,
    origin: Option<String>,
}

impl Site {
    /// `origin` pins the base of generated links; `None` derives it from the
    /// request's Host header.
    pub fn new(origin: Option<String>) -> Result<Self> {
        Ok(Self {
            pages: Pages::new()?,
            origin,
        })
    }

    pub fn handle<S: RecordStore>(&self, api: &mut ShareApi<S>, req: &WebRequest) -> WebResponse {
        let route = routes::resolve(&req.method, &req.url);
        let result = match route {
            Route::Editor => self.pages.editor().map(|html| WebResponse::new(200, HTML, html)),
            Route::Publish => self.publish(api, req),
            Route::Share(id) => {
                let rendered = api.render(id.as_deref(), RenderMode::Decorated);
                self.respond(rendered, id.as_deref())
            }
            Route::Raw(id) => {
                let rendered = api.render(id.as_deref(), RenderMode::Raw);
                self.respond(rendered, id.as_deref())
            }
            Route::Health => Ok(WebResponse::text(200, "OK\n")),
            Route::MethodNotAllowed => Ok(WebResponse::text(405, "method not allowed\n")),
            Route::NotFound => Ok(WebResponse::text(404, "not found\n")),
        };

        result.unwrap_or_else(|e| {
            log::error!("failed to render {} {}: {}", req.method, req.url, e);
            WebResponse::text(500, "internal error\n")
        })
    }

    fn origin_for<S: RecordStore>(&self, api: &ShareApi<S>, req: &WebRequest) -> String {
        if let Some(origin) = &self.origin {
            return origin.clone();
        }
        match req.host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => format!("http://{}", host),
            _ => api.origin().to_string(),
        }
    }

    fn publish<S: RecordStore>(
        &self,
        api: &mut ShareApi<S>,
        req: &WebRequest,
    ) -> Result<WebResponse> {
        let payload: PublishRequest = match serde_json::from_str(&req.body) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("bad publish body: {}", e);
                return json_error(400, "Error", "Invalid request body");
            }
        };

        let origin = self.origin_for(api, req);
        match api.publish_at(&origin, payload.code, payload.filename.as_deref()) {
            Ok(result) => {
                let body = serde_json::to_string(&PublishResponse {
                    bundle: result.bundle,
                    messages: result.messages,
                })?;
                Ok(WebResponse::new(201, JSON, body))
            }
            Err(e) => {
                let status = match e {
                    ShareError::Validation => 400,
                    _ => 500,
                };
                let notice = failure_notice(&e);
                json_error(status, &notice.title, &notice.content)
            }
        }
    }

    /// Exhaustive over both rendering contracts and every view state.
    fn respond(&self, rendered: Rendered, id: Option<&str>) -> Result<WebResponse> {
        match rendered {
            Rendered::View(state) => {
                let status = match &state {
                    ViewState::Loading | ViewState::Found { .. } => 200,
                    ViewState::NotFound => 404,
                    ViewState::Error(ViewError::InvalidId) => 400,
                    ViewState::Error(ViewError::LoadFailed) => 500,
                };
                let html = self.pages.share(&state, id)?;
                Ok(WebResponse::new(status, HTML, html))
            }
            Rendered::Raw(outcome) => {
                let status = if outcome.is_found() { 200 } else { 404 };
                Ok(WebResponse::text(status, outcome.into_body()))
            }
        }
    }
}

fn json_error(status: u16, title: &str, error: &str) -> Result<WebResponse> {
    let body = serde_json::to_string(&ErrorResponse { title, error })?;
    Ok(WebResponse::new(status, JSON, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::Value;

    fn setup() -> (Site, ShareApi<InMemoryStore>) {
        let site = Site::new(None).unwrap();
        let api = ShareApi::new(InMemoryStore::new(), "http://127.0.0.1:8080");
        (site, api)
    }

    fn publish(site: &Site, api: &mut ShareApi<InMemoryStore>, body: &str) -> (u16, Value) {
        let resp = site.handle(
            api,
            &WebRequest::post("/api/share", body).with_host("share.local:8080"),
        );
        assert_eq!(resp.content_type, JSON);
        (resp.status, serde_json::from_str(&resp.body).unwrap())
    }

    #[test]
    fn test_editor_page() {
        let (site, mut api) = setup();
        let resp = site.handle(&mut api, &WebRequest::get("/"));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type, HTML);
        assert!(resp.body.contains("Paste your code here"));
    }

    #[test]
    fn test_publish_then_raw_is_byte_exact() {
        let (site, mut api) = setup();
        let (status, json) = publish(&site, &mut api, r#"{"code":"echo hi","filename":"hello"}"#);
        assert_eq!(status, 201);

        let id = json["id"].as_str().unwrap().to_string();
        assert_eq!(
            json["download_command"],
            format!("wget \"http://share.local:8080/raw/{}\" -O \"hello.txt\"", id)
        );
        assert_eq!(json["view_url"], format!("http://share.local:8080/share/{}", id));
        assert_eq!(json["messages"][0]["level"], "success");

        let resp = site.handle(&mut api, &WebRequest::get(&format!("/raw/{}", id)));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type, TEXT);
        assert_eq!(resp.body, "echo hi");
    }

    #[test]
    fn test_publish_then_view() {
        let (site, mut api) = setup();
        let (_, json) = publish(&site, &mut api, r#"{"code":"a < b && c"}"#);
        let id = json["id"].as_str().unwrap().to_string();
        assert!(json["download_command"]
            .as_str()
            .unwrap()
            .ends_with("-O \"shared-code.txt\""));

        let resp = site.handle(&mut api, &WebRequest::get(&format!("/share/{}", id)));
        assert_eq!(resp.status, 200);
        assert!(resp.body.contains("Filename: shared-code"));
        assert!(resp.body.contains("a &lt; b &amp;&amp; c"));
    }

    #[test]
    fn test_configured_origin_wins_over_host() {
        let site = Site::new(Some("https://paste.example".to_string())).unwrap();
        let mut api = ShareApi::new(InMemoryStore::new(), "http://127.0.0.1:8080");
        let (_, json) = publish(&site, &mut api, r#"{"code":"x"}"#);
        assert!(json["raw_url"]
            .as_str()
            .unwrap()
            .starts_with("https://paste.example/raw/"));
    }

    #[test]
    fn test_publish_without_host_uses_api_origin() {
        let (site, mut api) = setup();
        let resp = site.handle(&mut api, &WebRequest::post("/api/share", r#"{"code":"x"}"#));
        let json: Value = serde_json::from_str(&resp.body).unwrap();
        assert!(json["view_url"]
            .as_str()
            .unwrap()
            .starts_with("http://127.0.0.1:8080/share/"));
    }

    #[test]
    fn test_publish_validation() {
        let (site, mut api) = setup();
        let (status, json) = publish(&site, &mut api, r#"{"code":"   ","filename":"x"}"#);
        assert_eq!(status, 400);
        assert_eq!(json["error"], "Please paste some code first");
        assert_eq!(api.store().write_count(), 0);
    }

    #[test]
    fn test_publish_store_failure() {
        let site = Site::new(None).unwrap();
        let mut store = InMemoryStore::new();
        store.set_simulate_failure(true);
        let mut api = ShareApi::new(store, "http://h");
        let (status, json) = publish(&site, &mut api, r#"{"code":"x"}"#);
        assert_eq!(status, 500);
        assert_eq!(json["error"], "Failed to generate link. Please try again.");
    }

    #[test]
    fn test_publish_bad_json() {
        let (site, mut api) = setup();
        let (status, json) = publish(&site, &mut api, "code=x");
        assert_eq!(status, 400);
        assert_eq!(json["error"], "Invalid request body");
    }

    #[test]
    fn test_view_states_map_to_statuses() {
        let (site, mut api) = setup();
        let missing = uuid::Uuid::new_v4();

        let resp = site.handle(&mut api, &WebRequest::get(&format!("/share/{}", missing)));
        assert_eq!(resp.status, 404);
        assert!(resp.body.contains("Code not found"));

        let resp = site.handle(&mut api, &WebRequest::get("/share/not-an-id"));
        assert_eq!(resp.status, 400);
        assert!(resp.body.contains("Invalid share ID"));

        let resp = site.handle(&mut api, &WebRequest::get("/share/"));
        assert_eq!(resp.status, 400);
    }

    #[test]
    fn test_view_load_failure() {
        let site = Site::new(None).unwrap();
        let mut store = InMemoryStore::new();
        store.set_simulate_failure(true);
        let mut api = ShareApi::new(store, "http://h");
        let resp = site.handle(
            &mut api,
            &WebRequest::get(&format!("/share/{}", uuid::Uuid::new_v4())),
        );
        assert_eq!(resp.status, 500);
        assert!(resp.body.contains("Failed to load code"));
    }

    #[test]
    fn test_raw_failures_collapse() {
        let (site, mut api) = setup();
        let missing = format!("/raw/{}", uuid::Uuid::new_v4());
        for url in ["/raw/nope", "/raw/", missing.as_str()] {
            let resp = site.handle(&mut api, &WebRequest::get(url));
            assert_eq!(resp.status, 404);
            assert_eq!(resp.body, "Code not found");
            assert_eq!(resp.content_type, TEXT);
        }
    }

    #[test]
    fn test_misc_routes() {
        let (site, mut api) = setup();
        assert_eq!(site.handle(&mut api, &WebRequest::get("/health")).status, 200);
        assert_eq!(site.handle(&mut api, &WebRequest::get("/nope")).status, 404);
        assert_eq!(
            site.handle(&mut api, &WebRequest::post("/raw/x", "")).status,
            405
        );
    }
}
