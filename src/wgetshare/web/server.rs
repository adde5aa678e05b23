use super::{Site, WebRequest, WebResponse};
use crate::api::ShareApi;
use crate::error::{Result, ShareError};
use crate::store::RecordStore;
use std::io::Read;
use tiny_http::{Header, Request, Response, Server};

/// Serves requests one at a time until the process is stopped.
pub fn serve<S: RecordStore>(api: &mut ShareApi<S>, site: &Site, addr: &str) -> Result<()> {
    let server = Server::http(addr)
        .map_err(|e| ShareError::Server(format!("bind http at {}: {}", addr, e)))?;
    log::info!("wgetshare listening on http://{}", addr);

    loop {
        let mut rq = match server.recv() {
            Ok(rq) => rq,
            Err(e) => {
                log::warn!("http recv error: {}", e);
                continue;
            }
        };

        let resp = match read_request(&mut rq) {
            Ok(req) => {
                let resp = site.handle(api, &req);
                log::info!("{} {} -> {}", req.method, req.url, resp.status);
                resp
            }
            Err(e) => {
                log::warn!("{} {} -> 400 ({})", rq.method(), rq.url(), e);
                WebResponse::text(400, "bad request\n")
            }
        };

        if let Err(e) = rq.respond(into_tiny(resp)) {
            log::warn!("failed to send response: {}", e);
        }
    }
}

fn read_request(rq: &mut Request) -> std::io::Result<WebRequest> {
    let host = rq
        .headers()
        .iter()
        .find(|h| h.field.equiv("Host"))
        .map(|h| h.value.as_str().to_string());

    let mut body = String::new();
    rq.as_reader().read_to_string(&mut body)?;

    Ok(WebRequest {
        method: rq.method().as_str().to_string(),
        url: rq.url().to_string(),
        host,
        body,
    })
}

fn into_tiny(resp: WebResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut out = Response::from_data(resp.body.into_bytes()).with_status_code(resp.status);
    if let Ok(ct) = Header::from_bytes(&b"Content-Type"[..], resp.content_type.as_bytes()) {
        out.add_header(ct);
    }
    // Snippet bodies must never be sniffed into HTML
    if let Ok(nosniff) = Header::from_bytes(&b"X-Content-Type-Options"[..], &b"nosniff"[..]) {
        out.add_header(nosniff);
    }
    out
}
