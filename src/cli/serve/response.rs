//! HTTP response handlers.

use crate::redirect::RedirectCommand;
use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

const PLAIN: &str = "text/plain; charset=utf-8";

/// Respond with a redirect.
pub fn respond_redirect(request: Request, redirect: RedirectCommand) -> Result<()> {
    request.respond(redirect.into_response()?)?;
    Ok(())
}

/// Respond with a plain 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
