// src/core/net.rs
//
// HTTP/1.0 GET over TCP (std-only). Used for `http://` data sources.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::{consts::{HTTP_TIMEOUT_SECS, USER_AGENT}, options::host_literal};
use crate::loader::LoadError;

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, LoadError> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, host_literal(host), USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);
    split_response(&resp)
}

/// Status line check + body extraction. Anything but 2xx is an error.
pub(crate) fn split_response(resp: &str) -> Result<String, LoadError> {
    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse::<u16>().ok())
        .ok_or_else(|| LoadError::MalformedResponse(s!(status_line)))?;

    if !(200..300).contains(&status) {
        return Err(LoadError::Http { status, line: s!(status_line) });
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| LoadError::MalformedResponse(s!("missing header terminator")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
