//! Blocking HTTP transport.
//!
//! Uses the curl crate (libcurl) with one `Easy` handle per request. The
//! handle, the collected headers and the body buffer are all scoped to the
//! call, so nothing outlives a request on any exit path.

mod parse;

use curl::easy::Form;
use std::time::Duration;

pub use parse::HttpResponse;

/// Connection settings shared by every request of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Overall transfer limit. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: None,
        }
    }
}

fn new_handle(url: &str, opts: &HttpOptions) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.connect_timeout(opts.connect_timeout)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout)?;
    }
    easy.useragent(concat!("tempic/", env!("CARGO_PKG_VERSION")))?;
    Ok(easy)
}

/// Runs the transfer, collecting header lines and the full body.
fn perform(easy: &mut curl::easy::Easy) -> Result<HttpResponse, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            header_lines.push(parse::header_line(data));
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(parse::build_response(status, &header_lines, body))
}

/// `GET url`, following redirects.
pub fn get(url: &str, opts: &HttpOptions) -> Result<HttpResponse, curl::Error> {
    let mut easy = new_handle(url, opts)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    tracing::debug!(url, "GET");
    let resp = perform(&mut easy)?;
    tracing::debug!(url, status = resp.status, bytes = resp.body.len(), "GET done");
    Ok(resp)
}

/// `POST url` as `multipart/form-data`; libcurl picks the boundary and sets
/// the matching `Content-Type`.
pub fn post_form(
    url: &str,
    form: Form,
    opts: &HttpOptions,
) -> Result<HttpResponse, curl::Error> {
    let mut easy = new_handle(url, opts)?;
    easy.httppost(form)?;

    let mut list = curl::easy::List::new();
    // Without this libcurl waits for "100 Continue" on larger bodies.
    list.append("Expect:")?;
    easy.http_headers(list)?;

    tracing::debug!(url, "POST multipart");
    let resp = perform(&mut easy)?;
    tracing::debug!(url, status = resp.status, bytes = resp.body.len(), "POST done");
    Ok(resp)
}
