//! Turn collected header lines into an `HttpResponse`.

/// A complete response: final status code, headers in arrival order, raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One raw header line as libcurl hands it over, without the line ending.
/// Bytes that are not UTF-8 are replaced rather than dropping the line.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Keeps only the headers of the last response block; redirects and interim
/// `100 Continue` responses each start with their own status line.
pub(crate) fn build_response(status: u32, lines: &[String], body: Vec<u8>) -> HttpResponse {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    HttpResponse {
        status,
        headers,
        body,
    }
}
