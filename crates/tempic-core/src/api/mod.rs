//! TemPIC API client.
//!
//! Three operations, one request each: a reachability check, an album
//! metadata lookup and a single-file album upload. No retries.

mod error;
mod types;

pub use error::ApiError;
pub use types::{AlbumInfo, FileInfo, InfoData, InfoResponse, Status, TestResponse, SUCCESS};

use crate::host::HostUrl;
use crate::http::{self, HttpOptions, HttpResponse};
use crate::multipart::UploadRequest;

/// Versioned paths served by a TemPIC instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SystemTest,
    AlbumInfo(String),
    Upload,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::SystemTest => "/api.php?v1/system/test".to_string(),
            Endpoint::AlbumInfo(id) => format!("/api.php?v1/albums/{}/info", escape_segment(id)),
            Endpoint::Upload => "/upload.php".to_string(),
        }
    }
}

/// Percent-encodes everything but unreserved characters, so an id can hold
/// `/`, `?`, `#` or spaces without changing which resource is requested.
fn escape_segment(raw: &str) -> String {
    curl::easy::Easy::new().url_encode(raw.as_bytes())
}

/// Result of the reachability check. The raw body is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    pub status: Status,
    pub raw_body: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    host: HostUrl,
    http: HttpOptions,
}

impl ApiClient {
    pub fn new(host: HostUrl, http: HttpOptions) -> Self {
        Self { host, http }
    }

    pub fn host(&self) -> &HostUrl {
        &self.host
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        self.host.join(&endpoint.path())
    }

    /// `GET /api.php?v1/system/test`.
    ///
    /// Only transport failures are errors; a body that is not the expected
    /// JSON simply reports `Status::Error`.
    pub fn test_reachability(&self) -> Result<Reachability, ApiError> {
        let resp = http::get(&self.url(&Endpoint::SystemTest), &self.http)?;
        let raw_body = resp.body_text();
        let status = match serde_json::from_slice::<TestResponse>(&resp.body) {
            Ok(parsed) => Status::from_field(parsed.status.as_deref()),
            Err(e) => {
                tracing::debug!(http_status = resp.status, "test response not decodable: {}", e);
                Status::Error
            }
        };
        tracing::info!(host = %self.host, ?status, "reachability check");
        Ok(Reachability { status, raw_body })
    }

    /// `GET /api.php?v1/albums/{id}/info` and pick `album_id` out of the
    /// returned album map.
    ///
    /// An id missing from an otherwise successful answer yields an empty
    /// `AlbumInfo` rather than an error.
    pub fn fetch_album_info(&self, album_id: &str) -> Result<AlbumInfo, ApiError> {
        let endpoint = Endpoint::AlbumInfo(album_id.to_string());
        let resp = http::get(&self.url(&endpoint), &self.http)?;
        album_from_body(&resp.body, album_id)
    }

    /// Reads the file, then `POST /upload.php` as multipart form data.
    ///
    /// The response is handed back whatever its status code.
    pub fn upload_files(&self, request: &UploadRequest) -> Result<HttpResponse, ApiError> {
        let contents = std::fs::read(&request.file_path).map_err(|source| ApiError::ReadFile {
            path: request.file_path.clone(),
            source,
        })?;
        let size = contents.len();
        let form = request.to_form(contents)?;
        tracing::info!(
            host = %self.host,
            file = %request.file_path.display(),
            bytes = size,
            "uploading"
        );
        let resp = http::post_form(&self.url(&Endpoint::Upload), form, &self.http)?;
        tracing::info!(status = resp.status, "upload finished");
        Ok(resp)
    }
}

fn album_from_body(body: &[u8], album_id: &str) -> Result<AlbumInfo, ApiError> {
    let parsed: InfoResponse = serde_json::from_slice(body)?;
    if Status::from_field(parsed.status.as_deref()) != Status::Ok {
        return Err(ApiError::Rejected {
            status: parsed.status,
        });
    }
    let mut data = parsed.data.ok_or(ApiError::MissingField("Data"))?;
    Ok(data.albums.remove(album_id).unwrap_or_else(|| {
        tracing::warn!(album_id, "album missing from successful info response");
        AlbumInfo::default()
    }))
}
