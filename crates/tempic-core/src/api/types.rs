//! Typed views of the JSON envelopes returned by `api.php`.
//!
//! Every endpoint answers with `{"Status": ..., ...}`; only the exact string
//! `"success"` counts as success.

use serde::Deserialize;
use std::collections::BTreeMap;

pub const SUCCESS: &str = "success";

/// Outcome of an envelope's status discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn from_field(status: Option<&str>) -> Self {
        match status {
            Some(SUCCESS) => Status::Ok,
            _ => Status::Error,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "ERROR",
        }
    }
}

/// `v1/system/test` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestResponse {
    #[serde(default)]
    pub status: Option<String>,
}

/// `v1/albums/{id}/info` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub data: Option<InfoData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoData {
    #[serde(default)]
    pub albums: BTreeMap<String, AlbumInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlbumInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// File name to file metadata.
    #[serde(default)]
    pub files: BTreeMap<String, FileInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileInfo {
    pub url: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub is_image: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Algorithm name (e.g. `sha1`) to hex digest.
    #[serde(default)]
    pub checksums: BTreeMap<String, String>,
}

impl FileInfo {
    pub fn sha1(&self) -> Option<&str> {
        self.checksums.get("sha1").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_ok_only_for_exact_success() {
        assert_eq!(Status::from_field(Some("success")), Status::Ok);
        assert_eq!(Status::from_field(Some("Success")), Status::Error);
        assert_eq!(Status::from_field(Some("error")), Status::Error);
        assert_eq!(Status::from_field(Some("")), Status::Error);
        assert_eq!(Status::from_field(None), Status::Error);
    }

    #[test]
    fn test_response_without_status() {
        let r: TestResponse = serde_json::from_str("{}").unwrap();
        assert!(r.status.is_none());
        let r: TestResponse = serde_json::from_str(r#"{"Status":"success"}"#).unwrap();
        assert_eq!(r.status.as_deref(), Some("success"));
    }

    #[test]
    fn info_response_full_shape() {
        let json = r#"{
            "Status": "success",
            "Version": "1",
            "Data": { "Albums": { "abc": {
                "Name": "Holiday",
                "Description": "Beach",
                "Files": {
                    "b.jpg": {
                        "Url": "http://x.test/b.jpg",
                        "Extension": "jpg",
                        "IsImage": true,
                        "Thumbnail": "http://x.test/thumbs/b.jpg",
                        "Checksums": { "sha1": "aaaa", "md5": "bbbb" }
                    },
                    "a.txt": { "Url": "http://x.test/a.txt", "Checksums": {} }
                }
            } } }
        }"#;
        let r: InfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.version.as_deref(), Some("1"));
        let data = r.data.unwrap();
        let album = &data.albums["abc"];
        assert_eq!(album.name, "Holiday");
        let names: Vec<&str> = album.files.keys().map(String::as_str).collect();
        assert_eq!(names, ["a.txt", "b.jpg"]);
        let b = &album.files["b.jpg"];
        assert!(b.is_image);
        assert_eq!(b.extension, "jpg");
        assert_eq!(b.sha1(), Some("aaaa"));
        assert_eq!(album.files["a.txt"].sha1(), None);
        assert!(!album.files["a.txt"].is_image);
    }

    #[test]
    fn file_without_url_is_rejected() {
        let json = r#"{"Status":"success","Data":{"Albums":{"x":{"Files":{"f":{"Extension":"png"}}}}}}"#;
        assert!(serde_json::from_str::<InfoResponse>(json).is_err());
    }

    #[test]
    fn label_strings() {
        assert_eq!(Status::Ok.label(), "OK");
        assert_eq!(Status::Error.label(), "ERROR");
    }
}
