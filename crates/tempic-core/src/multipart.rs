//! Album upload request and its `multipart/form-data` form.
//!
//! Encoding (boundary, part headers, escaping) is left to libcurl's form
//! API; this module only decides which parts go in and in what order.

use curl::easy::Form;
use std::path::{Path, PathBuf};

/// Form field carrying the uploaded file. The server treats it as an array,
/// but only one file is attached per request.
pub const FILE_FIELD: &str = "file[]";

const FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// What the `upload` command sends: one local file plus the album form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub fields: Vec<(String, String)>,
}

impl UploadRequest {
    pub fn new(
        file_path: impl Into<PathBuf>,
        lifetime: &str,
        album_name: &str,
        album_description: &str,
    ) -> Self {
        let fields = [
            ("ajax", "true"),
            ("lifetime", lifetime),
            ("album_name", album_name),
            ("album_description", album_description),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            file_path: file_path.into(),
            fields,
        }
    }

    /// Name the file is announced under: the base name of the local path.
    pub fn file_name(&self) -> String {
        base_name(&self.file_path)
    }

    /// Builds the form around already-read file contents: the file part
    /// first, then one text part per field.
    pub fn to_form(&self, contents: Vec<u8>) -> Result<Form, curl::FormError> {
        let file_name = self.file_name();
        let mut form = Form::new();
        form.part(FILE_FIELD)
            .buffer(&file_name, contents)
            .content_type(FILE_CONTENT_TYPE)
            .add()?;
        for (name, value) in &self.fields {
            form.part(name).contents(value.as_bytes()).add()?;
        }
        Ok(form)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}
