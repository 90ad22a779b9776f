// src/types.rs

//! Request and response types for the snapd REST API.
//!
//! See <https://snapcraft.io/docs/snapd-api> for the wire documentation.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::Result;

// Change statuses, per https://snapcraft.io/docs/snapd-api#heading--changes

/// Statuses of a change that has finished, successfully or not.
pub const COMPLETE_STATUSES: &[&str] = &["Done", "Error", "Hold", "Abort"];
/// Statuses of a change still in flight.
pub const INCOMPLETE_STATUSES: &[&str] = &["Do", "Doing", "Undo", "Undoing"];
/// Statuses of a change that finished successfully.
pub const SUCCESS_STATUSES: &[&str] = &["Done"];
/// Statuses of a change that finished in failure.
pub const ERROR_STATUSES: &[&str] = &["Error", "Hold", "Unknown"];

/// Whether a response carries its result inline or refers to a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// The result is inline in the response.
    Sync,
    /// The operation continues in the background; poll the change by id.
    Async,
}

/// The result payload of a response.
///
/// snapd answers most requests with JSON, but some endpoints (assertion
/// streams) return other content types, which are kept as raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Decoded `application/json` result.
    Json(Value),
    /// Raw bytes for any other content type.
    Raw(Vec<u8>),
}

impl Payload {
    /// The decoded JSON result, if this payload is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    /// The raw bytes, if this payload is not JSON.
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(bytes) => Some(bytes),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Json(Value::Null)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Payload::Json)
    }
}

/// A response received from snapd's REST API.
///
/// The JSON envelope uses hyphenated keys (`status-code`,
/// `warning-timestamp`); they are mapped to field names on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SnapdResponse {
    /// `sync` or `async`.
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// HTTP status code.
    pub status_code: u16,
    /// HTTP status text.
    pub status: String,
    /// The result payload.
    #[serde(default)]
    pub result: Payload,
    /// Warning sources, when the daemon has pending warnings.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    /// Change id for asynchronous responses.
    #[serde(default)]
    pub change: Option<String>,
    #[serde(default)]
    pub warning_timestamp: Option<String>,
    #[serde(default)]
    pub warning_count: Option<u64>,
}

/// The body of a request, one variant per supported content type.
///
/// Exactly one of these (or no body at all) is sent per request; each
/// variant knows its content type and its exact serialized bytes, which is
/// what the `Content-Length` header is computed from.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// An `application/json` body.
    Json(Value),
    /// A `multipart/form-data` body with fields and file uploads.
    Form(FormData),
    /// An `application/x.ubuntu.assertion` body.
    Assertion(String),
}

impl RequestBody {
    /// Value for the `Content-Type` header.
    pub fn content_type(&self) -> String {
        match self {
            RequestBody::Json(_) => "application/json".to_string(),
            RequestBody::Form(form) => {
                format!("multipart/form-data; boundary={}", form.boundary())
            }
            RequestBody::Assertion(_) => "application/x.ubuntu.assertion".to_string(),
        }
    }

    /// Serialize to the exact bytes put on the wire.
    pub fn serialized(&self) -> Result<Vec<u8>> {
        match self {
            RequestBody::Json(value) => Ok(serde_json::to_vec(value)?),
            RequestBody::Form(form) => form.serialized(),
            RequestBody::Assertion(assertion) => Ok(assertion.clone().into_bytes()),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<FormData> for RequestBody {
    fn from(form: FormData) -> Self {
        RequestBody::Form(form)
    }
}

/// A `multipart/form-data` request body.
///
/// Fields serialize in insertion order, followed by one part per file and
/// the closing boundary marker. The boundary is a fresh UUID per value, so
/// it cannot collide with a boundary string embedded in uploaded content
/// from an earlier request.
#[derive(Debug, Clone)]
pub struct FormData {
    fields: Vec<(String, String)>,
    files: Vec<FileUpload>,
    boundary: String,
}

impl FormData {
    /// Create an empty form with a fresh boundary.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            files: Vec::new(),
            boundary: Uuid::new_v4().to_string(),
        }
    }

    /// Append a data field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a file upload.
    pub fn file(mut self, upload: FileUpload) -> Self {
        self.files.push(upload);
        self
    }

    /// The boundary token delimiting the parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Serialize fields and files to the multipart/form-data format.
    ///
    /// File contents are read from disk here, not before.
    pub fn serialized(&self) -> Result<Vec<u8>> {
        let mut content = Vec::new();

        for (name, value) in &self.fields {
            content.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    self.boundary, name, value
                )
                .as_bytes(),
            );
        }

        for file in &self.files {
            content.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    self.boundary,
                    file.name,
                    file.filename()
                )
                .as_bytes(),
            );
            content.extend_from_slice(&file.content()?);
            content.extend_from_slice(b"\r\n");
        }

        content.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        Ok(content)
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

/// A file to upload to snapd, referenced by path.
///
/// The file stays on disk and is owned by the caller; it is read exactly
/// once, when the form it belongs to serializes.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Part name, e.g. `snap` for sideloads.
    pub name: String,
    /// Path of the file on disk.
    pub path: PathBuf,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The final path component, sent as the part's `filename`.
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Read and return the file's binary content.
    pub fn content(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }
}
