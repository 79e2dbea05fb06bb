// Storage API Rust Library
// Copyright 2025 Storage API Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for Storage API operations

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Errors raised locally, before a request reaches the server.
#[derive(thiserror::Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket id: {0}")]
    InvalidBucketId(String),

    #[error("invalid table id: {0}")]
    InvalidTableId(String),

    #[error("invalid column name: {0}")]
    InvalidColumnName(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("invalid upload parameters: {0}")]
    InvalidUploadParams(String),

    #[error("missing environment variable {0}")]
    MissingEnvVar(&'static str),

    #[error("{message}")]
    StrError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Transport level failures.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Error returned by the Storage API, either as an HTTP error body or as a
/// failed asynchronous job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientError {
    /// HTTP status code, absent for failed jobs
    pub status: Option<u16>,
    /// Error code such as `storage.tables.notFound`
    pub code: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Server-side exception id, useful when reporting issues
    pub exception_id: Option<String>,
    /// Additional error context
    pub context: Option<serde_json::Value>,
    /// Id of the failed job
    pub job_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    exception_id: Option<String>,
    #[serde(default)]
    context: Option<serde_json::Value>,
}

impl ClientError {
    /// Builds an error from a non-success HTTP response body.
    ///
    /// Falls back to the raw text when the body is not the JSON error shape.
    pub fn from_http_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) if parsed.error.is_some() || parsed.message.is_some() => ClientError {
                status: Some(status),
                code: parsed.code.and_then(|c| match c {
                    serde_json::Value::String(s) => Some(s),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                }),
                message: parsed.error.or(parsed.message).unwrap_or_default(),
                exception_id: parsed.exception_id,
                context: parsed.context,
                job_id: None,
            },
            _ => ClientError {
                status: Some(status),
                code: None,
                message: String::from_utf8_lossy(body).trim().to_string(),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage API error")?;
        if let Some(status) = self.status {
            write!(f, " (HTTP {status})")?;
        }
        if let Some(job_id) = self.job_id {
            write!(f, " in job {job_id}")?;
        }
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(id) = &self.exception_id {
            write!(f, " (exception id: {id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Server(#[from] ClientError),

    #[error("job {job_id} did not finish within {elapsed:?}")]
    JobTimeout { job_id: u64, elapsed: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns the Storage API error code, if the server supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Server(e) => e.code.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server(e) => e.status,
            _ => None,
        }
    }

    /// True when the server answered with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationErr::JsonError(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_error_body() {
        let body = br#"{"error":"The table \"users\" was not found","code":"storage.tables.notFound","status":"error","exceptionId":"exception-abc"}"#;
        let err = ClientError::from_http_body(404, body);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.code.as_deref(), Some("storage.tables.notFound"));
        assert_eq!(err.message, "The table \"users\" was not found");
        assert_eq!(err.exception_id.as_deref(), Some("exception-abc"));
    }

    #[test]
    fn falls_back_to_raw_text() {
        let err = ClientError::from_http_body(502, b"<html>Bad Gateway</html>\n");
        assert_eq!(err.code, None);
        assert_eq!(err.message, "<html>Bad Gateway</html>");
    }

    #[test]
    fn numeric_code_and_message_field() {
        let err = ClientError::from_http_body(400, br#"{"message":"bad","code":400}"#);
        assert_eq!(err.code.as_deref(), Some("400"));
        assert_eq!(err.message, "bad");
    }

    #[test]
    fn error_helpers() {
        let err = Error::Server(ClientError {
            status: Some(404),
            code: Some("storage.buckets.notFound".into()),
            message: "missing".into(),
            ..Default::default()
        });
        assert!(err.is_not_found());
        assert_eq!(err.code(), Some("storage.buckets.notFound"));
        assert!(err.to_string().contains("[storage.buckets.notFound]"));
    }
}
