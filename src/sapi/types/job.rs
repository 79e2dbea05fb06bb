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

use crate::sapi::error::ClientError;
use crate::sapi::utils::parse_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of an asynchronous storage job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Waiting,
    Processing,
    Success,
    Error,
    Cancelled,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// True once the job will not change state anymore
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            JobStatus::Success | JobStatus::Error | JobStatus::Cancelled | JobStatus::Terminated
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Waiting => "waiting",
            JobStatus::Processing => "processing",
            JobStatus::Success => "success",
            JobStatus::Error => "error",
            JobStatus::Cancelled => "cancelled",
            JobStatus::Terminated => "terminated",
            JobStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobErrorDetail {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub code: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub message: String,
    pub exception_id: Option<String>,
    pub context: Option<serde_json::Value>,
}

/// Asynchronous storage job, as returned by `GET jobs/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(deserialize_with = "super::de::u64_or_string")]
    pub id: u64,
    pub status: JobStatus,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub operation_name: String,
    pub url: Option<String>,
    pub table_id: Option<String>,
    pub run_id: Option<String>,
    pub results: Option<serde_json::Value>,
    pub error: Option<JobErrorDetail>,
    pub created_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// True when `value` is a job document rather than an operation result
pub(crate) fn is_job_document(value: &serde_json::Value) -> bool {
    value.get("operationName").is_some() && value.get("status").is_some()
}

/// The operation result held by a body: `results` of a job document, or the
/// body itself when the server answered synchronously
pub(crate) fn job_result_value(body: &[u8]) -> Result<serde_json::Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(match value {
        serde_json::Value::Object(mut map) if map.contains_key("operationName") => map
            .remove("results")
            .unwrap_or(serde_json::Value::Null),
        other => other,
    })
}

impl Job {
    /// Run time of a finished job
    pub fn duration(&self) -> Option<chrono::Duration> {
        let start = parse_timestamp(self.start_time.as_deref()?)?;
        let end = parse_timestamp(self.end_time.as_deref()?)?;
        Some(end - start)
    }

    /// Converts a finished, unsuccessful job into the client error type
    pub fn to_client_error(&self) -> ClientError {
        match &self.error {
            Some(detail) => ClientError {
                status: None,
                code: Some(detail.code.clone()).filter(|c| !c.is_empty()),
                message: detail.message.clone(),
                exception_id: detail.exception_id.clone(),
                context: detail.context.clone(),
                job_id: Some(self.id),
            },
            None => ClientError {
                status: None,
                code: Some(format!("storage.job.{}", self.status)),
                message: format!(
                    "job {} ({}) finished with status {}",
                    self.id, self.operation_name, self.status
                ),
                job_id: Some(self.id),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_failed_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":"42","status":"error","operationName":"tableImport",
                "error":{"code":"storage.tables.columnAlreadyExists","message":"dup","exceptionId":"x-1"},
                "results":null}"#,
        )
        .unwrap();
        assert_eq!(job.id, 42);
        assert!(job.status.is_finished());
        let err = job.to_client_error();
        assert_eq!(err.code.as_deref(), Some("storage.tables.columnAlreadyExists"));
        assert_eq!(err.job_id, Some(42));
        assert_eq!(err.status, None);
    }

    #[test]
    fn duration_of_finished_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":3,"status":"success","startTime":"2024-05-02T10:11:12+0200",
                "endTime":"2024-05-02T10:12:00+0200"}"#,
        )
        .unwrap();
        assert_eq!(job.duration(), Some(chrono::Duration::seconds(48)));
        let waiting: Job = serde_json::from_str(r#"{"id":4,"status":"waiting"}"#).unwrap();
        assert_eq!(waiting.duration(), None);
    }

    #[test]
    fn unknown_status_is_not_finished() {
        let job: Job = serde_json::from_str(r#"{"id":1,"status":"queued"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Unknown);
        assert!(!job.status.is_finished());
    }

    #[test]
    fn cancelled_job_without_error_detail() {
        let job: Job = serde_json::from_str(
            r#"{"id":7,"status":"cancelled","operationName":"workspaceLoad"}"#,
        )
        .unwrap();
        let err = job.to_client_error();
        assert_eq!(err.code.as_deref(), Some("storage.job.cancelled"));
    }
}
