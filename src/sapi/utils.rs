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

//! Various utility and helper functions

use crate::sapi::error::ValidationErr;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::time::Duration;

/// Percent-encodes a query key, query value or path segment
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Returns an error when `value` is empty
pub fn check_not_empty(name: &'static str, value: &str) -> Result<(), ValidationErr> {
    if value.trim().is_empty() {
        return Err(ValidationErr::InvalidArgument {
            name,
            reason: "cannot be empty".into(),
        });
    }
    Ok(())
}

/// Validates a bucket id such as `in.c-main`
pub fn check_bucket_id(bucket_id: &str) -> Result<(), ValidationErr> {
    if bucket_id.is_empty() {
        return Err(ValidationErr::InvalidBucketId(
            "bucket id cannot be empty".into(),
        ));
    }
    match bucket_id.split_once('.') {
        Some((stage, name)) if !stage.is_empty() && !name.is_empty() && !name.contains('.') => {
            Ok(())
        }
        _ => Err(ValidationErr::InvalidBucketId(format!(
            "'{bucket_id}' must have the form <stage>.<name>"
        ))),
    }
}

/// Table id in the form `{stage}.{bucket}.{table}`, e.g. `in.c-main.users`
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableId(String);

impl TableId {
    /// Creates a validated table id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErr::InvalidTableId`] unless the id has exactly
    /// three non-empty dot-separated segments.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationErr> {
        let id = id.into();
        let (bucket, table) = id.rsplit_once('.').ok_or_else(|| {
            ValidationErr::InvalidTableId(format!("'{id}' must have the form <bucket id>.<table>"))
        })?;
        if table.is_empty() {
            return Err(ValidationErr::InvalidTableId(format!(
                "'{id}' has an empty table name"
            )));
        }
        check_bucket_id(bucket)
            .map_err(|_| {
                ValidationErr::InvalidTableId(format!("'{id}' has an invalid bucket id"))
            })?;
        Ok(Self(id))
    }

    /// Returns the id of the bucket holding the table
    pub fn bucket_id(&self) -> &str {
        self.0.rsplit_once('.').map(|(b, _)| b).unwrap_or_default()
    }

    /// Returns the table name
    pub fn name(&self) -> &str {
        self.0.rsplit_once('.').map(|(_, t)| t).unwrap_or_default()
    }

    /// Returns the id of a column of this table, as used by the metadata API
    pub fn column_id(&self, column: &str) -> String {
        format!("{}.{}", self.0, column)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TableId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TableId {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TableId::new(value)
    }
}

impl TryFrom<&str> for TableId {
    type Error = ValidationErr;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TableId::new(value)
    }
}

impl From<TableId> for String {
    fn from(id: TableId) -> Self {
        id.0
    }
}

/// Rejects ids that are not `{stage}.{bucket}.{table}`
pub fn check_table_id(table_id: &str) -> Result<(), ValidationErr> {
    TableId::new(table_id).map(|_| ())
}

/// Delay before the given retry (1-based): `base * 2^(retry-1)`, capped at `max`
pub fn backoff_delay(retry: u32, base: Duration, max: Duration) -> Duration {
    let exp = retry.saturating_sub(1).min(31);
    base.checked_mul(1u32 << exp).unwrap_or(max).min(max)
}

pub type UtcTime = DateTime<Utc>;

/// Formats a time for `changedSince`, `changedUntil` and time-travel
/// parameters
pub fn to_iso8601(time: UtcTime) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Bound of a `changedSince` or `changedUntil` filter. Either an exact time
/// or a relative expression the API accepts, such as `-2 days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBound(String);

impl ChangeBound {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<UtcTime> for ChangeBound {
    fn from(time: UtcTime) -> Self {
        Self(to_iso8601(time))
    }
}

impl From<&str> for ChangeBound {
    fn from(expr: &str) -> Self {
        Self(expr.to_owned())
    }
}

impl From<String> for ChangeBound {
    fn from(expr: String) -> Self {
        Self(expr)
    }
}

/// Parses a timestamp as returned by the API, e.g.
/// `2024-05-02T10:11:12+0200` or RFC 3339
pub fn parse_timestamp(s: &str) -> Option<UtcTime> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Generates a run id. A nested run id is appended to its parent with a dot.
pub fn generate_run_id(previous: Option<&str>) -> String {
    let id = (uuid::Uuid::new_v4().as_u128() % 1_000_000_000_000).to_string();
    match previous {
        Some(p) if !p.is_empty() => format!("{p}.{id}"),
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_id_parts() {
        let id = TableId::new("in.c-main.users").unwrap();
        assert_eq!(id.bucket_id(), "in.c-main");
        assert_eq!(id.name(), "users");
        assert_eq!(id.column_id("email"), "in.c-main.users.email");
    }

    #[test]
    fn table_id_rejects_short_ids() {
        assert!(TableId::new("users").is_err());
        assert!(TableId::new("in.users").is_err());
        assert!(TableId::new("in.c-main.").is_err());
        assert!(TableId::new(".c-main.users").is_err());
    }

    #[test]
    fn table_id_rejects_extra_segments() {
        assert!(TableId::new("in.c-main.users.extra").is_err());
        assert!(TableId::new("in.c-main.users.").is_err());
        assert!(check_bucket_id("in.c-main.users").is_err());
        assert!(check_bucket_id("in.c-main").is_ok());
    }

    #[test]
    fn bucket_id_checks() {
        assert!(check_bucket_id("in.c-main").is_ok());
        assert!(check_bucket_id("in").is_err());
        assert!(check_bucket_id("").is_err());
    }

    #[test]
    fn backoff_doubles_until_capped() {
        let base = Duration::from_millis(100);
        let max = Duration::from_secs(1);
        assert_eq!(backoff_delay(1, base, max), Duration::from_millis(100));
        assert_eq!(backoff_delay(2, base, max), Duration::from_millis(200));
        assert_eq!(backoff_delay(4, base, max), Duration::from_millis(800));
        assert_eq!(backoff_delay(5, base, max), max);
        assert_eq!(backoff_delay(200, base, max), max);
    }

    quickcheck! {
        fn backoff_never_exceeds_max(retry: u32, base_ms: u16, max_ms: u16) -> bool {
            let base = Duration::from_millis(base_ms as u64);
            let max = Duration::from_millis(max_ms as u64);
            backoff_delay(retry, base, max) <= max
        }

        fn backoff_is_monotonic(retry: u8, base_ms: u16) -> bool {
            let base = Duration::from_millis(base_ms as u64);
            let max = Duration::from_secs(3600);
            let retry = retry as u32;
            backoff_delay(retry, base, max) <= backoff_delay(retry + 1, base, max)
        }
    }

    #[test]
    fn api_timestamps() {
        let t = parse_timestamp("2024-05-02T10:11:12+0200").unwrap();
        assert_eq!(to_iso8601(t), "2024-05-02T08:11:12Z");
        assert_eq!(parse_timestamp("2024-05-02T08:11:12Z"), Some(t));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn change_bounds() {
        let t = parse_timestamp("2024-05-02T10:11:12+0200").unwrap();
        assert_eq!(ChangeBound::from(t).into_inner(), "2024-05-02T08:11:12Z");
        assert_eq!(ChangeBound::from("-2 days").into_inner(), "-2 days");
    }

    #[test]
    fn nested_run_id() {
        let parent = generate_run_id(None);
        assert!(!parent.contains('.'));
        let child = generate_run_id(Some(&parent));
        assert!(child.starts_with(&format!("{parent}.")));
    }
}
