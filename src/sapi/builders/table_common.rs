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

use crate::sapi::error::ValidationErr;
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::types::WhereOperator;
use crate::sapi::utils::{check_not_empty, url_encode};

pub(super) fn table_path(table_id: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("tables/{}", url_encode(table_id))
    } else {
        format!("tables/{}/{suffix}", url_encode(table_id))
    }
}

pub(super) fn bucket_path(bucket_id: &str, suffix: &str) -> String {
    format!("buckets/{}/{suffix}", url_encode(bucket_id))
}

pub(super) fn check_single_byte(
    name: &'static str,
    value: Option<char>,
) -> Result<(), ValidationErr> {
    match value {
        Some(c) if !c.is_ascii() => Err(ValidationErr::InvalidArgument {
            name,
            reason: format!("'{c}' is not a single-byte character"),
        }),
        _ => Ok(()),
    }
}

/// Row filter shared by exports, previews and row deletion
#[derive(Clone, Debug, Default)]
pub(super) struct RowFilter {
    pub(super) where_column: Option<String>,
    pub(super) where_values: Vec<String>,
    pub(super) where_operator: Option<WhereOperator>,
    pub(super) changed_since: Option<String>,
    pub(super) changed_until: Option<String>,
}

impl RowFilter {
    pub(super) fn validate(&self) -> Result<(), ValidationErr> {
        match &self.where_column {
            Some(column) => check_not_empty("where_column", column),
            None if !self.where_values.is_empty() => {
                Err(ValidationErr::MissingArgument("where_column"))
            }
            None => Ok(()),
        }
    }

    pub(super) fn add_to_query(self, query: &mut Multimap) {
        query.add_opt("whereColumn", self.where_column);
        if !self.where_values.is_empty() {
            query.add_array("whereValues", self.where_values);
        }
        query.add_opt("whereOperator", self.where_operator.map(WhereOperator::as_str));
        query.add_opt("changedSince", self.changed_since);
        query.add_opt("changedUntil", self.changed_until);
    }
}
