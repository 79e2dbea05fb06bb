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
use crate::sapi::types::MetadataTarget;
use crate::sapi::utils::check_not_empty;

pub(super) fn check_target(target: &MetadataTarget) -> Result<(), ValidationErr> {
    match target {
        MetadataTarget::Bucket(id) => check_not_empty("bucket_id", id),
        MetadataTarget::Table(id) => check_not_empty("table_id", id),
        MetadataTarget::Column(id) => check_not_empty("column_id", id),
    }
}
