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
use crate::sapi::utils::{check_not_empty, url_encode};

pub(super) fn configs_path(component_id: &str) -> String {
    format!("components/{}/configs", url_encode(component_id))
}

pub(super) fn config_path(component_id: &str, configuration_id: &str) -> String {
    format!(
        "{}/{}",
        configs_path(component_id),
        url_encode(configuration_id)
    )
}

pub(super) fn check_config_ids(
    component_id: &str,
    configuration_id: &str,
) -> Result<(), ValidationErr> {
    check_not_empty("component_id", component_id)?;
    check_not_empty("configuration_id", configuration_id)
}
