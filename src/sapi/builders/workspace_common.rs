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

use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::types::{StorageRequest, WorkspaceLoadInput};
use http::Method;
use serde::Serialize;

#[derive(Serialize)]
struct LoadWorkspaceBody {
    input: Vec<WorkspaceLoadInput>,
    preserve: bool,
}

pub(super) fn load_request(
    client: StorageClient,
    workspace_id: u64,
    endpoint: &str,
    inputs: Vec<WorkspaceLoadInput>,
    preserve: bool,
) -> Result<StorageRequest, ValidationErr> {
    if inputs.is_empty() {
        return Err(ValidationErr::InvalidArgument {
            name: "inputs",
            reason: "at least one input is required".into(),
        });
    }
    for input in &inputs {
        if input.source.trim().is_empty() || input.destination.trim().is_empty() {
            return Err(ValidationErr::InvalidArgument {
                name: "inputs",
                reason: "every input needs a source and a destination".into(),
            });
        }
        if input.where_column.is_none() && !input.where_values.is_empty() {
            return Err(ValidationErr::MissingArgument("where_column"));
        }
    }

    Ok(StorageRequest::new(
        client,
        Method::POST,
        format!("workspaces/{workspace_id}/{endpoint}"),
    )
    .json_body(&LoadWorkspaceBody {
        input: inputs,
        preserve,
    })?
    .wait_for_job())
}
