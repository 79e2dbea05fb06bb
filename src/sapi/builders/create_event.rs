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
use crate::sapi::response::CreateEventResponse;
use crate::sapi::types::{EventType, Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for writing an event to the project log.
///
/// The run id defaults to the client's run id.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateEvent {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component: String,
    #[builder(!default, setter(into))]
    message: String,
    #[builder(default)]
    event_type: EventType,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
    #[builder(default, setter(strip_option))]
    params: Option<serde_json::Value>,
    #[builder(default, setter(strip_option))]
    results: Option<serde_json::Value>,
    /// Duration in seconds
    #[builder(default, setter(strip_option))]
    duration: Option<u64>,
    #[builder(default, setter(into, strip_option))]
    run_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    configuration_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateEventBody {
    component: String,
    message: String,
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_id: Option<String>,
}

impl StorageApi for CreateEvent {
    type StorageResponse = CreateEventResponse;
}

/// Builder type for CreateEvent
pub type CreateEventBldr = CreateEventBuilder<(
    (StorageClient,),
    (String,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl ToStorageRequest for CreateEvent {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("component", &self.component)?;
        check_not_empty("message", &self.message)?;
        let run_id = self
            .run_id
            .or_else(|| self.client.run_id().map(str::to_string));
        let body = CreateEventBody {
            component: self.component,
            message: self.message,
            event_type: self.event_type,
            description: self.description,
            params: self.params,
            results: self.results,
            duration: self.duration,
            run_id,
            configuration_id: self.configuration_id,
        };
        StorageRequest::new(self.client, Method::POST, "events")
            .scope(Scope::Project)
            .json_body(&body)
    }
}
