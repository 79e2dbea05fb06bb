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
use crate::sapi::response_traits::HasStorageFields;
use crate::sapi::types::{Event, StorageRequest};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct ListEventsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListEventsResponse {
    pub fn events(&self) -> Result<Vec<Event>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct GetEventResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl GetEventResponse {
    pub fn event(&self) -> Result<Event, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct CreateEventResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Deserialize)]
struct CreatedEvent {
    #[serde(deserialize_with = "crate::sapi::types::de::string_or_number")]
    id: String,
}

impl CreateEventResponse {
    /// Id the server assigned to the new event
    pub fn event_id(&self) -> Result<String, ValidationErr> {
        Ok(self.json::<CreatedEvent>()?.id)
    }
}

impl_from_storage_response!(ListEventsResponse, GetEventResponse, CreateEventResponse);
impl_has_storage_fields!(ListEventsResponse, GetEventResponse, CreateEventResponse);
