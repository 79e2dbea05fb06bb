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
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::ListEventsResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing events, newest first.
///
/// `since_id` and `max_id` page through the event log by id.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListEvents {
    #[builder(!default)]
    client: StorageClient,
    #[builder(default, setter(strip_option))]
    limit: Option<u32>,
    #[builder(default, setter(strip_option))]
    offset: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    component: Option<String>,
    #[builder(default, setter(into, strip_option))]
    run_id: Option<String>,
    /// Full-text query
    #[builder(default, setter(into, strip_option))]
    q: Option<String>,
    #[builder(default, setter(into, strip_option))]
    since_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    max_id: Option<String>,
}

impl StorageApi for ListEvents {
    type StorageResponse = ListEventsResponse;
}

/// Builder type for ListEvents
pub type ListEventsBldr = ListEventsBuilder<((StorageClient,), (), (), (), (), (), (), ())>;

impl ToStorageRequest for ListEvents {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let mut query = Multimap::new();
        query.add_opt("limit", self.limit.map(|v| v.to_string()));
        query.add_opt("offset", self.offset.map(|v| v.to_string()));
        query.add_opt("component", self.component);
        query.add_opt("runId", self.run_id);
        query.add_opt("q", self.q);
        query.add_opt("sinceId", self.since_id);
        query.add_opt("maxId", self.max_id);
        Ok(StorageRequest::new(self.client, Method::GET, "events")
            .scope(Scope::Project)
            .query_params(query))
    }
}
