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

use crate::sapi::builders::{
    CreateEvent, CreateEventBldr, GetEvent, GetEventBldr, ListEvents, ListEventsBldr,
};
use crate::sapi::client::StorageClient;

impl StorageClient {
    pub fn list_events(&self) -> ListEventsBldr {
        ListEvents::builder().client(self.clone())
    }

    pub fn get_event<S: Into<String>>(&self, event_id: S) -> GetEventBldr {
        GetEvent::builder().client(self.clone()).event_id(event_id)
    }

    /// Writes an event to the project log.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::{EventType, StorageApi};
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = client
    ///     .create_event("my-extractor", "Extraction finished")
    ///     .event_type(EventType::Success)
    ///     .duration(12)
    ///     .build()
    ///     .send()
    ///     .await?;
    /// println!("event {}", resp.event_id()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_event<S1, S2>(&self, component: S1, message: S2) -> CreateEventBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        CreateEvent::builder()
            .client(self.clone())
            .component(component)
            .message(message)
    }
}
