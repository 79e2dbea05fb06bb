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

//! Client methods for storage jobs

use crate::sapi::builders::{GetJob, GetJobBldr};
use crate::sapi::client::StorageClient;
use crate::sapi::error::Error;
use crate::sapi::types::Job;

impl StorageClient {
    pub fn get_job(&self, job_id: u64) -> GetJobBldr {
        GetJob::builder().client(self.clone()).job_id(job_id)
    }

    /// Polls a job until it finishes, using the client's
    /// [`JobPollConfig`](crate::sapi::client::JobPollConfig).
    ///
    /// A job that ends in any state other than `success` is returned as
    /// [`Error::Server`].
    pub async fn wait_for_job(&self, job_id: u64) -> Result<Job, Error> {
        let resp = self.poll_job(job_id).await?;
        Ok(serde_json::from_slice(&resp.body)?)
    }
}
