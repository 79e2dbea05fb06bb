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

use crate::utils::{accepted_job, job_json};
use serde_json::Value;
use std::time::Duration;
use storage_api::sapi::client::{JobPollConfig, RetryConfig, StorageClient, StorageClientBuilder};
use storage_api::sapi::http::BaseUrl;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Mock Storage API stack and a client pointed at it.
///
/// Retries and job polling use millisecond delays so that tests exercising
/// them stay fast.
pub struct TestContext {
    pub server: MockServer,
    pub client: StorageClient,
    pub base_url: BaseUrl,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_builder(|builder| builder).await
    }

    /// Starts the mock stack and lets the caller adjust the client builder
    pub async fn with_builder<F>(configure: F) -> Self
    where
        F: FnOnce(StorageClientBuilder) -> StorageClientBuilder,
    {
        let _ = env_logger::builder().is_test(true).try_init();

        let server = MockServer::start().await;
        log::debug!("mock stack listening at {}", server.uri());
        let base_url: BaseUrl = server.uri().parse().unwrap();

        let builder = StorageClientBuilder::new(base_url.clone())
            .token(TEST_TOKEN)
            .retry_config(fast_retry())
            .job_poll_config(fast_poll());
        let client = configure(builder).build().unwrap();

        Self {
            server,
            client,
            base_url,
        }
    }

    /// Absolute URL on the mock server, e.g. for file downloads
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// Mounts a JSON answer for `http_method` on an API resource
    pub async fn mock_json(&self, http_method: &str, resource: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(api_path(resource)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mounts an operation that answers `202 Accepted` with job `job_id`,
    /// and the job itself finishing successfully with `results`.
    pub async fn mock_job(
        &self,
        http_method: &str,
        resource: &str,
        job_id: u64,
        operation: &str,
        results: Value,
    ) {
        self.mock_json(http_method, resource, 202, accepted_job(job_id, operation))
            .await;
        self.mock_json(
            "GET",
            &format!("jobs/{job_id}"),
            200,
            job_json(job_id, operation, "success", results),
        )
        .await;
    }
}

/// Request path of a resource outside any dev branch
pub fn api_path(resource: &str) -> String {
    format!("/v2/storage/{}", resource.trim_start_matches('/'))
}

/// Request path of a resource inside dev branch `branch_id`
pub fn branch_path(branch_id: &str, resource: &str) -> String {
    format!(
        "/v2/storage/branch/{branch_id}/{}",
        resource.trim_start_matches('/')
    )
}

pub fn fast_retry() -> RetryConfig {
    RetryConfig::default()
        .max_tries(3)
        .base_delay(Duration::from_millis(1))
        .max_delay(Duration::from_millis(5))
}

pub fn fast_poll() -> JobPollConfig {
    JobPollConfig::default()
        .initial_interval(Duration::from_millis(1))
        .max_interval(Duration::from_millis(5))
        .timeout(Some(Duration::from_secs(5)))
}
