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

//! Request types and traits for Storage API operations

use crate::sapi::client::StorageClient;
use crate::sapi::error::{Error, ValidationErr};
use crate::sapi::multimap_ext::Multimap;
use crate::sapi::types::Job;
use crate::sapi::types::job::is_job_document;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::Serialize;

/// Whether a resource lives under the dev-branch prefix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Buckets, tables, workspaces, components and metadata
    #[default]
    Branch,
    /// Dev branches, tokens, jobs, events and files
    Project,
}

/// Fully buffered HTTP response
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Request structure for Storage API operations
#[derive(Clone, Debug)]
pub struct StorageRequest {
    /// Client reference
    pub client: StorageClient,
    /// HTTP method
    pub method: Method,
    /// Request path relative to `/v2/storage/`
    pub path: String,
    /// Branch or project scope
    pub scope: Scope,
    /// Query parameters
    pub query_params: Multimap,
    /// Request headers
    pub headers: Multimap,
    /// JSON request body
    pub body: Option<Vec<u8>>,
    /// Poll the job when the server answers 202 Accepted. Also set once an
    /// unflagged request was answered with a job and polled.
    pub wait_for_job: bool,
}

impl StorageRequest {
    pub fn new(client: StorageClient, method: Method, path: impl Into<String>) -> Self {
        Self {
            client,
            method,
            path: path.into(),
            scope: Scope::Branch,
            query_params: Multimap::new(),
            headers: Multimap::new(),
            body: None,
            wait_for_job: false,
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn query_params(mut self, query_params: Multimap) -> Self {
        self.query_params = query_params;
        self
    }

    /// Serializes `body` as the JSON request body
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, ValidationErr> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn wait_for_job(mut self) -> Self {
        self.wait_for_job = true;
        self
    }

    /// Execute the Storage API request
    ///
    /// When the server answers 202 with a job, the job is polled to
    /// completion and the final job document becomes the response. Requests
    /// flagged with `wait_for_job` are always treated this way; other
    /// requests only when the 202 body is a job document.
    ///
    /// # Errors
    ///
    /// Returns `Error` if the HTTP request fails, the server returns an error
    /// or the job fails.
    pub(crate) async fn execute(&mut self) -> Result<RawResponse, Error> {
        let response = self
            .client
            .execute(
                self.method.clone(),
                &self.path,
                self.scope,
                &mut self.headers,
                &self.query_params,
                self.body.clone(),
            )
            .await?;

        if response.status == StatusCode::ACCEPTED
            && (self.wait_for_job || started_job(&response.body))
        {
            let job: Job = serde_json::from_slice(&response.body)?;
            self.wait_for_job = true;
            log::debug!(
                "{} {} started job {} ({})",
                self.method,
                self.path,
                job.id,
                job.operation_name
            );
            return self.client.poll_job(job.id).await;
        }

        Ok(response)
    }
}

fn started_job(body: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(body).is_ok_and(|v| is_job_document(&v))
}

/// Convert builder to StorageRequest
pub trait ToStorageRequest {
    /// Convert this builder into a StorageRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr>;
}

/// Execute Storage API operation
pub trait StorageApi: ToStorageRequest {
    /// Response type for this operation
    type StorageResponse: FromStorageResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the response cannot be parsed.
    fn send(self) -> impl std::future::Future<Output = Result<Self::StorageResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: StorageRequest = self.to_storage_request()?;
            let response: Result<RawResponse, Error> = request.execute().await;
            Self::StorageResponse::from_storage_response(request, response).await
        }
    }
}

/// Parse response from Storage API
#[async_trait::async_trait]
pub trait FromStorageResponse: Sized {
    /// Parse the response from a StorageRequest
    ///
    /// # Errors
    ///
    /// Returns `Error` if the response cannot be parsed or contains an error.
    async fn from_storage_response(
        request: StorageRequest,
        response: Result<RawResponse, Error>,
    ) -> Result<Self, Error>;
}
