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

//! Storage API client: configuration, transport, retries and job polling

use bytes::Bytes;
use http::Method;
use std::mem;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::sapi::creds::{Provider, StaticProvider};
use crate::sapi::error::{ClientError, Error, NetworkError, ValidationErr};
use crate::sapi::header_constants::*;
use crate::sapi::http::BaseUrl;
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::types::{Job, JobStatus, RawResponse, Scope};
use crate::sapi::utils::backoff_delay;

mod buckets;
mod components;
mod dev_branches;
mod events;
mod files;
mod jobs;
mod metadata;
mod tables;
mod tokens;
mod workspaces;

/// Environment variable holding the stack endpoint
pub const ENV_URL: &str = "STORAGE_API_URL";
/// Environment variable holding the token
pub const ENV_TOKEN: &str = "STORAGE_API_TOKEN";
/// Optional environment variable with the dev branch id
pub const ENV_BRANCH_ID: &str = "STORAGE_API_BRANCH_ID";
/// Optional environment variable with the run id
pub const ENV_RUN_ID: &str = "STORAGE_API_RUN_ID";

/// Default per-request HTTP timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Retry policy for transient failures.
///
/// Network errors, HTTP 429 and HTTP 5xx other than 501 are retried. Before
/// retry `n` the client sleeps `min(base_delay * 2^(n-1), max_delay)`.
///
/// # Example
///
/// ```
/// use storage_api::sapi::client::RetryConfig;
/// use std::time::Duration;
///
/// let retry = RetryConfig::default()
///     .max_tries(3)
///     .base_delay(Duration::from_millis(200));
/// assert_eq!(retry.max_tries, 3);
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one. Default: 11
    pub max_tries: u32,
    /// Delay before the first retry. Default: 1 second
    pub base_delay: Duration,
    /// Upper bound of a single delay. Default: 300 seconds
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_tries: 11,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(300),
        }
    }
}

impl RetryConfig {
    pub fn max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Delay before the given retry (1-based)
    pub fn delay(&self, retry: u32) -> Duration {
        backoff_delay(retry, self.base_delay, self.max_delay)
    }
}

/// Backoff of the asynchronous job poller.
///
/// The interval starts at `initial_interval`, doubles after every poll and
/// never exceeds `max_interval`. `timeout: None` polls forever.
#[derive(Debug, Clone)]
pub struct JobPollConfig {
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub timeout: Option<Duration>,
}

impl Default for JobPollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(20),
            timeout: Some(Duration::from_secs(3600)),
        }
    }
}

impl JobPollConfig {
    pub fn initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP connection pool settings
///
/// # Example
///
/// ```
/// use storage_api::sapi::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// assert_eq!(config.max_idle_per_host, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,
    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: Duration,
    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,
    /// Disable Nagle's algorithm. Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Manufactures a [`StorageClient`] from the stack URL, a token and optional
/// tuning.
#[derive(Debug)]
pub struct StorageClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// (app_name, app_version) appended to the user agent
    app_info: Option<(String, String)>,
    run_id: Option<String>,
    branch_id: Option<String>,
    retry: RetryConfig,
    job_poll: JobPollConfig,
    timeout: Duration,
    connection_pool_config: ConnectionPoolConfig,
}

impl StorageClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            app_info: None,
            run_id: None,
            branch_id: None,
            retry: RetryConfig::default(),
            job_poll: JobPollConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Creates a builder from `STORAGE_API_URL` and `STORAGE_API_TOKEN`.
    ///
    /// `STORAGE_API_BRANCH_ID` and `STORAGE_API_RUN_ID` are applied when set.
    pub fn from_env() -> Result<Self, Error> {
        let url = non_empty_env(ENV_URL).ok_or(ValidationErr::MissingEnvVar(ENV_URL))?;
        let token = non_empty_env(ENV_TOKEN).ok_or(ValidationErr::MissingEnvVar(ENV_TOKEN))?;

        let mut builder = Self::new(url.parse::<BaseUrl>()?).token(&token);
        if let Some(branch_id) = non_empty_env(ENV_BRANCH_ID) {
            builder = builder.branch_id(branch_id);
        }
        if let Some(run_id) = non_empty_env(ENV_RUN_ID) {
            builder = builder.run_id(run_id);
        }
        Ok(builder)
    }

    /// Use a static Storage API token
    pub fn token(self, token: &str) -> Self {
        self.provider(StaticProvider::new(token))
    }

    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    pub fn run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    /// Scope branch-level resources to a dev branch
    pub fn branch_id(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn job_poll_config(mut self, job_poll: JobPollConfig) -> Self {
        self.job_poll = job_poll;
        self
    }

    /// Per-request HTTP timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no token was set or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<StorageClient, Error> {
        let provider = self.provider.ok_or(ValidationErr::MissingArgument("token"))?;

        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        let mut user_agent = String::from("storage-api-rs/") + env!("CARGO_PKG_VERSION");
        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        Ok(StorageClient {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                retry: self.retry,
                job_poll: self.job_poll,
            }),
            branch_id: self.branch_id,
            run_id: self.run_id,
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Arc<dyn Provider + Send + Sync + 'static>,
    pub(crate) retry: RetryConfig,
    pub(crate) job_poll: JobPollConfig,
}

/// Storage API client.
///
/// Cheap to clone; clones share the HTTP connection pool. Branch scope and
/// run id are per clone.
#[derive(Clone, Debug)]
pub struct StorageClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
    branch_id: Option<String>,
    run_id: Option<String>,
}

impl StorageClient {
    /// Returns a client for the given stack and token with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage_api::sapi::client::StorageClient;
    ///
    /// let base_url = "https://connection.keboola.com".parse().unwrap();
    /// let client = StorageClient::new(base_url, "my-token").unwrap();
    /// assert_eq!(client.branch_id(), None);
    /// ```
    pub fn new(base_url: BaseUrl, token: &str) -> Result<Self, Error> {
        StorageClientBuilder::new(base_url).token(token).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.branch_id.as_deref()
    }

    pub fn run_id(&self) -> Option<&str> {
        self.run_id.as_deref()
    }

    /// Returns a clone whose branch-scoped calls go to the given dev branch
    pub fn for_branch(&self, branch_id: impl ToString) -> Self {
        Self {
            branch_id: Some(branch_id.to_string()),
            ..self.clone()
        }
    }

    /// Returns a clone scoped to the default (production) branch
    pub fn for_default_branch(&self) -> Self {
        Self {
            branch_id: None,
            ..self.clone()
        }
    }

    /// Returns a clone that sends the given run id
    pub fn with_run_id(&self, run_id: impl Into<String>) -> Self {
        Self {
            run_id: Some(run_id.into()),
            ..self.clone()
        }
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.shared.retry
    }

    pub fn job_poll_config(&self) -> &JobPollConfig {
        &self.shared.job_poll
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Sends an API request and buffers the response.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        scope: Scope,
        headers: &mut Multimap,
        query_params: &Multimap,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, Error> {
        let branch_id = match scope {
            Scope::Branch => self.branch_id.as_deref(),
            Scope::Project => None,
        };
        let url = self
            .shared
            .base_url
            .build_url(path, branch_id, query_params)
            .to_string();

        headers.add(X_STORAGEAPI_TOKEN, self.shared.provider.fetch().token);
        if !headers.contains_key(ACCEPT) {
            headers.add(ACCEPT, APPLICATION_JSON);
        }
        if let Some(run_id) = &self.run_id {
            headers.add(X_KBC_RUNID, run_id.as_str());
        }
        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, APPLICATION_JSON);
        }

        log::debug!("{method} {url}");

        let body = body.map(Bytes::from);
        let mut resp = self
            .send_with_retry(&method, &url, || {
                let mut req = self.http_client.request(method.clone(), &url);
                for (key, values) in headers.iter_all() {
                    for value in values {
                        req = req.header(key, value);
                    }
                }
                if let Some(b) = &body {
                    req = req.body(b.clone());
                }
                req
            })
            .await?;

        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Fetches a URL outside the API, without the Storage token. Used for
    /// file downloads.
    pub(crate) async fn download(&self, url: &str) -> Result<reqwest::Response, Error> {
        self.send_with_retry(&Method::GET, url, || self.http_client.get(url))
            .await
    }

    /// Sends the request produced by `make_request` until it succeeds, fails
    /// with a non-retryable error, or the retry budget is spent.
    ///
    /// The closure is called once per attempt, so it must rebuild the body.
    pub(crate) async fn send_with_retry<F>(
        &self,
        method: &Method,
        url: &str,
        mut make_request: F,
    ) -> Result<reqwest::Response, Error>
    where
        F: FnMut() -> reqwest::RequestBuilder,
    {
        let retry = &self.shared.retry;
        let max_tries = retry.max_tries.max(1);
        let mut attempt = 1;

        loop {
            let outcome = make_request().send().await;
            let can_retry = attempt < max_tries;

            match outcome {
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                Ok(resp) => {
                    let status = resp.status();
                    if can_retry && is_retryable_status(status) {
                        let delay = retry.delay(attempt);
                        log::warn!(
                            "{method} {url} returned {status}, retry {attempt}/{} in {delay:?}",
                            max_tries - 1
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
                    return Err(ClientError::from_http_body(status.as_u16(), &body).into());
                }
                Err(e) => {
                    if can_retry && is_retryable_error(&e) {
                        let delay = retry.delay(attempt);
                        log::warn!(
                            "{method} {url} failed: {e}, retry {attempt}/{} in {delay:?}",
                            max_tries - 1
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(NetworkError::ReqwestError(e).into());
                }
            }
        }
    }

    /// Polls `jobs/{id}` until the job finishes and returns the final job
    /// document.
    pub(crate) async fn poll_job(&self, job_id: u64) -> Result<RawResponse, Error> {
        let config = &self.shared.job_poll;
        let started = Instant::now();
        let mut interval = config.initial_interval;
        let path = format!("jobs/{job_id}");

        loop {
            tokio::time::sleep(interval).await;

            let resp = self
                .execute(
                    Method::GET,
                    &path,
                    Scope::Project,
                    &mut Multimap::new(),
                    &Multimap::new(),
                    None,
                )
                .await?;
            let job: Job = serde_json::from_slice(&resp.body)?;
            log::debug!("job {job_id} is {}", job.status);

            if job.status.is_finished() {
                if job.status == JobStatus::Success {
                    log::info!(
                        "job {job_id} ({}) finished in {:?}",
                        job.operation_name,
                        started.elapsed()
                    );
                    return Ok(resp);
                }
                return Err(Error::Server(job.to_client_error()));
            }

            let elapsed = started.elapsed();
            if let Some(timeout) = config.timeout {
                if elapsed >= timeout {
                    return Err(Error::JobTimeout { job_id, elapsed });
                }
            }
            interval = interval.saturating_mul(2).min(config.max_interval);
        }
    }
}

fn is_retryable_status(status: http::StatusCode) -> bool {
    status == http::StatusCode::TOO_MANY_REQUESTS
        || (status.is_server_error() && status != http::StatusCode::NOT_IMPLEMENTED)
}

fn is_retryable_error(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout() || e.is_request()
}
