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

//! Endpoint URL handling

use crate::sapi::error::ValidationErr;
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use std::fmt;
use std::str::FromStr;

/// Path prefix of every Storage API resource
pub const API_BASE_PATH: &str = "/v2/storage";

#[derive(Clone, Debug)]
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Stack endpoint, e.g. `https://connection.keboola.com`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// A missing scheme means HTTPS. Default ports are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage_api::sapi::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "connection.keboola.com".parse().unwrap();
    /// assert!(base_url.https);
    /// let base_url: BaseUrl = "http://127.0.0.1:8080/".parse().unwrap();
    /// assert_eq!(base_url.port(), 8080);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationErr::InvalidBaseUrl("url cannot be empty".into()));
        }
        let with_scheme = if s.contains("://") {
            s.to_string()
        } else {
            format!("https://{s}")
        };

        let url = url::Url::parse(&with_scheme)
            .map_err(|e| ValidationErr::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme() {
            "http" => false,
            "https" => true,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        // url::Url already drops the scheme's default port
        let port = url.port().unwrap_or(0);

        Ok(BaseUrl { https, host, port })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL of an API resource.
    ///
    /// `path` is relative to `/v2/storage/`; a branch id inserts
    /// `branch/{id}/` in front of it.
    pub fn build_url(&self, path: &str, branch_id: Option<&str>, query: &Multimap) -> Url {
        let mut full_path = String::from(API_BASE_PATH);
        if let Some(branch) = branch_id {
            full_path.push_str("/branch/");
            full_path.push_str(branch);
        }
        let path = path.trim_start_matches('/');
        if !path.is_empty() {
            full_path.push('/');
            full_path.push_str(path);
        }

        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: full_path,
            query: query.clone(),
        }
    }

    /// The endpoint as a string, without a trailing slash
    pub fn to_url_string(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        if self.port > 0 {
            format!("{scheme}://{}:{}", self.host, self.port)
        } else {
            format!("{scheme}://{}", self.host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_without_scheme() {
        let base: BaseUrl = "connection.keboola.com".parse().unwrap();
        assert!(base.https);
        assert_eq!(base.host(), "connection.keboola.com");
        assert_eq!(base.port(), 0);
    }

    #[test]
    fn drops_default_port() {
        let base: BaseUrl = "https://connection.keboola.com:443".parse().unwrap();
        assert_eq!(base.port(), 0);
        assert_eq!(base.to_url_string(), "https://connection.keboola.com");
    }

    #[test]
    fn rejects_path_and_query() {
        assert!("https://example.com/v2".parse::<BaseUrl>().is_err());
        assert!("https://example.com/?a=b".parse::<BaseUrl>().is_err());
        assert!("ftp://example.com".parse::<BaseUrl>().is_err());
        assert!("".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn builds_project_and_branch_urls() {
        let base: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
        let mut query = Multimap::new();
        query.add("include", "columns");

        let url = base.build_url("buckets/in.c-main/tables", None, &query);
        assert_eq!(
            url.to_string(),
            "http://127.0.0.1:8080/v2/storage/buckets/in.c-main/tables?include=columns"
        );

        let url = base.build_url("/buckets", Some("123"), &Multimap::new());
        assert_eq!(
            url.to_string(),
            "http://127.0.0.1:8080/v2/storage/branch/123/buckets"
        );
    }
}
