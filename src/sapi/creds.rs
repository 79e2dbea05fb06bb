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

//! Token providers

use std::fmt;

/// Storage API token sent in the `X-StorageApi-Token` header
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"*****")
            .finish()
    }
}

/// Provider of credentials
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

/// Static token provider
#[derive(Clone, Debug)]
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with the given token
    ///
    /// # Examples
    ///
    /// ```
    /// use storage_api::sapi::creds::StaticProvider;
    /// let provider = StaticProvider::new("your-token");
    /// ```
    pub fn new(token: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                token: token.to_string(),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_token() {
        let provider = StaticProvider::new("123-secret");
        assert_eq!(provider.fetch().token, "123-secret");
        assert!(!format!("{provider:?}").contains("secret"));
    }
}
