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

use crate::sapi::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a key-value pair when the value is present
    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>);

    /// Adds a boolean flag as `1`/`0`
    fn add_flag<K: Into<String>>(&mut self, key: K, value: bool);

    /// Adds every value under the array form of the key (`key[]`)
    fn add_array<K: AsRef<str>, I, V>(&mut self, key: K, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.into());
        }
    }

    fn add_flag<K: Into<String>>(&mut self, key: K, value: bool) {
        self.insert(key.into(), if value { "1" } else { "0" }.to_string());
    }

    fn add_array<K: AsRef<str>, I, V>(&mut self, key: K, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = format!("{}[]", key.as_ref());
        for v in values {
            self.insert(key.clone(), v.into());
        }
    }

    fn to_query_string(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut query = String::new();
        for key in keys {
            if let Some(values) = self.get_vec(key) {
                for value in values {
                    if !query.is_empty() {
                        query.push('&');
                    }
                    query.push_str(&url_encode(key));
                    query.push('=');
                    query.push_str(&url_encode(value));
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let mut q = Multimap::new();
        q.add("limit", "10");
        q.add_array("whereValues", ["a b", "c"]);
        q.add_flag("async", true);
        assert_eq!(
            q.to_query_string(),
            "async=1&limit=10&whereValues%5B%5D=a%20b&whereValues%5B%5D=c"
        );
    }

    #[test]
    fn optional_values_are_skipped() {
        let mut q = Multimap::new();
        q.add_opt("q", None::<String>);
        q.add_opt("runId", Some("123"));
        assert_eq!(q.to_query_string(), "runId=123");
    }
}
