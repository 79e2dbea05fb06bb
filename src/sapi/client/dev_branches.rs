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

//! Client methods for development branches

use crate::sapi::builders::{
    CreateDevBranch, CreateDevBranchBldr, DeleteDevBranch, DeleteDevBranchBldr, GetDevBranch,
    GetDevBranchBldr, ListDevBranches, ListDevBranchesBldr, UpdateDevBranch, UpdateDevBranchBldr,
};
use crate::sapi::client::StorageClient;

impl StorageClient {
    /// Creates a dev branch and waits for it to be ready.
    ///
    /// Use [`for_branch`](Self::for_branch) with the new id to work inside
    /// the branch.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::StorageApi;
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let branch = client.create_branch("feature-x").build().send().await?.branch()?;
    /// let scoped = client.for_branch(branch.id);
    /// let buckets = scoped.list_buckets().build().send().await?.buckets()?;
    /// println!("{} buckets in branch {}", buckets.len(), branch.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_branch<S: Into<String>>(&self, name: S) -> CreateDevBranchBldr {
        CreateDevBranch::builder().client(self.clone()).name(name)
    }

    pub fn list_branches(&self) -> ListDevBranchesBldr {
        ListDevBranches::builder().client(self.clone())
    }

    pub fn get_branch(&self, branch_id: u64) -> GetDevBranchBldr {
        GetDevBranch::builder()
            .client(self.clone())
            .branch_id(branch_id)
    }

    pub fn update_branch(&self, branch_id: u64) -> UpdateDevBranchBldr {
        UpdateDevBranch::builder()
            .client(self.clone())
            .branch_id(branch_id)
    }

    pub fn delete_branch(&self, branch_id: u64) -> DeleteDevBranchBldr {
        DeleteDevBranch::builder()
            .client(self.clone())
            .branch_id(branch_id)
    }
}
