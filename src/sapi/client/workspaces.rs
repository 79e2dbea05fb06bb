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

//! Client methods for workspaces

use crate::sapi::builders::{
    CreateWorkspace, CreateWorkspaceBldr, DeleteWorkspace, DeleteWorkspaceBldr, GetWorkspace,
    GetWorkspaceBldr, ListWorkspaces, ListWorkspacesBldr, LoadWorkspace, LoadWorkspaceBldr,
    LoadWorkspaceClone, LoadWorkspaceCloneBldr, ResetWorkspacePassword,
    ResetWorkspacePasswordBldr,
};
use crate::sapi::client::StorageClient;
use crate::sapi::types::WorkspaceLoadInput;

impl StorageClient {
    /// Provisions a workspace and waits until it is ready.
    ///
    /// The returned workspace carries the connection credentials; the
    /// password is not retrievable later.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::{Backend, StorageApi};
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = client.create_workspace().backend(Backend::Snowflake).build().send().await?;
    /// let workspace = resp.workspace()?;
    /// println!("{} on {}", workspace.id, workspace.connection.host);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_workspace(&self) -> CreateWorkspaceBldr {
        CreateWorkspace::builder().client(self.clone())
    }

    pub fn list_workspaces(&self) -> ListWorkspacesBldr {
        ListWorkspaces::builder().client(self.clone())
    }

    pub fn get_workspace(&self, workspace_id: u64) -> GetWorkspaceBldr {
        GetWorkspace::builder()
            .client(self.clone())
            .workspace_id(workspace_id)
    }

    pub fn delete_workspace(&self, workspace_id: u64) -> DeleteWorkspaceBldr {
        DeleteWorkspace::builder()
            .client(self.clone())
            .workspace_id(workspace_id)
    }

    /// Copies table data into the workspace.
    pub fn load_workspace(
        &self,
        workspace_id: u64,
        inputs: Vec<WorkspaceLoadInput>,
    ) -> LoadWorkspaceBldr {
        LoadWorkspace::builder()
            .client(self.clone())
            .workspace_id(workspace_id)
            .inputs(inputs)
    }

    /// Clones tables into the workspace without copying data, where the
    /// backend supports it.
    pub fn load_workspace_clone(
        &self,
        workspace_id: u64,
        inputs: Vec<WorkspaceLoadInput>,
    ) -> LoadWorkspaceCloneBldr {
        LoadWorkspaceClone::builder()
            .client(self.clone())
            .workspace_id(workspace_id)
            .inputs(inputs)
    }

    pub fn reset_workspace_password(&self, workspace_id: u64) -> ResetWorkspacePasswordBldr {
        ResetWorkspacePassword::builder()
            .client(self.clone())
            .workspace_id(workspace_id)
    }
}
