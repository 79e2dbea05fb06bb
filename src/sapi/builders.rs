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

//! Argument builders for [StorageClient](crate::sapi::client::StorageClient) APIs

// Bucket operations
mod bucket_exists;
mod create_bucket;
mod drop_bucket;
mod get_bucket;
mod list_buckets;
mod update_bucket;

pub use bucket_exists::{BucketExists, BucketExistsBldr};
pub use create_bucket::{CreateBucket, CreateBucketBldr};
pub use drop_bucket::{DropBucket, DropBucketBldr};
pub use get_bucket::{GetBucket, GetBucketBldr};
pub use list_buckets::{ListBuckets, ListBucketsBldr};
pub use update_bucket::{UpdateBucket, UpdateBucketBldr};

// Component operations
mod add_configuration;
mod add_configuration_row;
mod component_common;
mod delete_configuration;
mod delete_configuration_row;
mod get_configuration;
mod list_component_configurations;
mod list_components;
mod list_configuration_rows;
mod list_configuration_versions;
mod rollback_configuration;
mod update_configuration;
mod update_configuration_row;
mod update_configuration_state;

pub use add_configuration::{AddConfiguration, AddConfigurationBldr};
pub use add_configuration_row::{AddConfigurationRow, AddConfigurationRowBldr};
pub use delete_configuration::{DeleteConfiguration, DeleteConfigurationBldr};
pub use delete_configuration_row::{DeleteConfigurationRow, DeleteConfigurationRowBldr};
pub use get_configuration::{GetConfiguration, GetConfigurationBldr};
pub use list_component_configurations::{
    ListComponentConfigurations, ListComponentConfigurationsBldr,
};
pub use list_components::{ListComponents, ListComponentsBldr};
pub use list_configuration_rows::{ListConfigurationRows, ListConfigurationRowsBldr};
pub use list_configuration_versions::{ListConfigurationVersions, ListConfigurationVersionsBldr};
pub use rollback_configuration::{RollbackConfiguration, RollbackConfigurationBldr};
pub use update_configuration::{UpdateConfiguration, UpdateConfigurationBldr};
pub use update_configuration_row::{UpdateConfigurationRow, UpdateConfigurationRowBldr};
pub use update_configuration_state::{UpdateConfigurationState, UpdateConfigurationStateBldr};

// Dev branch operations
mod create_dev_branch;
mod delete_dev_branch;
mod dev_branch_common;
mod get_dev_branch;
mod list_dev_branches;
mod update_dev_branch;

pub use create_dev_branch::{CreateDevBranch, CreateDevBranchBldr};
pub use delete_dev_branch::{DeleteDevBranch, DeleteDevBranchBldr};
pub use get_dev_branch::{GetDevBranch, GetDevBranchBldr};
pub use list_dev_branches::{ListDevBranches, ListDevBranchesBldr};
pub use update_dev_branch::{UpdateDevBranch, UpdateDevBranchBldr};

// Event operations
mod create_event;
mod get_event;
mod list_events;

pub use create_event::{CreateEvent, CreateEventBldr};
pub use get_event::{GetEvent, GetEventBldr};
pub use list_events::{ListEvents, ListEventsBldr};

// File operations
mod add_file_tag;
mod delete_file;
mod delete_file_tag;
mod get_file;
mod list_files;
mod prepare_file_upload;

pub use add_file_tag::{AddFileTag, AddFileTagBldr};
pub use delete_file::{DeleteFile, DeleteFileBldr};
pub use delete_file_tag::{DeleteFileTag, DeleteFileTagBldr};
pub use get_file::{GetFile, GetFileBldr};
pub use list_files::{ListFiles, ListFilesBldr};
pub use prepare_file_upload::{PrepareFileUpload, PrepareFileUploadBldr};

// Job operations
mod get_job;

pub use get_job::{GetJob, GetJobBldr};

// Metadata operations
mod delete_metadata;
mod list_metadata;
mod metadata_common;
mod post_metadata;

pub use delete_metadata::{DeleteMetadata, DeleteMetadataBldr};
pub use list_metadata::{ListMetadata, ListMetadataBldr};
pub use post_metadata::{PostMetadata, PostMetadataBldr};

// Table operations
mod add_table_column;
mod create_alias_table;
mod create_table_async;
mod create_table_definition;
mod create_table_from_snapshot;
mod create_table_from_timestamp;
mod create_table_primary_key;
mod create_table_snapshot;
mod create_table_with_configuration;
mod delete_table_column;
mod delete_table_rows;
mod drop_table;
mod export_table_async;
mod get_table;
mod get_table_data_preview;
mod list_table_snapshots;
mod list_tables;
mod remove_table_primary_key;
mod table_common;
mod table_exists;
mod update_table;
mod write_table_async;

pub use add_table_column::{AddTableColumn, AddTableColumnBldr};
pub use create_alias_table::{CreateAliasTable, CreateAliasTableBldr};
pub use create_table_async::{CreateTableAsync, CreateTableAsyncBldr};
pub use create_table_definition::{CreateTableDefinition, CreateTableDefinitionBldr};
pub use create_table_from_snapshot::{CreateTableFromSnapshot, CreateTableFromSnapshotBldr};
pub use create_table_from_timestamp::{CreateTableFromTimestamp, CreateTableFromTimestampBldr};
pub use create_table_primary_key::{CreateTablePrimaryKey, CreateTablePrimaryKeyBldr};
pub use create_table_snapshot::{CreateTableSnapshot, CreateTableSnapshotBldr};
pub use create_table_with_configuration::{
    CreateTableWithConfiguration, CreateTableWithConfigurationBldr,
};
pub use delete_table_column::{DeleteTableColumn, DeleteTableColumnBldr};
pub use delete_table_rows::{DeleteTableRows, DeleteTableRowsBldr};
pub use drop_table::{DropTable, DropTableBldr};
pub use export_table_async::{ExportTableAsync, ExportTableAsyncBldr};
pub use get_table::{GetTable, GetTableBldr};
pub use get_table_data_preview::{GetTableDataPreview, GetTableDataPreviewBldr};
pub use list_table_snapshots::{ListTableSnapshots, ListTableSnapshotsBldr};
pub use list_tables::{ListTables, ListTablesBldr};
pub use remove_table_primary_key::{RemoveTablePrimaryKey, RemoveTablePrimaryKeyBldr};
pub use table_exists::{TableExists, TableExistsBldr};
pub use update_table::{UpdateTable, UpdateTableBldr};
pub use write_table_async::{WriteTableAsync, WriteTableAsyncBldr};

// Token operations
mod create_token;
mod drop_token;
mod get_token;
mod list_tokens;
mod refresh_token;
mod share_token;
mod token_common;
mod verify_token;

pub use create_token::{CreateToken, CreateTokenBldr};
pub use drop_token::{DropToken, DropTokenBldr};
pub use get_token::{GetToken, GetTokenBldr};
pub use list_tokens::{ListTokens, ListTokensBldr};
pub use refresh_token::{RefreshToken, RefreshTokenBldr};
pub use share_token::{ShareToken, ShareTokenBldr};
pub use verify_token::{VerifyToken, VerifyTokenBldr};

// Workspace operations
mod create_workspace;
mod delete_workspace;
mod get_workspace;
mod list_workspaces;
mod load_workspace;
mod load_workspace_clone;
mod reset_workspace_password;
mod workspace_common;

pub use create_workspace::{CreateWorkspace, CreateWorkspaceBldr};
pub use delete_workspace::{DeleteWorkspace, DeleteWorkspaceBldr};
pub use get_workspace::{GetWorkspace, GetWorkspaceBldr};
pub use list_workspaces::{ListWorkspaces, ListWorkspacesBldr};
pub use load_workspace::{LoadWorkspace, LoadWorkspaceBldr};
pub use load_workspace_clone::{LoadWorkspaceClone, LoadWorkspaceCloneBldr};
pub use reset_workspace_password::{ResetWorkspacePassword, ResetWorkspacePasswordBldr};
