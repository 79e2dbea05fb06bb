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

//! Client methods for file uploads and downloads

use crate::sapi::builders::{
    AddFileTag, AddFileTagBldr, DeleteFile, DeleteFileBldr, DeleteFileTag, DeleteFileTagBldr,
    GetFile, GetFileBldr, ListFiles, ListFilesBldr, PrepareFileUpload, PrepareFileUploadBldr,
};
use crate::sapi::client::StorageClient;
use crate::sapi::error::{Error, NetworkError, ValidationErr};
use crate::sapi::response_traits::HasFileInfo;
use crate::sapi::types::{FileInfo, FileUploadOptions, SlicedManifest, StorageApi};
use bytes::Bytes;
use futures_util::StreamExt;
use http::Method;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tokio::io::AsyncWriteExt;

impl StorageClient {
    /// Registers a new file and returns its upload parameters.
    ///
    /// Most callers want [`upload_file`](Self::upload_file), which also
    /// sends the content.
    pub fn prepare_file_upload(&self, options: FileUploadOptions) -> PrepareFileUploadBldr {
        PrepareFileUpload::builder()
            .client(self.clone())
            .options(options)
    }

    pub fn list_files(&self) -> ListFilesBldr {
        ListFiles::builder().client(self.clone())
    }

    pub fn get_file(&self, file_id: u64) -> GetFileBldr {
        GetFile::builder().client(self.clone()).file_id(file_id)
    }

    pub fn delete_file(&self, file_id: u64) -> DeleteFileBldr {
        DeleteFile::builder().client(self.clone()).file_id(file_id)
    }

    pub fn add_file_tag<S: Into<String>>(&self, file_id: u64, tag: S) -> AddFileTagBldr {
        AddFileTag::builder()
            .client(self.clone())
            .file_id(file_id)
            .tag(tag)
    }

    pub fn delete_file_tag<S: Into<String>>(&self, file_id: u64, tag: S) -> DeleteFileTagBldr {
        DeleteFileTag::builder()
            .client(self.clone())
            .file_id(file_id)
            .tag(tag)
    }

    /// Uploads a local file and returns the id of the new storage file.
    ///
    /// The file name defaults to the last component of `path`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::FileUploadOptions;
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let options = FileUploadOptions::builder().tags(vec!["raw".into()]).build();
    /// let file_id = client.upload_file("data/users.csv", options).await?;
    /// println!("uploaded as file {file_id}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_file<P: AsRef<Path>>(
        &self,
        path: P,
        mut options: FileUploadOptions,
    ) -> Result<u64, Error> {
        let path = path.as_ref();
        if options.file_name.is_none() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| ValidationErr::InvalidArgument {
                    name: "path",
                    reason: format!("{} has no file name", path.display()),
                })?;
            options.file_name = Some(name);
        }
        let content = Bytes::from(tokio::fs::read(path).await?);
        self.upload_content(content, options).await
    }

    /// Uploads in-memory content under the given file name and returns the
    /// id of the new storage file.
    pub async fn upload_bytes<S: Into<String>>(
        &self,
        name: S,
        content: Bytes,
        mut options: FileUploadOptions,
    ) -> Result<u64, Error> {
        options.file_name = Some(name.into());
        self.upload_content(content, options).await
    }

    async fn upload_content(
        &self,
        content: Bytes,
        mut options: FileUploadOptions,
    ) -> Result<u64, Error> {
        let file_name = options.file_name.clone().unwrap_or_default();
        let size = content.len() as u64;
        options.size_bytes = Some(size);

        let prepared = self.prepare_file_upload(options).build().send().await?;
        let file = prepared.file_info()?;
        let (url, fields) = upload_target(&file)?;

        log::debug!("uploading {size} bytes of '{file_name}' as file {}", file.id);
        self.send_with_retry(&Method::POST, &url, || {
            let mut form = Form::new();
            for (key, value) in &fields {
                form = form.text(key.clone(), value.clone());
            }
            let part = Part::stream_with_length(Body::from(content.clone()), size)
                .file_name(file_name.clone());
            self.http_client().post(&url).multipart(form.part("file", part))
        })
        .await?;

        Ok(file.id)
    }

    /// Downloads a file to `destination` and returns its description.
    ///
    /// Sliced files are reassembled in manifest order.
    pub async fn download_file<P: AsRef<Path>>(
        &self,
        file_id: u64,
        destination: P,
    ) -> Result<FileInfo, Error> {
        let file = self
            .get_file(file_id)
            .federation_token(true)
            .build()
            .send()
            .await?
            .file_info()?;

        let mut out = tokio::fs::File::create(destination.as_ref()).await?;
        self.write_file_content(&file, &mut out).await?;
        out.flush().await?;
        Ok(file)
    }

    /// Appends the content of a storage file to `out`.
    pub(crate) async fn write_file_content(
        &self,
        file: &FileInfo,
        out: &mut tokio::fs::File,
    ) -> Result<(), Error> {
        if file.url.is_empty() {
            return Err(ValidationErr::MissingArgument("url").into());
        }
        if !file.is_sliced {
            return self.stream_to(&file.url, out).await;
        }

        let manifest = self.download(&file.url).await?;
        let manifest = manifest.bytes().await.map_err(NetworkError::ReqwestError)?;
        let manifest: SlicedManifest = serde_json::from_slice(&manifest)?;
        log::debug!(
            "file {} has {} slices",
            file.id,
            manifest.entries.len()
        );
        for entry in &manifest.entries {
            check_slice_url(&entry.url)?;
        }
        for entry in &manifest.entries {
            self.stream_to(&entry.url, out).await?;
        }
        Ok(())
    }

    async fn stream_to(&self, url: &str, out: &mut tokio::fs::File) -> Result<(), Error> {
        let resp = self.download(url).await?;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(NetworkError::ReqwestError)?;
            out.write_all(&chunk).await?;
        }
        Ok(())
    }
}

/// Splits prepared upload params into the target URL and the form fields
/// that go before the content.
fn upload_target(file: &FileInfo) -> Result<(String, Vec<(String, String)>), ValidationErr> {
    let params = file.upload_params.as_ref().ok_or_else(|| {
        ValidationErr::InvalidUploadParams(format!("file {} has no upload params", file.id))
    })?;
    let url = params
        .get("url")
        .and_then(|v| v.as_str())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            ValidationErr::InvalidUploadParams(format!("file {} has no upload url", file.id))
        })?
        .to_string();

    let fields = params
        .iter()
        .filter(|(key, _)| key.as_str() != "url")
        .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
        .collect();
    Ok((url, fields))
}

fn check_slice_url(url: &str) -> Result<(), ValidationErr> {
    let parsed = url::Url::parse(url).map_err(|e| ValidationErr::InvalidArgument {
        name: "url",
        reason: format!("invalid slice url '{url}': {e}"),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ValidationErr::InvalidArgument {
            name: "url",
            reason: format!("unsupported slice url scheme '{scheme}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(params: serde_json::Value) -> FileInfo {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "data.csv",
            "uploadParams": params,
        }))
        .unwrap()
    }

    #[test]
    fn upload_fields_keep_server_order() {
        let file = prepared(serde_json::json!({
            "key": "exp-15/data.csv",
            "url": "https://bucket.example.com/",
            "acl": "private",
            "x-amz-server-side-encryption": "AES256",
            "size": 42,
        }));
        let (url, fields) = upload_target(&file).unwrap();
        assert_eq!(url, "https://bucket.example.com/");
        let keys: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["key", "acl", "x-amz-server-side-encryption"]);
    }

    #[test]
    fn upload_requires_url() {
        let file = prepared(serde_json::json!({"key": "exp-15/data.csv"}));
        assert!(matches!(
            upload_target(&file),
            Err(ValidationErr::InvalidUploadParams(_))
        ));
        let no_params = FileInfo::default();
        assert!(upload_target(&no_params).is_err());
    }

    #[test]
    fn slice_urls_must_be_http() {
        assert!(check_slice_url("https://bucket.s3.amazonaws.com/exp/part0000").is_ok());
        assert!(check_slice_url("http://127.0.0.1:9000/part1").is_ok());
        assert!(check_slice_url("s3://bucket/exp/part0000").is_err());
        assert!(check_slice_url("not a url").is_err());
    }
}
