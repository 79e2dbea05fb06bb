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

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasJobResult, HasStorageFields, HasToken};
use crate::sapi::types::{StorageRequest, Token};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of `GET tokens/verify`
#[derive(Clone, Debug)]
pub struct VerifyTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct ListTokensResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListTokensResponse {
    pub fn tokens(&self) -> Result<Vec<Token>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct GetTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of token creation, carrying the new secret
#[derive(Clone, Debug)]
pub struct CreateTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateTokenResponse {
    pub fn token(&self) -> Result<Token, ValidationErr> {
        self.job_results()
    }
}

/// Response of a token refresh, carrying the rotated secret
#[derive(Clone, Debug)]
pub struct RefreshTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DropTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct ShareTokenResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_storage_response!(
    VerifyTokenResponse,
    ListTokensResponse,
    GetTokenResponse,
    CreateTokenResponse,
    RefreshTokenResponse,
    DropTokenResponse,
    ShareTokenResponse,
);
impl_has_storage_fields!(
    VerifyTokenResponse,
    ListTokensResponse,
    GetTokenResponse,
    CreateTokenResponse,
    RefreshTokenResponse,
    DropTokenResponse,
    ShareTokenResponse,
);

impl HasToken for VerifyTokenResponse {}
impl HasToken for GetTokenResponse {}
impl HasToken for RefreshTokenResponse {}
impl HasJobResult for CreateTokenResponse {}
