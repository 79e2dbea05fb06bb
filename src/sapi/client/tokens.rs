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

//! Client methods for storage tokens

use crate::sapi::builders::{
    CreateToken, CreateTokenBldr, DropToken, DropTokenBldr, GetToken, GetTokenBldr, ListTokens,
    ListTokensBldr, RefreshToken, RefreshTokenBldr, ShareToken, ShareTokenBldr, VerifyToken,
    VerifyTokenBldr,
};
use crate::sapi::client::StorageClient;
use crate::sapi::types::TokenCreateOptions;

impl StorageClient {
    /// Describes the token this client authenticates with.
    pub fn verify_token(&self) -> VerifyTokenBldr {
        VerifyToken::builder().client(self.clone())
    }

    pub fn list_tokens(&self) -> ListTokensBldr {
        ListTokens::builder().client(self.clone())
    }

    pub fn get_token<S: Into<String>>(&self, token_id: S) -> GetTokenBldr {
        GetToken::builder().client(self.clone()).token_id(token_id)
    }

    pub fn create_token(&self, options: TokenCreateOptions) -> CreateTokenBldr {
        CreateToken::builder().client(self.clone()).options(options)
    }

    pub fn refresh_token<S: Into<String>>(&self, token_id: S) -> RefreshTokenBldr {
        RefreshToken::builder().client(self.clone()).token_id(token_id)
    }

    pub fn drop_token<S: Into<String>>(&self, token_id: S) -> DropTokenBldr {
        DropToken::builder().client(self.clone()).token_id(token_id)
    }

    pub fn share_token<S1, S2, S3>(
        &self,
        token_id: S1,
        recipient_email: S2,
        message: S3,
    ) -> ShareTokenBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        ShareToken::builder()
            .client(self.clone())
            .token_id(token_id)
            .recipient_email(recipient_email)
            .message(message)
    }
}
