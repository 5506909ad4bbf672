// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::Credential;
use async_trait::async_trait;
use httphmac_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider hands out a fixed id and secret.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    id: String,
    secret: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with id and base64 encoded secret.
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_string(),
            secret: secret.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            id: self.id.clone(),
            secret: self.secret.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httphmac_core::NoopEnv;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(NoopEnv);

        let provider = StaticCredentialProvider::new("test_id", "dGVzdF9zZWNyZXQ=");
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.id, "test_id");
        assert_eq!(cred.secret, "dGVzdF9zZWNyZXQ=");

        Ok(())
    }
}
