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

//! Acquia HTTP HMAC support with convenience APIs
//!
//! This module provides acquia-http-hmac signing and verification along
//! with convenience functions for common use cases.

// Re-export all acquia-http-hmac types
pub use httphmac_acquia::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Context, Signer};
#[cfg(feature = "default-context")]
use std::sync::Arc;

/// Default acquia-http-hmac Signer type with commonly used components
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default acquia-http-hmac signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (process environment)
/// - Default credential provider (reads `ACQUIA_HMAC_ID` and `ACQUIA_HMAC_SECRET`)
/// - Request signer for the specified realm
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> httphmac::Result<()> {
/// let signer = httphmac::acquia::default_signer("Pipet service");
///
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri("https://example.acquiapipet.net/v1.0/task-status/133?limit=10")
///     .body(())?
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req, &[]).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(realm: &str) -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new(realm);
    Signer::new(ctx, provider, signer)
}

/// Create a signer whose realm, version and credential come from [`Config`].
///
/// Fields left unset in `config` are read from the environment of `ctx`.
/// Fails with a config error when no realm is available.
#[cfg(feature = "default-context")]
pub fn signer_from_config(ctx: Context, config: Config) -> crate::Result<DefaultSigner> {
    let config = config.from_env(&ctx);
    let realm = config
        .realm
        .clone()
        .ok_or_else(|| crate::Error::config_invalid("acquia http hmac realm is not set"))?;
    let signer = RequestSigner::new(&realm).with_version(config.version());
    let provider = DefaultCredentialProvider::with_config(Arc::new(config));

    Ok(Signer::new(ctx, provider, signer))
}
