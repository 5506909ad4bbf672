use crate::{constants::*, Credential};
use async_trait::async_trait;
use httphmac_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `ACQUIA_HMAC_ID`: The key id
/// - `ACQUIA_HMAC_SECRET`: The base64 encoded secret key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(ACQUIA_HMAC_ID), envs.get(ACQUIA_HMAC_SECRET)) {
            (Some(id), Some(secret)) => Ok(Some(Credential {
                id: id.clone(),
                secret: secret.clone(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httphmac_core::{NoopEnv, StaticEnv};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (ACQUIA_HMAC_ID.to_string(), "test_id".to_string()),
            (ACQUIA_HMAC_SECRET.to_string(), "dGVzdF9zZWNyZXQ=".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.id, "test_id");
        assert_eq!(cred.secret, "dGVzdF9zZWNyZXQ=");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(NoopEnv);

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        // Only the id
        let envs = HashMap::from([(ACQUIA_HMAC_ID.to_string(), "test_id".to_string())]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
