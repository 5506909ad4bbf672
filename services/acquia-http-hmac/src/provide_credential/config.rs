use crate::{Config, Credential};
use async_trait::async_trait;
use httphmac_core::{Context, ProvideCredential};
use std::sync::Arc;

/// ConfigCredentialProvider loads credential from static config.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> httphmac_core::Result<Option<Self::Credential>> {
        if let (Some(id), Some(secret)) = (&self.config.id, &self.config.secret) {
            Ok(Some(Credential {
                id: id.clone(),
                secret: secret.clone(),
            }))
        } else {
            Ok(None)
        }
    }
}
