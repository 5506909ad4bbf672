use httphmac_core::hash::base64_decode;
use httphmac_core::utils::Redact;
use httphmac_core::{Error, Result, SigningCredential};
use std::fmt::{Debug, Formatter};

/// Credential that holds the id and secret key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Public id of the key pair, sent in the `id` parameter.
    pub id: String,
    /// Base64 encoded secret key, as issued with the id.
    pub secret: String,
}

impl Credential {
    /// Decode the secret into the raw HMAC key.
    pub fn secret_key(&self) -> Result<Vec<u8>> {
        base64_decode(&self.secret).map_err(|e| {
            Error::credential_invalid(format!(
                "secret of credential {} is not valid base64",
                Redact::from(&self.id)
            ))
            .with_source(e)
        })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("id", &Redact::from(&self.id))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.secret.is_empty()
    }
}
