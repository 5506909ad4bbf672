use crate::constants::*;
use crate::credential::Credential;
use crate::request::{create_message, OutboundRequest};
use crate::AuthHeader;
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderName, HeaderValue};
use httphmac_core::hash::base64_hmac_sha256;
use httphmac_core::time::{format_unix_timestamp, now, DateTime};
use httphmac_core::{Context, Error, Result, SignRequest, SigningRequest};
use log::debug;
use std::str::FromStr;

/// RequestSigner for acquia http hmac.
#[derive(Debug)]
pub struct RequestSigner {
    realm: String,
    version: String,
    signed_headers: Vec<String>,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer for `realm`.
    pub fn new(realm: &str) -> Self {
        Self {
            realm: realm.to_string(),
            version: DEFAULT_VERSION.to_string(),
            signed_headers: Vec::new(),
            time: None,
            nonce: None,
        }
    }

    /// Set the protocol version written into the authorization header.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Sign these request headers in addition to the fixed ones.
    ///
    /// Names are kept in the given order in the `headers` parameter.
    /// Headers absent from a request are left out of its message.
    pub fn with_signed_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signed_headers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    fn get_nonce(&self) -> String {
        self.nonce.clone().unwrap_or_else(new_nonce)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available to sign the request",
            ));
        };

        let key = cred.secret_key()?;
        let timestamp_name = HeaderName::from_str(X_AUTHORIZATION_TIMESTAMP)?;
        let timestamp: HeaderValue = format_unix_timestamp(self.get_time()).parse()?;

        let mut signing = SigningRequest::build(req)?;
        let previous = signing.headers.insert(timestamp_name.clone(), timestamp);

        match self.build_authorization(&signing, body, cred, &key) {
            Ok(value) => {
                signing.headers.insert(AUTHORIZATION, value);
                signing.apply(req)
            }
            Err(err) => {
                // Hand the request back as the caller built it.
                match previous {
                    Some(v) => signing.headers.insert(timestamp_name, v),
                    None => signing.headers.remove(timestamp_name),
                };
                signing.apply(req)?;
                Err(err)
            }
        }
    }
}

impl RequestSigner {
    fn build_authorization(
        &self,
        signing: &SigningRequest,
        body: &[u8],
        cred: &Credential,
        key: &[u8],
    ) -> Result<HeaderValue> {
        let auth = AuthHeader::new(&self.realm, &cred.id, self.get_nonce(), &self.version)
            .with_signed_header_names(self.signed_headers.iter().cloned());
        let message = create_message(&OutboundRequest::new(signing, body), &auth)?;
        let signature = base64_hmac_sha256(key, message.as_bytes());
        debug!("calculated signature: {signature}");

        let mut value: HeaderValue = auth.with_signature(signature).to_header_value()?.parse()?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Random version 4 UUID in its hyphenated form.
fn new_nonce() -> String {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let s = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &s[..8],
        &s[8..12],
        &s[12..16],
        &s[16..20],
        &s[20..]
    )
}
