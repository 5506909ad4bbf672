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

use http::header::AUTHORIZATION;
use httphmac_core::hash::{base64_decode, verify_hmac_sha256};
use httphmac_core::{Error, Result};
use log::debug;

use crate::request::{create_message, RequestFacts};
use crate::{AuthHeader, Credential};

/// RequestVerifier checks the signature of received requests.
///
/// Timestamps and nonces are not tracked, so a verified request may still
/// be a replay.
#[derive(Debug, Default, Clone)]
pub struct RequestVerifier {
    realm: Option<String>,
}

impl RequestVerifier {
    /// Create a verifier that accepts any realm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept requests signed for `realm`.
    pub fn with_realm(mut self, realm: &str) -> Self {
        self.realm = Some(realm.to_string());
        self
    }

    /// Verify `req` against `credential` and return its parsed header.
    pub fn verify(&self, req: &impl RequestFacts, credential: &Credential) -> Result<AuthHeader> {
        let value = req
            .header(AUTHORIZATION.as_str())?
            .ok_or_else(|| Error::missing_field("request has no authorization header"))?;
        let auth = AuthHeader::parse(value)?;

        let signature = auth
            .signature()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing_field("authorization header has no signature"))?;

        if auth.id() != Some(credential.id.as_str()) {
            return Err(Error::credential_invalid(format!(
                "request is signed by id {:?}, not by the given credential",
                auth.id().unwrap_or_default()
            )));
        }
        if let Some(realm) = &self.realm {
            if auth.realm() != Some(realm.as_str()) {
                return Err(Error::request_invalid(format!(
                    "request realm {:?} is not accepted",
                    auth.realm().unwrap_or_default()
                )));
            }
        }

        let expected = base64_decode(signature).map_err(|e| {
            Error::signature_mismatch("signature is not valid base64").with_source(e)
        })?;
        let message = create_message(req, &auth)?;
        if !verify_hmac_sha256(&credential.secret_key()?, message.as_bytes(), &expected) {
            debug!("signature mismatch for message: {message:?}");
            return Err(Error::signature_mismatch(
                "signature does not match the request",
            ));
        }

        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::InboundRequest;
    use bytes::Bytes;
    use httphmac_core::ErrorKind;
    use test_case::test_case;

    const SECRET: &str = "W5PeGMxSItNerkNFqQMfYiJvH14WzVJMy54CPoTAYoI=";
    const ID: &str = "efdde334-fe7b-11e4-a322-1697f925ec7b";
    const GET_AUTH: &str = r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="d1954337-5319-4821-8427-115542e08d10",version="2.0",headers="",signature="MRlPr/Z1WQY2sMthcaEqETRMw4gPYXlPcTpaLWS2gcc=""#;

    fn credential() -> Credential {
        Credential {
            id: ID.to_string(),
            secret: SECRET.to_string(),
        }
    }

    fn request(authorization: &str) -> http::Request<Bytes> {
        http::Request::get("/v1.0/task-status/133?limit=10")
            .header("Host", "example.acquiapipet.net")
            .header("X-Authorization-Timestamp", "1432075982")
            .header("Authorization", authorization)
            .body(Bytes::new())
            .unwrap()
    }

    #[test]
    fn test_verify() -> Result<()> {
        let req = request(GET_AUTH);
        let auth = RequestVerifier::new()
            .with_realm("Pipet service")
            .verify(&InboundRequest::new(&req)?, &credential())?;

        assert_eq!(auth.nonce(), Some("d1954337-5319-4821-8427-115542e08d10"));
        Ok(())
    }

    #[test]
    fn test_verify_post() -> Result<()> {
        let req = http::Request::post("/v1.0/task")
            .header("Host", "example.acquiapipet.net")
            .header("X-Authorization-Timestamp", "1432075982")
            .header("Content-Type", "application/json")
            .header("X-Custom-Signer1", "custom-1")
            .header("X-Custom-Signer2", "custom-2")
            .header(
                "Authorization",
                r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="d1954337-5319-4821-8427-115542e08d10",version="2.0",headers="X-Custom-Signer1;X-Custom-Signer2",signature="cukuoh4rfezX6guHI1nm5DVygQIPftKBTEdEjG1ZO70=""#,
            )
            .body(Bytes::from_static(
                br#"{"method":"hi.bob","params":["5","4","8"]}"#,
            ))?;

        RequestVerifier::new().verify(&InboundRequest::new(&req)?, &credential())?;
        Ok(())
    }

    #[test]
    fn test_verify_without_authorization() -> Result<()> {
        let req = http::Request::get("/")
            .header("Host", "example.com")
            .body(Bytes::new())?;
        let err = RequestVerifier::new()
            .verify(&InboundRequest::new(&req)?, &credential())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.is_unauthenticated());
        Ok(())
    }

    #[test_case(r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="n",version="2.0""#, ErrorKind::MissingField; "no signature")]
    #[test_case(r#"acquia-http-hmac realm="Pipet service",id="other",nonce="n",version="2.0",signature="c2ln""#, ErrorKind::CredentialInvalid; "other id")]
    #[test_case(r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="n",version="2.0",signature="not base64!""#, ErrorKind::SignatureMismatch; "undecodable signature")]
    #[test_case(r#"acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="other",version="2.0",signature="MRlPr/Z1WQY2sMthcaEqETRMw4gPYXlPcTpaLWS2gcc=""#, ErrorKind::SignatureMismatch; "other nonce")]
    #[test_case(r#"acquia-http-hmac realm="Pipet service,id="x""#, ErrorKind::MalformedHeader; "malformed")]
    fn test_verify_rejects(authorization: &str, kind: ErrorKind) -> Result<()> {
        let req = request(authorization);
        let err = RequestVerifier::new()
            .verify(&InboundRequest::new(&req)?, &credential())
            .unwrap_err();

        assert_eq!(err.kind(), kind);
        Ok(())
    }

    #[test]
    fn test_verify_realm_restriction() -> Result<()> {
        let req = request(GET_AUTH);
        let err = RequestVerifier::new()
            .with_realm("Other service")
            .verify(&InboundRequest::new(&req)?, &credential())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        Ok(())
    }

    #[test]
    fn test_verify_tampered_path() -> Result<()> {
        let req = http::Request::get("/v1.0/task-status/134?limit=10")
            .header("Host", "example.acquiapipet.net")
            .header("X-Authorization-Timestamp", "1432075982")
            .header("Authorization", GET_AUTH)
            .body(Bytes::new())?;
        let err = RequestVerifier::new()
            .verify(&InboundRequest::new(&req)?, &credential())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
        Ok(())
    }
}
