//! Acquia HTTP HMAC signing implementation for httphmac.
//!
//! This crate signs and verifies HTTP requests with the `acquia-http-hmac`
//! scheme.
//!
//! ## Overview
//!
//! A request is reduced to a canonical message: method, host, path, raw
//! query, the authorization parameters, any extra signed headers, the
//! `X-Authorization-Timestamp` value and, for requests that carry one, a
//! hash of the body. The message is signed with HMAC-SHA256 keyed by the
//! base64 decoded secret and the result travels in the `Authorization`
//! header:
//!
//! ```text
//! acquia-http-hmac realm="Pipet service",id="efdde334-fe7b-11e4-a322-1697f925ec7b",nonce="d1954337-5319-4821-8427-115542e08d10",version="2.0",signature="MRlPr/Z1WQY2sMthcaEqETRMw4gPYXlPcTpaLWS2gcc="
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use httphmac_acquia::{DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};
//! use httphmac_core::{Context, OsEnv, Result, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     let loader = DefaultCredentialProvider::new()
//!         .push_front(StaticCredentialProvider::new("your-id", "eW91ci1zZWNyZXQ="));
//!     let builder = RequestSigner::new("my-realm").with_signed_headers(["X-Request-Id"]);
//!     let signer = Signer::new(ctx, loader, builder);
//!
//!     let body = br#"{"hello":"world"}"#;
//!     let mut req = http::Request::post("https://api.example.com/v1/items")
//!         .header("Content-Type", "application/json")
//!         .header("X-Request-Id", "42")
//!         .body(())?
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut req, body).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Verification
//!
//! ```no_run
//! use bytes::Bytes;
//! use httphmac_acquia::{Credential, InboundRequest, RequestVerifier};
//!
//! fn check(req: &http::Request<Bytes>) -> httphmac_core::Result<()> {
//!     let credential = Credential {
//!         id: "your-id".to_string(),
//!         secret: "eW91ci1zZWNyZXQ=".to_string(),
//!     };
//!
//!     let auth = RequestVerifier::new()
//!         .with_realm("my-realm")
//!         .verify(&InboundRequest::new(req)?, &credential)?;
//!     log::info!("request signed with nonce {:?}", auth.nonce());
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export ACQUIA_HMAC_ID=your-id
//! export ACQUIA_HMAC_SECRET=eW91ci1zZWNyZXQ=
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{
    ACQUIA_HMAC_ID, ACQUIA_HMAC_REALM, ACQUIA_HMAC_SECRET, ACQUIA_HMAC_VERSION, DEFAULT_VERSION,
    SCHEME, X_AUTHORIZATION_TIMESTAMP,
};

mod auth_header;
pub use auth_header::AuthHeader;

mod message;
pub use message::{build_message, encode, RequestTarget};

mod request;
pub use request::{create_message, InboundRequest, OutboundRequest, RequestFacts};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod verify;
pub use verify::RequestVerifier;

mod provide_credential;
pub use provide_credential::*;
