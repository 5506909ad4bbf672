//! Sign and verify HMAC authenticated HTTP requests.
//!
//! This crate re-exports [`httphmac_core`] together with the signing
//! schemes enabled by features:
//!
//! - `acquia` (default): the `acquia-http-hmac` scheme under [`acquia`].
//! - `default-context` (default): [`default_context`] and the
//!   `default_signer` helpers.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> httphmac::Result<()> {
//! let signer = httphmac::acquia::default_signer("my-realm");
//!
//! let mut req = http::Request::get("https://api.example.com/v1/items")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut req, &[]).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use httphmac_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "acquia")]
pub mod acquia;
