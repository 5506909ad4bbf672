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

//! The structured `Authorization` header of acquia http hmac.

use std::fmt::Write;
use std::str::FromStr;

use httphmac_core::{Error, Result};
use log::debug;

use crate::constants::SCHEME;

/// AuthHeader carries the signing metadata of a request.
///
/// ## Format
///
/// ```text
/// acquia-http-hmac realm="<realm>",id="<id>",nonce="<nonce>",version="<version>"[,headers="<a>;<b>"][,signature="<signature>"]
/// ```
///
/// A parsed header may lack any field: parsing only fails on syntax errors.
/// `realm`, `id`, `nonce` and `version` are checked when the header is
/// serialized or folded into a canonical message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthHeader {
    realm: Option<String>,
    id: Option<String>,
    nonce: Option<String>,
    version: Option<String>,
    signed_header_names: Vec<String>,
    signature: Option<String>,
}

impl AuthHeader {
    /// Create a header with all required fields.
    pub fn new(
        realm: impl Into<String>,
        id: impl Into<String>,
        nonce: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            realm: Some(realm.into()),
            id: Some(id.into()),
            nonce: Some(nonce.into()),
            version: Some(version.into()),
            signed_header_names: Vec::new(),
            signature: None,
        }
    }

    /// Set the names of the extra request headers covered by the signature.
    ///
    /// The order is kept as given.
    pub fn with_signed_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signed_header_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a computed signature.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Tenant or namespace of the credential.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// Credential id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Per request nonce.
    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// Protocol version.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Names of the extra signed headers, in the order they were listed.
    pub fn signed_header_names(&self) -> &[String] {
        &self.signed_header_names
    }

    /// Signature carried by this header, if any.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub(crate) fn require_realm(&self) -> Result<&str> {
        required(&self.realm, "realm")
    }

    pub(crate) fn require_id(&self) -> Result<&str> {
        required(&self.id, "id")
    }

    pub(crate) fn require_nonce(&self) -> Result<&str> {
        required(&self.nonce, "nonce")
    }

    pub(crate) fn require_version(&self) -> Result<&str> {
        required(&self.version, "version")
    }

    /// Parse a full `Authorization` header value, scheme token included.
    pub fn parse(value: &str) -> Result<Self> {
        // The scheme token is not part of the signed data.
        let (_, params) = value.split_once(' ').ok_or_else(|| {
            Error::malformed_header("authorization header has no space after the scheme")
        })?;

        let mut header = AuthHeader::default();
        for param in split_params(params)? {
            let (key, raw) = param.split_once('=').ok_or_else(|| {
                Error::malformed_header(format!("authorization parameter `{param}` has no `=`"))
            })?;
            let value = unquote(raw).ok_or_else(|| {
                Error::malformed_header(format!(
                    "authorization parameter `{}` is not quoted",
                    key.trim()
                ))
            })?;

            match key.trim().to_lowercase().as_str() {
                "realm" => header.realm = Some(value.to_string()),
                "id" => header.id = Some(value.to_string()),
                "nonce" => header.nonce = Some(value.to_string()),
                "version" => header.version = Some(value.to_string()),
                "headers" => {
                    header.signed_header_names = value
                        .split(';')
                        .filter(|name| !name.is_empty())
                        .map(String::from)
                        .collect()
                }
                "signature" => header.signature = Some(value.to_string()),
                other => debug!("ignore unknown authorization parameter: {other}"),
            }
        }

        Ok(header)
    }

    /// Serialize into an `Authorization` header value.
    pub fn to_header_value(&self) -> Result<String> {
        let mut s = String::with_capacity(256);
        write!(s, "{SCHEME} realm=\"{}\",", self.require_realm()?)?;
        write!(s, "id=\"{}\",", self.require_id()?)?;
        write!(s, "nonce=\"{}\",", self.require_nonce()?)?;
        write!(s, "version=\"{}\"", self.require_version()?)?;

        if !self.signed_header_names.is_empty() {
            write!(s, ",headers=\"{}\"", self.signed_header_names.join(";"))?;
        }
        if let Some(signature) = self.signature().filter(|v| !v.is_empty()) {
            write!(s, ",signature=\"{signature}\"")?;
        }

        Ok(s)
    }
}

impl FromStr for AuthHeader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::missing_field(format!("authorization header requires `{name}`")))
}

/// Split the parameter list on commas that are not inside a quoted value.
fn split_params(s: &str) -> Result<Vec<&str>> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut quoted = false;

    for (idx, c) in s.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                params.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if quoted {
        return Err(Error::malformed_header(
            "authorization header has an unterminated quoted value",
        ));
    }
    params.push(&s[start..]);

    Ok(params)
}

fn unquote(raw: &str) -> Option<&str> {
    raw.trim().strip_prefix('"')?.strip_suffix('"')
}
