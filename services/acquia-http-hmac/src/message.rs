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

//! Canonical message construction.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::io::Read;

use httphmac_core::hash::base64_sha256;
use httphmac_core::{Error, Result};
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::AuthHeader;

/// Form encoding keeps alphanumerics and `.-*_`, everything else is escaped.
///
/// Space becomes `%20` instead of `+`.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// The parts of a request line that enter the canonical message.
#[derive(Clone, Copy, Debug)]
pub struct RequestTarget<'a> {
    /// HTTP method.
    pub method: &'a str,
    /// Host without port.
    pub host: &'a str,
    /// Port, only folded into the message when set and non-zero.
    pub port: Option<u16>,
    /// Request path, used verbatim.
    pub path: &'a str,
    /// Raw query string without the leading `?`, used verbatim.
    pub query: Option<&'a str>,
}

/// Build the canonical message of a request.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// host[:port] + "\n" +
/// path + "\n" +
/// query + "\n" +
/// "id=" + id + "&nonce=" + nonce + "&realm=" + realm + "&version=" + version + "\n" +
/// (lower(signed header name) + ":" + value + "\n")* +
/// timestamp +
/// ["\n" + lower(content type) + "\n" + base64(sha256(body))]
/// ```
///
/// `signed_headers` holds the values resolved for the names listed in
/// `auth`; a `BTreeMap` keeps them ordered by name. The body segment is only
/// appended for methods other than `GET` and `HEAD` when the body is not
/// empty. The body of a `GET` or `HEAD` request is never read.
pub fn build_message(
    target: &RequestTarget<'_>,
    auth: &AuthHeader,
    signed_headers: &BTreeMap<String, String>,
    timestamp: &str,
    content_type: &str,
    mut body: impl Read,
) -> Result<String> {
    let method = target.method.to_uppercase();

    let mut s = String::with_capacity(256);
    writeln!(s, "{method}")?;
    s.push_str(&target.host.to_lowercase());
    if let Some(port) = target.port.filter(|v| *v > 0) {
        write!(s, ":{port}")?;
    }
    s.push('\n');
    writeln!(s, "{}", target.path)?;
    writeln!(s, "{}", target.query.unwrap_or_default())?;
    writeln!(
        s,
        "id={}&nonce={}&realm={}&version={}",
        encode(auth.require_id()?),
        encode(auth.require_nonce()?),
        encode(auth.require_realm()?),
        encode(auth.require_version()?),
    )?;
    for (name, value) in signed_headers {
        writeln!(s, "{}:{value}", name.to_lowercase())?;
    }
    s.push_str(timestamp);

    if carries_body(&method) {
        let mut content = Vec::new();
        body.read_to_end(&mut content)
            .map_err(|e| Error::body_read("failed to read request body").with_source(e))?;

        if !content.is_empty() {
            write!(
                s,
                "\n{}\n{}",
                content_type.to_lowercase(),
                base64_sha256(&content)
            )?;
        }
    }

    debug!("message to sign: {s:?}");
    Ok(s)
}

/// Encode an authorization parameter for the canonical message.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET).to_string()
}

fn carries_body(method: &str) -> bool {
    method != "GET" && method != "HEAD"
}
