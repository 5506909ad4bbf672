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

//! Request adapters feeding the canonical message.

use std::collections::BTreeMap;

use http::header::{CONTENT_TYPE, HOST};
use http::uri::Authority;
use httphmac_core::{Error, Result, SigningRequest};

use crate::constants::X_AUTHORIZATION_TIMESTAMP;
use crate::message::{build_message, RequestTarget};
use crate::AuthHeader;

/// RequestFacts is everything the canonical message needs from a request.
///
/// Implement it for the request type of an HTTP stack to sign or verify
/// its requests without converting them first.
pub trait RequestFacts {
    /// HTTP method.
    fn method(&self) -> &str;
    /// Host without port.
    fn host(&self) -> &str;
    /// Port, if the request names one explicitly.
    fn port(&self) -> Option<u16>;
    /// Request path.
    fn path(&self) -> &str;
    /// Raw query string without the leading `?`.
    fn query(&self) -> Option<&str>;
    /// First value of the named header.
    ///
    /// Values that are not visible ASCII fail with an encoding error.
    fn header(&self, name: &str) -> Result<Option<&str>>;
    /// Raw body bytes.
    fn body(&self) -> &[u8];
}

/// Build the canonical message of `req` as described by `auth`.
///
/// Signed headers absent from the request are skipped. The
/// `X-Authorization-Timestamp` header is required, `Content-Type` is
/// optional.
pub fn create_message(req: &impl RequestFacts, auth: &AuthHeader) -> Result<String> {
    let mut signed_headers = BTreeMap::new();
    for name in auth.signed_header_names() {
        if let Some(value) = req.header(name)? {
            signed_headers.insert(name.clone(), value.to_string());
        }
    }

    let timestamp = req.header(X_AUTHORIZATION_TIMESTAMP)?.ok_or_else(|| {
        Error::missing_field(format!("request has no {X_AUTHORIZATION_TIMESTAMP} header"))
    })?;
    let content_type = req.header(CONTENT_TYPE.as_str())?.unwrap_or_default();

    let target = RequestTarget {
        method: req.method(),
        host: req.host(),
        port: req.port(),
        path: req.path(),
        query: req.query(),
    };

    build_message(
        &target,
        auth,
        &signed_headers,
        timestamp,
        content_type,
        req.body(),
    )
}

/// InboundRequest adapts a request received by a server.
///
/// Host and port come from the `Host` header, falling back to the request
/// uri when the header is absent.
#[derive(Debug)]
pub struct InboundRequest<'a, B> {
    req: &'a http::Request<B>,
    authority: Authority,
}

impl<'a, B: AsRef<[u8]>> InboundRequest<'a, B> {
    /// Wrap a received request.
    pub fn new(req: &'a http::Request<B>) -> Result<Self> {
        let authority = match req.headers().get(HOST) {
            Some(v) => v.to_str()?.parse::<Authority>()?,
            None => req.uri().authority().cloned().ok_or_else(|| {
                Error::request_invalid("request has neither a Host header nor an absolute uri")
            })?,
        };

        Ok(Self { req, authority })
    }
}

impl<B: AsRef<[u8]>> RequestFacts for InboundRequest<'_, B> {
    fn method(&self) -> &str {
        self.req.method().as_str()
    }

    fn host(&self) -> &str {
        self.authority.host()
    }

    fn port(&self) -> Option<u16> {
        self.authority.port_u16()
    }

    fn path(&self) -> &str {
        self.req.uri().path()
    }

    fn query(&self) -> Option<&str> {
        self.req.uri().query()
    }

    fn header(&self, name: &str) -> Result<Option<&str>> {
        match self.req.headers().get(name) {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }

    fn body(&self) -> &[u8] {
        self.req.body().as_ref()
    }
}

/// OutboundRequest adapts a request that is about to be sent.
///
/// Host and port come from the request uri.
#[derive(Debug)]
pub struct OutboundRequest<'a> {
    req: &'a SigningRequest,
    body: &'a [u8],
}

impl<'a> OutboundRequest<'a> {
    /// Wrap a request under signing together with its body.
    pub fn new(req: &'a SigningRequest, body: &'a [u8]) -> Self {
        Self { req, body }
    }
}

impl RequestFacts for OutboundRequest<'_> {
    fn method(&self) -> &str {
        self.req.method.as_str()
    }

    fn host(&self) -> &str {
        self.req.host()
    }

    fn port(&self) -> Option<u16> {
        self.req.port()
    }

    fn path(&self) -> &str {
        &self.req.path
    }

    fn query(&self) -> Option<&str> {
        self.req.query.as_deref()
    }

    fn header(&self, name: &str) -> Result<Option<&str>> {
        self.req.header_get(name)
    }

    fn body(&self) -> &[u8] {
        self.body
    }
}
