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

/// Scheme token that leads every authorization header value.
pub const SCHEME: &str = "acquia-http-hmac";
/// Protocol version used when signing.
pub const DEFAULT_VERSION: &str = "2.0";

/// Header carrying the unix timestamp of the signature.
pub const X_AUTHORIZATION_TIMESTAMP: &str = "X-Authorization-Timestamp";

/// Env name of the key id.
pub const ACQUIA_HMAC_ID: &str = "ACQUIA_HMAC_ID";
/// Env name of the base64 encoded secret.
pub const ACQUIA_HMAC_SECRET: &str = "ACQUIA_HMAC_SECRET";
/// Env name of the realm.
pub const ACQUIA_HMAC_REALM: &str = "ACQUIA_HMAC_REALM";
/// Env name of the protocol version.
pub const ACQUIA_HMAC_VERSION: &str = "ACQUIA_HMAC_VERSION";
