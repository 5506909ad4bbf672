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

//! Utility functions and types.

use std::fmt::{Debug, Display, Formatter};

/// Redacts a secret for logging.
///
/// - Empty values render as `EMPTY`.
/// - Values shorter than 12 bytes render as `***`.
/// - Longer values keep their first and last three characters, so that
///   different key ids stay distinguishable in logs.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        let length = s.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        // Keep the slicing on char boundaries for non-ascii secrets.
        if length < 12 || !s.is_char_boundary(3) || !s.is_char_boundary(length - 3) {
            return f.write_str("***");
        }

        write!(f, "{}***{}", &s[..3], &s[length - 3..])
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("", "EMPTY"),
            ("efdde334", "***"),
            ("efdde334-fe7b-11e4-a322", "efd***322"),
            ("W5PeGMxSItNerkNFqQMfYiJvH14WzVJMy54CPoTAYoI=", "W5P***oI="),
            ("éééééééééé", "***"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_redact_option() {
        let none: Option<String> = None;
        assert_eq!(Redact::from(&none).to_string(), "EMPTY");
        let some = Some("0123456789abcdef".to_string());
        assert_eq!(Redact::from(&some).to_string(), "012***def");
    }
}
