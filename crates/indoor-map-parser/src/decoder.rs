// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed attribute decoding with defaults
//!
//! Missing attributes yield the caller's default. Present attributes that
//! cannot be decoded also yield the default, with a warning.

use log::warn;
use roxmltree::Node;

/// Typed accessor over the attributes of one element
#[derive(Clone, Copy)]
pub struct AttributeDecoder<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> AttributeDecoder<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Raw attribute value
    pub fn raw(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Float attribute, `0.0` if missing
    pub fn float(&self, name: &str) -> f32 {
        self.float_or(name, 0.0)
    }

    /// Float attribute
    ///
    /// Like C's `strtof`, leading whitespace is skipped and the longest
    /// numeric prefix is used, so `"2.5m"` decodes to `2.5`.
    pub fn float_or(&self, name: &str, default: f32) -> f32 {
        match self.raw(name) {
            Some(value) => parse_float_prefix(value).unwrap_or_else(|| {
                self.warn_invalid(name, value, "float");
                default
            }),
            None => default,
        }
    }

    /// Integer attribute, `0` if missing
    pub fn int(&self, name: &str) -> i32 {
        self.int_or(name, 0)
    }

    /// Integer attribute; `"2.7"` decodes to `2`
    pub fn int_or(&self, name: &str, default: i32) -> i32 {
        match self.raw(name) {
            Some(value) => parse_int_prefix(value).unwrap_or_else(|| {
                self.warn_invalid(name, value, "integer");
                default
            }),
            None => default,
        }
    }

    /// Boolean attribute, `false` if missing
    pub fn bool(&self, name: &str) -> bool {
        self.bool_or(name, false)
    }

    /// Boolean attribute
    ///
    /// Only the literals `true` and `false` are recognized. Any other present
    /// value decodes to `false`.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.raw(name).map(str::trim) {
            Some("true") => true,
            Some("false") => false,
            Some(value) => {
                self.warn_invalid(name, value, "boolean");
                false
            }
            None => default,
        }
    }

    /// String attribute, empty if missing
    pub fn string(&self, name: &str) -> String {
        self.string_or(name, "")
    }

    pub fn string_or(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or(default).to_string()
    }

    fn warn_invalid(&self, name: &str, value: &str, kind: &str) {
        warn!(
            "<{}> attribute '{}': cannot decode '{}' as {}, using default",
            self.node.tag_name().name(),
            name,
            value,
            kind
        );
    }
}

/// Parse the longest float prefix after leading whitespace
pub fn parse_float_prefix(value: &str) -> Option<f32> {
    lexical_core::parse_partial::<f32>(value.trim_start().as_bytes())
        .ok()
        .map(|(v, _)| v)
}

/// Parse the longest integer prefix after leading whitespace
pub fn parse_int_prefix(value: &str) -> Option<i32> {
    lexical_core::parse_partial::<i32>(value.trim_start().as_bytes())
        .ok()
        .map(|(v, _)| v)
}
