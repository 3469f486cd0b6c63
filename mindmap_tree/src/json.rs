// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exchange with the embedding application.

use alloc::string::String;
use core::fmt;

use crate::TreeNode;

/// Error returned when a tree cannot be read from or written to JSON.
pub struct JsonError(serde_json::Error);

impl JsonError {
    /// The underlying `serde_json` error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

impl fmt::Debug for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonError({:?})", self.0)
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mindmap tree JSON: {}", self.0)
    }
}

impl core::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        Self(err)
    }
}

impl TreeNode {
    /// Parses a tree from JSON text.
    ///
    /// Ids are not filled in; call [`auto_fill`](crate::auto_fill) afterwards.
    pub fn from_json(text: &str) -> Result<Self, JsonError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the tree to compact JSON text.
    pub fn to_json(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string(self)?)
    }
}
