// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug export of the laid-out tree.

use core::fmt;

/// File name suggested for [`Mindmap::export_layout_json`](crate::Mindmap::export_layout_json).
pub const EXPORT_FILE_NAME: &str = "data.json";

/// Error returned by [`Mindmap::export_layout_json`](crate::Mindmap::export_layout_json).
pub enum ExportError {
    /// Nothing has been laid out yet: no tree is loaded or no surface is
    /// attached.
    NoLayout,
    /// Serialization failed.
    Serialize(serde_json::Error),
}

impl fmt::Debug for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayout => f.write_str("NoLayout"),
            Self::Serialize(err) => write!(f, "Serialize({err:?})"),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayout => f.write_str("no layout to export"),
            Self::Serialize(err) => write!(f, "failed to serialize layout: {err}"),
        }
    }
}

impl core::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NoLayout => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
