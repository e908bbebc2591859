//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Playground Error Module
//!
//! This module defines the error types used throughout the playground core
//! for consistent error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Parse**: Malformed configuration documents, non-mapping roots and
//!   undecodable input payloads
//! - **Validation**: A configuration rejected by its own `validate()`
//! - **Clone**: The intermediate map round-trip used for deep copies failed
//! - **Locate**: A statement list could not be found in the source document
//! - **Engine**: The external signal consumer failed
//! - **Unsupported**: Unknown executor, signal or missing debugger
//! - **Serde / Io / Internal**: Ambient failures
//!
//! Every operation of the configuration parser and the debugger fails fast:
//! callers never receive partial configuration lists or partial step arrays.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::ZiCSignalKind;

/// Convenience result type used throughout the playground core.
pub type Result<T> = std::result::Result<T, ZiCError>;

/// Canonical error enumeration for the playground core.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiCError {
    /// Malformed document syntax, unexpected document structure or an
    /// undecodable signal payload.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A configuration's own validation rejected it.
    #[error("invalid configuration{}: {message}", config_key_suffix(.key))]
    Validation { key: String, message: String },

    /// The intermediate re-encode/decode of a deep copy failed.
    #[error("failed to clone config: {message}")]
    Clone { message: String },

    /// A statement list could not be located in the source document.
    #[error("failed to locate statement list '{list}': {source}")]
    Locate {
        list: String,
        #[source]
        source: ZiCLocateError,
    },

    /// Opaque failure raised by the external signal consumer.
    #[error("failed to consume {signal}: {message}")]
    Engine { signal: ZiCSignalKind, message: String },

    /// The requested executor, signal or capability is not available.
    #[error("unsupported: {message}")]
    Unsupported { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Distinct failures of a statement list position lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiCLocateError {
    /// The document could not be parsed into a positioned tree.
    #[error("failed to parse YAML: {0}")]
    Document(String),

    /// The document holds no content at all.
    #[error("unexpected YAML structure")]
    EmptyDocument,

    /// The document root is not a mapping.
    #[error("expected configuration root to be a mapping node")]
    RootNotMapping,

    /// A path segment was reached on a node that is not a mapping.
    #[error("path '{key}' not found (expected mapping node)")]
    NotAMapping { key: String },

    /// A path segment is absent from its mapping.
    #[error("'{key}' not found in the configuration")]
    KeyNotFound { key: String },

    /// The node found under `key` is not a sequence of statements.
    #[error("'{key}' is not a statement sequence")]
    NotASequence { key: String },

    /// The statement group index is past the end of the list.
    #[error("statement group {index} not found (list has {len} entries)")]
    GroupOutOfRange { index: usize, len: usize },

    /// A grouped entry carries no `statements` key.
    #[error("statement group {index} has no 'statements' key")]
    MissingStatements { index: usize },

    /// A statement index has no matching sequence element.
    #[error("statement {index} not found (sequence has {len} entries)")]
    StatementOutOfRange { index: usize, len: usize },
}

fn config_key_suffix(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!(" '{}'", key)
    }
}

impl From<io::Error> for ZiCError {
    fn from(err: io::Error) -> Self {
        ZiCError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiCError {
    fn from(err: serde_json::Error) -> Self {
        ZiCError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiCError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiCError::Parse {
            message: err.to_string(),
        }
    }
}

impl ZiCError {
    /// Helper to construct parse errors.
    pub fn parse<T: Into<String>>(message: T) -> Self {
        ZiCError::Parse {
            message: message.into(),
        }
    }

    /// Helper to construct validation errors for the unnamed configuration.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiCError::Validation {
            key: String::new(),
            message: message.into(),
        }
    }

    /// Helper to construct clone errors.
    pub fn clone_failure<T: Into<String>>(message: T) -> Self {
        ZiCError::Clone {
            message: message.into(),
        }
    }

    /// Helper to construct locate errors.
    pub fn locate(list: impl Into<String>, source: ZiCLocateError) -> Self {
        ZiCError::Locate {
            list: list.into(),
            source,
        }
    }

    /// Helper to construct engine errors.
    pub fn engine(signal: ZiCSignalKind, message: impl Into<String>) -> Self {
        ZiCError::Engine {
            signal,
            message: message.into(),
        }
    }

    /// Helper to construct unsupported errors.
    pub fn unsupported<T: Into<String>>(message: T) -> Self {
        ZiCError::Unsupported {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiCError::Internal(message.into())
    }

    /// Attributes a decode or validation failure to the named configuration
    /// it came from. Other variants pass through unchanged.
    #[allow(non_snake_case)]
    pub fn ZiFWithConfigKey(self, key: &str) -> Self {
        match self {
            ZiCError::Validation { message, .. } => ZiCError::Validation {
                key: key.to_string(),
                message,
            },
            ZiCError::Parse { message } => ZiCError::Parse {
                message: format!("configuration '{}': {}", key, message),
            },
            other => other,
        }
    }
}
