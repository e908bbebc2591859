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

//! # Configuration Module
//!
//! Turns raw configuration text into typed, validated configuration values.
//!
//! ## Architecture
//!
//! - **Parser** ([parser.rs](parser/index.html)): decodes one flat or several
//!   named configurations, keeping first-appearance key order
//! - **Clone** ([clone.rs](clone/index.html)): deep copies through an
//!   intermediate string-keyed map
//! - **Position** ([position.rs](position/index.html)): maps statement lists
//!   back to their source lines
//! - **Transform** ([transform.rs](transform/index.html)): the statement
//!   configuration of the transform component
//! - **Filter** ([filter.rs](filter/index.html)): the condition lists of the
//!   filter component
//!
//! ## Document Shapes
//!
//! ```yaml
//! # single, unnamed configuration
//! log_statements:
//!   - set(attributes["a"], "b")
//!
//! # several named configurations, executed in this order
//! transform/first:
//!   log_statements:
//!     - set(attributes["a"], "b")
//! transform/second:
//!   log_statements:
//!     - delete_key(attributes, "a")
//! ```

use crate::errors::Result;
use crate::signal::ZiCSignalKind;

pub mod clone;
pub mod filter;
pub mod parser;
pub mod position;
pub mod transform;

pub use clone::ZiCConfigCloner;
pub use filter::{ZiCFilterConfig, ZiCFilterLogs, ZiCFilterMetrics, ZiCFilterProfiles, ZiCFilterTraces};
pub use parser::{ZiCConfigParser, ZiCParsedConfig};
pub use position::{ZiCSourcePosition, ZiCStatementSequence, ZiCYamlPositionIndex};
pub use transform::{ZiCContextStatements, ZiCErrorMode, ZiCTransformConfig};

/// A typed configuration decoded by [`ZiCConfigParser`].
pub trait ZiCConfig {
    /// Checks the decoded value. The default accepts everything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A configuration carrying ordered statement groups per signal kind.
///
/// The debugger reads the groups of one kind and replaces them with a
/// truncated copy on every step.
pub trait ZiCStatementsConfig: ZiCConfig {
    fn statement_groups(&self, kind: ZiCSignalKind) -> &[ZiCContextStatements];

    fn set_statement_groups(&mut self, kind: ZiCSignalKind, groups: Vec<ZiCContextStatements>);
}
