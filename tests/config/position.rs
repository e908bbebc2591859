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

use zi_playground::{ZiCLocateError, ZiCYamlPositionIndex};

const GROUPED: &str = "\
trace_statements:
  - context: resource
    statements:
      - STMT_A
      - STMT_B
  - context: span
    statements:
      - STMT_C
";

const MULTI: &str = "\
transform/first:
  log_statements:
    - set(attributes[\"a\"], \"1\")
    - set(attributes[\"b\"], \"2\")

transform/second:
  log_statements:
    - context: log
      statements:
        - delete_key(attributes, \"a\")
";

#[test]
fn ZiFTLocateGroupedStatementLines() {
    let index = ZiCYamlPositionIndex::ZiFParse(GROUPED).unwrap();

    let first = index.ZiFLocate("", "trace_statements", 0).unwrap();
    assert!(!first.flat);
    assert_eq!(first.len(), 2);
    assert_eq!(first.ZiFLine(0).unwrap(), 4);
    assert_eq!(first.ZiFLine(1).unwrap(), 5);

    let second = index.ZiFLocate("", "trace_statements", 1).unwrap();
    assert_eq!(second.ZiFLine(0).unwrap(), 8);
}

#[test]
fn ZiFTLocateUnderConfigKey() {
    let index = ZiCYamlPositionIndex::ZiFParse(MULTI).unwrap();

    let flat = index.ZiFLocate("transform/first", "log_statements", 0).unwrap();
    assert!(flat.flat);
    assert_eq!(flat.len(), 1);
    assert_eq!(flat.ZiFLine(0).unwrap(), 3);
    let next = index.ZiFLocate("transform/first", "log_statements", 1).unwrap();
    assert_eq!(next.ZiFLine(0).unwrap(), 4);

    let grouped = index.ZiFLocate("transform/second", "log_statements", 0).unwrap();
    assert!(!grouped.flat);
    assert_eq!(grouped.ZiFLine(0).unwrap(), 10);
}

#[test]
fn ZiFTLocateMixedListPerEntry() {
    let mixed = "log_statements:\n  - set(a)\n  - context: log\n    statements:\n      - set(b)\n      - set(c)\n";
    let index = ZiCYamlPositionIndex::ZiFParse(mixed).unwrap();

    let bare = index.ZiFLocate("", "log_statements", 0).unwrap();
    assert!(bare.flat);
    assert_eq!(bare.ZiFLine(0).unwrap(), 2);

    let group = index.ZiFLocate("", "log_statements", 1).unwrap();
    assert!(!group.flat);
    assert_eq!(group.ZiFLine(0).unwrap(), 5);
    assert_eq!(group.ZiFLine(1).unwrap(), 6);
}

#[test]
fn ZiFTLocateThroughAnchorsAndAliases() {
    let anchored = "log_statements: &shared\n  - set(a)\n  - set(b)\nx: *shared\n";
    let index = ZiCYamlPositionIndex::ZiFParse(anchored).unwrap();
    assert_eq!(index.ZiFLocate("", "log_statements", 0).unwrap().ZiFLine(0).unwrap(), 2);
    assert_eq!(index.ZiFLocate("", "log_statements", 1).unwrap().ZiFLine(0).unwrap(), 3);

    // An alias points back at the lines of the anchored node.
    let aliased = "\
base: &group
  context: log
  statements:
    - set(a)
log_statements:
  - *group
";
    let sequence = ZiCYamlPositionIndex::ZiFLocateIn(aliased, "", "log_statements", 0).unwrap();
    assert!(!sequence.flat);
    assert_eq!(sequence.ZiFLine(0).unwrap(), 4);
}

#[test]
fn ZiFTLocateReportsMissingKeys() {
    let index = ZiCYamlPositionIndex::ZiFParse(MULTI).unwrap();

    assert_eq!(
        index.ZiFLocate("transform/third", "log_statements", 0).unwrap_err(),
        ZiCLocateError::KeyNotFound {
            key: "transform/third".into()
        }
    );
    assert_eq!(
        index.ZiFLocate("transform/first", "trace_statements", 0).unwrap_err(),
        ZiCLocateError::KeyNotFound {
            key: "trace_statements".into()
        }
    );
}

#[test]
fn ZiFTLocateReportsGroupShapeErrors() {
    assert_eq!(
        ZiCYamlPositionIndex::ZiFLocateIn(GROUPED, "", "trace_statements", 2).unwrap_err(),
        ZiCLocateError::GroupOutOfRange { index: 2, len: 2 }
    );

    let no_statements = "log_statements:\n  - context: log\n    conditions: []\n";
    assert_eq!(
        ZiCYamlPositionIndex::ZiFLocateIn(no_statements, "", "log_statements", 0).unwrap_err(),
        ZiCLocateError::MissingStatements { index: 0 }
    );

    let scalar = "log_statements: set(a, 1)\n";
    assert_eq!(
        ZiCYamlPositionIndex::ZiFLocateIn(scalar, "", "log_statements", 0).unwrap_err(),
        ZiCLocateError::NotASequence {
            key: "log_statements".into()
        }
    );
}

#[test]
fn ZiFTLocateRejectsUnusableDocuments() {
    assert_eq!(
        ZiCYamlPositionIndex::ZiFParse("").unwrap_err(),
        ZiCLocateError::EmptyDocument
    );
    assert_eq!(
        ZiCYamlPositionIndex::ZiFParse("\"just a scalar\"").unwrap_err(),
        ZiCLocateError::RootNotMapping
    );
    assert!(matches!(
        ZiCYamlPositionIndex::ZiFParse("log_statements: [").unwrap_err(),
        ZiCLocateError::Document(_)
    ));
}
