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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use zi_playground::{
    ZiCComponentId, ZiCConfigCloner, ZiCConfigParser, ZiCError, ZiCSignalKind,
    ZiCStatementsConfig, ZiCTransformConfig,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ZiCNestedConfig {
    lists: BTreeMap<String, Vec<String>>,
    threshold: f64,
}

#[test]
fn ZiFTCloneMutationLeavesSourceUntouched() {
    let source = "\
log_statements:
  - context: log
    statements:
      - set(attributes[\"a\"], \"1\")
      - set(attributes[\"b\"], \"2\")
";
    let parser = ZiCConfigParser::ZiFNew(ZiCComponentId::ZiFNew("transform"));
    let parsed = parser
        .ZiFParse(source, ZiCTransformConfig::default)
        .unwrap()
        .remove(0);

    let mut copy = parsed.ZiFClone().unwrap();
    assert_eq!(copy, parsed.value);

    let mut groups = copy.statement_groups(ZiCSignalKind::Logs).to_vec();
    groups[0].statements.truncate(1);
    copy.set_statement_groups(ZiCSignalKind::Logs, groups);

    assert_eq!(copy.statement_groups(ZiCSignalKind::Logs)[0].statements.len(), 1);
    assert_eq!(
        parsed.value.statement_groups(ZiCSignalKind::Logs)[0].statements.len(),
        2
    );
}

#[test]
fn ZiFTCloneNestedCollections() {
    let mut lists = BTreeMap::new();
    lists.insert("a".to_string(), vec!["x".to_string(), "y".to_string()]);
    let original = ZiCNestedConfig {
        lists,
        threshold: 0.5,
    };

    let mut copy = ZiCConfigCloner::ZiFClone(&original).unwrap();
    copy.lists.get_mut("a").unwrap().push("z".into());

    assert_eq!(original.lists["a"].len(), 2);
    assert_eq!(copy.lists["a"].len(), 3);
    assert_eq!(copy.threshold, 0.5);
}

#[test]
fn ZiFTToStringMapRequiresObjects() {
    let map = ZiCConfigCloner::ZiFToStringMap(&json!({"k": [1, 2]})).unwrap();
    assert_eq!(map.get("k"), Some(&json!([1, 2])));

    assert!(ZiCConfigCloner::ZiFToStringMap(&json!(null)).unwrap().is_empty());

    let err = ZiCConfigCloner::ZiFToStringMap(&vec![1, 2]).unwrap_err();
    assert!(matches!(err, ZiCError::Clone { .. }));
}
