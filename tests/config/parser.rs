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

use std::io::Write;

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use zi_playground::{
    Result, ZiCComponentId, ZiCConfig, ZiCConfigParser, ZiCError, ZiCSignalKind,
    ZiCStatementsConfig, ZiCTransformConfig,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ZiCMockConfig {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl ZiCConfig for ZiCMockConfig {
    fn validate(&self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(ZiCError::validation("mock config marked invalid"))
        }
    }
}

fn mock_default() -> ZiCMockConfig {
    ZiCMockConfig {
        valid: true,
        name: "default".into(),
        tags: Vec::new(),
    }
}

fn parser() -> ZiCConfigParser {
    ZiCConfigParser::ZiFNew(ZiCComponentId::ZiFNew("transform"))
}

#[test]
fn ZiFTParseSingleConfigOverlaysDefault() {
    let configs = parser().ZiFParse("tags: [a, b]\n", mock_default).unwrap();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].key, "");
    assert_eq!(
        configs[0].value,
        ZiCMockConfig {
            valid: true,
            name: "default".into(),
            tags: vec!["a".into(), "b".into()],
        }
    );
}

#[test]
fn ZiFTParseEmptyDocumentYieldsDefault() {
    let configs = parser().ZiFParse("", mock_default).unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].value, mock_default());
}

#[test]
fn ZiFTParseMultiConfigKeepsSourceOrder() {
    let source = "\
transform/b:
  name: second-in-alphabet
transform/a:
  name: first-in-alphabet
transform:
";
    let configs = parser().ZiFParse(source, mock_default).unwrap();

    let keys: Vec<&str> = configs.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["transform/b", "transform/a", "transform"]);
    assert_eq!(configs[0].value.name, "second-in-alphabet");
    assert_eq!(configs[1].value.name, "first-in-alphabet");
    assert_eq!(configs[2].value, mock_default());
}

#[test]
fn ZiFTParseMixedKeysIsSingleConfig() {
    let source = "transform/a:\n  name: x\nname: top\n";
    let configs = parser().ZiFParse(source, mock_default).unwrap();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].key, "");
    assert_eq!(configs[0].value.name, "top");
}

#[test]
fn ZiFTParseEscapesDoubleDollarOnly() {
    let source = "name: \"$$1\"\ntags:\n  - \"$1\"\n  - \"a$$b$$\"\n";
    let configs = parser().ZiFParse(source, mock_default).unwrap();

    assert_eq!(configs[0].value.name, "$1");
    assert_eq!(configs[0].value.tags, vec!["$1".to_string(), "a$b$".to_string()]);
}

#[test]
fn ZiFTParseValidationFailureFailsWholeCall() {
    let source = "\
transform/ok:
  name: fine
transform/broken:
  valid: false
";
    let err = parser().ZiFParse(source, mock_default).unwrap_err();
    match err {
        ZiCError::Validation { key, message } => {
            assert_eq!(key, "transform/broken");
            assert_eq!(message, "mock config marked invalid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ZiFTParseRejectsMalformedDocuments() {
    let p = parser();
    assert!(matches!(
        p.ZiFParse("name: [unclosed", mock_default),
        Err(ZiCError::Parse { .. })
    ));
    assert!(matches!(
        p.ZiFParse("- just\n- a list\n", mock_default),
        Err(ZiCError::Parse { .. })
    ));
    assert!(matches!(
        p.ZiFParse("transform/a: [1, 2]\n", mock_default),
        Err(ZiCError::Parse { .. })
    ));
}

#[test]
fn ZiFTParseTransformConfigAcceptsBothListShapes() {
    let source = "\
log_statements:
  - set(attributes[\"a\"], \"b\")
trace_statements:
  - context: span
    conditions:
      - name == \"x\"
    statements:
      - set(name, \"y\")
      - delete_key(attributes, \"z\")
";
    let configs = parser()
        .ZiFParse(source, ZiCTransformConfig::default)
        .unwrap();
    let config = &configs[0].value;

    let logs = config.statement_groups(ZiCSignalKind::Logs);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].context, "");
    assert_eq!(logs[0].statements, vec!["set(attributes[\"a\"], \"b\")"]);

    let traces = config.statement_groups(ZiCSignalKind::Traces);
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].context, "span");
    assert_eq!(traces[0].conditions, vec!["name == \"x\""]);
    assert_eq!(traces[0].statements.len(), 2);
}

#[test]
fn ZiFTParseTransformConfigRejectsUnknownContext() {
    let source = "log_statements:\n  - context: span\n    statements:\n      - set(a, 1)\n";
    let err = parser()
        .ZiFParse(source, ZiCTransformConfig::default)
        .unwrap_err();
    assert!(matches!(err, ZiCError::Validation { .. }));
    assert!(err.to_string().contains("unknown context 'span'"));
}

#[test]
fn ZiFTParseTransformConfigRejectsUnknownKeys() {
    let misspelt = parser().ZiFParse("log_statments:\n  - set(a)\n", ZiCTransformConfig::default);
    assert!(matches!(misspelt, Err(ZiCError::Parse { .. })));

    let grouped = "transform/a:\n  log_statements:\n    - context: log\n      statement: [set(a)]\n";
    let err = parser()
        .ZiFParse(grouped, ZiCTransformConfig::default)
        .unwrap_err();
    assert!(matches!(err, ZiCError::Parse { .. }));
    assert!(err.to_string().contains("transform/a"));
}

#[test]
fn ZiFTParseRejectsNonFiniteNumbers() {
    for source in ["name: .nan\n", "tags: [.inf]\n", "transform/a:\n  name: -.inf\n"] {
        let err = parser().ZiFParse(source, mock_default).unwrap_err();
        assert!(matches!(err, ZiCError::Parse { .. }), "{source}: {err}");
        assert!(err.to_string().contains("non-finite"), "{source}: {err}");
    }
}

#[test]
fn ZiFTParseFileReadsFromDisk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "transform/only:\n  name: from-disk").unwrap();

    let configs = parser().ZiFParseFile(file.path(), mock_default).unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].key, "transform/only");
    assert_eq!(configs[0].value.name, "from-disk");

    let missing = parser().ZiFParseFile(file.path().with_extension("missing"), mock_default);
    assert!(matches!(missing, Err(ZiCError::Io(_))));
}

proptest! {
    #[test]
    fn ZiFTParseKeyOrderMatchesText(names in prop::collection::btree_set("[a-z]{1,8}", 1..8)) {
        // Reverse-sorted so text order never matches sorted map order.
        let names: Vec<String> = names.into_iter().rev().collect();
        let source: String = names
            .iter()
            .map(|name| format!("transform/{name}:\n  name: \"{name}\"\n"))
            .collect();

        let configs = parser().ZiFParse(&source, mock_default).unwrap();
        let keys: Vec<String> = configs.iter().map(|c| c.key.clone()).collect();
        let expected: Vec<String> = names.iter().map(|n| format!("transform/{n}")).collect();
        prop_assert_eq!(keys, expected);
        for (config, name) in configs.iter().zip(&names) {
            prop_assert_eq!(&config.value.name, name);
        }
    }
}

proptest! {
    #[test]
    fn ZiFTParseCollapsesDoubleDollars(prefix in "[a-z0-9 ]{0,6}", suffix in "[a-z0-9]{1,6}") {
        let source = format!("name: \"{prefix}$${suffix}\"\ntags: [\"{prefix}${suffix}\"]\n");
        let configs = parser().ZiFParse(&source, mock_default).unwrap();

        prop_assert_eq!(&configs[0].value.name, &format!("{prefix}${suffix}"));
        prop_assert_eq!(&configs[0].value.tags, &vec![format!("{prefix}${suffix}")]);
    }
}
