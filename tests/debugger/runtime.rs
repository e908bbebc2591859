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

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use serde_json::json;
use support::{ZiCScriptedConsumer, ZiFDecodeValue};
use zi_playground::{
    ZiCComponentId, ZiCConfigParser, ZiCDebugger, ZiCError, ZiCExecutionResult, ZiCLocateError,
    ZiCSignalKind, ZiCStatementDebugger, ZiCTransformConfig, ZiCYamlPositionIndex,
};

const INPUT: &str = r#"{"resourceLogs": [{"scopeLogs": []}]}"#;

fn debugger() -> (Arc<ZiCScriptedConsumer>, ZiCStatementDebugger<ZiCScriptedConsumer>) {
    let consumer = Arc::new(ZiCScriptedConsumer::ZiFNew());
    let debugger = ZiCStatementDebugger::ZiFNew(Arc::clone(&consumer));
    (consumer, debugger)
}

fn steps(result: &ZiCExecutionResult) -> Vec<ZiCExecutionResult> {
    assert!(result.debug);
    serde_json::from_str(&result.value).unwrap()
}

#[test]
fn ZiFTDebugRunsGrowingPrefixes() {
    let config = "\
log_statements:
  - context: log
    statements:
      - set(a)
      - set(b)
      - set(c)
";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();
    let steps = steps(&result);

    assert_eq!(steps.len(), 3);
    assert_eq!(
        consumer.received_statements(ZiCSignalKind::Logs),
        vec![
            vec!["set(a)"],
            vec!["set(a)", "set(b)"],
            vec!["set(a)", "set(b)", "set(c)"],
        ]
    );

    let lines: Vec<i64> = steps.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![4, 5, 6]);

    // Every step starts from the untouched input.
    let last = ZiFDecodeValue(&steps[2].value);
    assert_eq!(last["applied"], json!(["set(a)", "set(b)", "set(c)"]));
    assert_eq!(last["resourceLogs"], json!([{"scopeLogs": []}]));
    let first = ZiFDecodeValue(&steps[0].value);
    assert_eq!(first["applied"], json!(["set(a)"]));

    assert!(steps.iter().all(|s| s.debug));
    assert!(steps[1].logs.contains("applied set(b)"));
    assert!(!steps[0].logs.contains("applied set(b)"));
}

#[test]
fn ZiFTDebugAttributesGroupedTraceLines() {
    let config = "trace_statements:\n  - context: resource\n    statements:\n      - STMT_A\n      - STMT_B";
    let (_, debugger) = debugger();
    let result = debugger
        .ZiFDebugTraces(config, r#"{"resourceSpans": []}"#)
        .unwrap();
    let lines: Vec<i64> = steps(&result).iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![4, 5]);
}

#[test]
fn ZiFTDebugFlatListKeepsEarlierStatements() {
    let config = "log_statements:\n  - set(a)\n  - set(b)\n";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();
    let steps = steps(&result);

    assert_eq!(steps.iter().map(|s| s.line).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(
        consumer.received_statements(ZiCSignalKind::Logs),
        vec![vec!["set(a)"], vec!["set(a)", "set(b)"]]
    );
}

#[test]
fn ZiFTDebugOrdersStepsByConfigThenGroup() {
    let config = "\
transform/zeta:
  log_statements:
    - context: log
      statements:
        - set(z1)
    - context: resource
      statements:
        - set(z2)
transform/alpha:
  log_statements:
    - set(a1)
";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();
    let steps = steps(&result);

    assert_eq!(steps.iter().map(|s| s.line).collect::<Vec<_>>(), vec![5, 8, 11]);
    assert_eq!(
        consumer.received_statements(ZiCSignalKind::Logs),
        vec![vec!["set(z1)"], vec!["set(z2)"], vec!["set(a1)"]]
    );
}

#[test]
fn ZiFTDebugWithoutStatementsReturnsEmptySteps() {
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugMetrics("error_mode: ignore\n", "{}").unwrap();

    assert!(result.debug);
    assert_eq!(result.value, "[]");
    assert!(consumer.received().is_empty());
}

#[test]
fn ZiFTDebugEngineFailureFailsWholeCall() {
    let config = "log_statements:\n  - set(a)\n  - fail_here()\n  - set(c)\n";
    let (consumer, debugger) = debugger();
    let err = debugger.ZiFDebugLogs(config, INPUT).unwrap_err();

    assert!(matches!(
        err,
        ZiCError::Engine {
            signal: ZiCSignalKind::Logs,
            ..
        }
    ));
    assert_eq!(consumer.received().len(), 2);
}

#[test]
fn ZiFTDebugUnsupportedSignalIsEngineError() {
    let consumer = Arc::new(ZiCScriptedConsumer::ZiFSupporting(&[ZiCSignalKind::Logs]));
    let debugger = ZiCStatementDebugger::ZiFNew(consumer);
    let config = "profile_statements:\n  - set(a)\n";

    let err = debugger.ZiFDebugProfiles(config, "{}").unwrap_err();
    assert!(matches!(
        err,
        ZiCError::Engine {
            signal: ZiCSignalKind::Profiles,
            ..
        }
    ));
}

#[test]
fn ZiFTDebugMixedListLocatesEachEntry() {
    let config = "\
log_statements:
  - set(a)
  - context: log
    statements:
      - set(b)
      - set(c)
";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();
    let steps = steps(&result);

    assert_eq!(steps.iter().map(|s| s.line).collect::<Vec<_>>(), vec![2, 5, 6]);
    assert_eq!(
        consumer.received_statements(ZiCSignalKind::Logs),
        vec![vec!["set(a)"], vec!["set(b)"], vec!["set(b)", "set(c)"]]
    );
}

#[test]
fn ZiFTDebugFlatPrefixRestartsAfterGroup() {
    let config = "\
log_statements:
  - set(a)
  - context: log
    statements:
      - set(b)
  - set(c)
  - set(d)
";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();

    assert_eq!(
        steps(&result).iter().map(|s| s.line).collect::<Vec<_>>(),
        vec![2, 5, 6, 7]
    );
    assert_eq!(
        consumer.received_statements(ZiCSignalKind::Logs),
        vec![
            vec!["set(a)"],
            vec!["set(b)"],
            vec!["set(c)"],
            vec!["set(c)", "set(d)"],
        ]
    );
}

#[test]
fn ZiFTDebugDebugsAnchoredLists() {
    let config = "log_statements: &shared\n  - set(a)\n  - set(b)\n";
    let (consumer, debugger) = debugger();
    let result = debugger.ZiFDebugLogs(config, INPUT).unwrap();

    assert_eq!(steps(&result).iter().map(|s| s.line).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(consumer.received().len(), 2);
}

#[test]
fn ZiFTPlanStepsLocateFailureNamesTheList() {
    let parser = ZiCConfigParser::ZiFNew(ZiCComponentId::ZiFNew("transform"));
    let parsed = parser
        .ZiFParse("log_statements:\n  - set(a)\n  - set(b)\n", ZiCTransformConfig::default)
        .unwrap()
        .remove(0);
    let positions = ZiCYamlPositionIndex::ZiFParse("log_statements:\n  - set(a)\n").unwrap();

    let (consumer, debugger) = debugger();
    let err = debugger
        .ZiFPlanSteps(ZiCSignalKind::Logs, &positions, &parsed)
        .unwrap_err();

    match err {
        ZiCError::Locate { list, source } => {
            assert_eq!(list, "log_statements");
            assert_eq!(source, ZiCLocateError::GroupOutOfRange { index: 1, len: 1 });
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(consumer.received().is_empty());
}

#[test]
fn ZiFTDebugRejectsInvalidPayload() {
    let (_, debugger) = debugger();
    let err = debugger
        .ZiFDebugLogs("log_statements:\n  - set(a)\n", "[1, 2]")
        .unwrap_err();
    assert!(matches!(err, ZiCError::Parse { .. }));
}

#[test]
fn ZiFTPlanStepsTruncatesClones() {
    let config = "\
transform/x:
  trace_statements:
    - context: span
      statements:
        - set(a)
        - set(b)
";
    let (_, debugger) = debugger();
    let parser = ZiCConfigParser::ZiFNew(ZiCComponentId::ZiFNew("transform"));
    let parsed = parser
        .ZiFParse(config, ZiCTransformConfig::default)
        .unwrap()
        .remove(0);
    let positions = ZiCYamlPositionIndex::ZiFParse(config).unwrap();

    let planned = debugger
        .ZiFPlanSteps(ZiCSignalKind::Traces, &positions, &parsed)
        .unwrap();

    assert_eq!(planned.len(), 2);
    assert_eq!((planned[0].group, planned[0].statement, planned[0].line), (0, 0, 5));
    assert_eq!((planned[1].group, planned[1].statement, planned[1].line), (0, 1, 6));
    assert_eq!(planned[0].config.trace_statements[0].statements, vec!["set(a)"]);
    assert_eq!(planned[0].config.trace_statements[0].context, "span");
    assert_eq!(parsed.value.trace_statements[0].statements.len(), 2);
}

#[test]
fn ZiFTDebuggerTraitDispatch() {
    let (_, debugger) = debugger();
    let dynamic: &dyn ZiCDebugger = &debugger;
    let result = dynamic
        .debug(ZiCSignalKind::Logs, "log_statements:\n  - set(a)\n", INPUT)
        .unwrap();
    assert_eq!(steps(&result).len(), 1);
    assert!(dynamic.observed_logs().is_empty());
}
