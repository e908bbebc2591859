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

//! # Executor Metadata
//!
//! Describes a playground executor to the front end: identity, docs link,
//! which result views are enabled, bundled examples and whether it can debug.
//!
//! Metadata is assembled from option closures. An option that fails is
//! logged and skipped; construction itself never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiCError};

/// Version reported by executors that do not set their own.
pub const ZI_PLAYGROUND_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A way of rendering an execution result. Keep in sync with the front end.
pub const ZI_RESULT_VIEW_VISUAL_DELTA: &str = "visual_delta";
pub const ZI_RESULT_VIEW_ANNOTATED_DELTA: &str = "annotated_delta";
pub const ZI_RESULT_VIEW_JSON: &str = "json";
pub const ZI_RESULT_VIEW_LOGS: &str = "logs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiCComponentType {
    Processor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCResultViewConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCPayloadExample {
    pub name: String,
    pub signal: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCConfigExample {
    pub name: String,
    pub signal: String,
    pub config: String,
    pub payload: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCExamples {
    pub configs: Vec<ZiCConfigExample>,
    pub payloads: Vec<ZiCPayloadExample>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCMetadata {
    #[serde(rename = "type")]
    pub component_type: ZiCComponentType,
    pub id: String,
    pub name: String,
    pub path: String,
    pub version: String,
    #[serde(rename = "docsURL")]
    pub docs_url: String,
    #[serde(rename = "resultViewConfig")]
    pub result_view_config: BTreeMap<String, ZiCResultViewConfig>,
    pub examples: ZiCExamples,
    pub debuggable: bool,
}

/// Mutation applied to metadata at construction.
pub type ZiCMetadataOption = Box<dyn FnOnce(&mut ZiCMetadata) -> Result<()>>;

fn default_result_views() -> BTreeMap<String, ZiCResultViewConfig> {
    [
        ZI_RESULT_VIEW_VISUAL_DELTA,
        ZI_RESULT_VIEW_ANNOTATED_DELTA,
        ZI_RESULT_VIEW_JSON,
        ZI_RESULT_VIEW_LOGS,
    ]
    .into_iter()
    .map(|view| (view.to_string(), ZiCResultViewConfig { enabled: true }))
    .collect()
}

impl ZiCMetadata {
    #[allow(non_snake_case)]
    pub fn ZiFNew(
        component_type: ZiCComponentType,
        id: &str,
        name: &str,
        path: &str,
        docs_url: &str,
        options: Vec<ZiCMetadataOption>,
    ) -> Self {
        let mut metadata = ZiCMetadata {
            component_type,
            id: id.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            version: ZI_PLAYGROUND_VERSION.to_string(),
            docs_url: docs_url.to_string(),
            result_view_config: default_result_views(),
            examples: ZiCExamples::default(),
            debuggable: false,
        };

        for option in options {
            if let Err(err) = option(&mut metadata) {
                ::log::warn!("error applying metadata option to '{}': {}", metadata.id, err);
            }
        }
        metadata
    }

    #[allow(non_snake_case)]
    pub fn ZiFIsViewEnabled(&self, view: &str) -> bool {
        self.result_view_config
            .get(view)
            .map(|cfg| cfg.enabled)
            .unwrap_or(false)
    }
}

fn unsupported_view(view: &str) -> ZiCError {
    ZiCError::unsupported(format!("unsupported result view \"{}\"", view))
}

/// Enables exactly `views`, disabling every other view first.
#[allow(non_snake_case)]
pub fn ZiFEnableResultViews(views: &[&str]) -> ZiCMetadataOption {
    let views: Vec<String> = views.iter().map(|v| v.to_string()).collect();
    Box::new(move |metadata: &mut ZiCMetadata| {
        for cfg in metadata.result_view_config.values_mut() {
            cfg.enabled = false;
        }
        for view in &views {
            let cfg = metadata
                .result_view_config
                .get_mut(view)
                .ok_or_else(|| unsupported_view(view))?;
            cfg.enabled = true;
        }
        Ok(())
    })
}

#[allow(non_snake_case)]
pub fn ZiFDisableResultViews(views: &[&str]) -> ZiCMetadataOption {
    let views: Vec<String> = views.iter().map(|v| v.to_string()).collect();
    Box::new(move |metadata: &mut ZiCMetadata| {
        for view in &views {
            let cfg = metadata
                .result_view_config
                .get_mut(view)
                .ok_or_else(|| unsupported_view(view))?;
            cfg.enabled = false;
        }
        Ok(())
    })
}

#[allow(non_snake_case)]
pub fn ZiFWithConfigExamples(examples: Vec<ZiCConfigExample>) -> ZiCMetadataOption {
    Box::new(move |metadata: &mut ZiCMetadata| {
        metadata.examples.configs.extend(examples);
        Ok(())
    })
}

#[allow(non_snake_case)]
pub fn ZiFWithPayloadExamples(examples: Vec<ZiCPayloadExample>) -> ZiCMetadataOption {
    Box::new(move |metadata: &mut ZiCMetadata| {
        metadata.examples.payloads.extend(examples);
        Ok(())
    })
}

/// Examples bundled with the filter processor.
#[allow(non_snake_case)]
pub fn ZiFFilterProcessorExamples() -> Vec<ZiCConfigExample> {
    let example = |name: &str, signal: &str, config: &str, payload: &str| ZiCConfigExample {
        name: name.to_string(),
        signal: signal.to_string(),
        config: config.to_string(),
        payload: payload.to_string(),
    };
    vec![
        example(
            "Drop specific metric and value",
            "metrics",
            "filter: \n  metrics:\n    datapoint:\n      - metric.name == \"my.histogram\" and count == 2",
            "",
        ),
        example(
            "Drop spans",
            "traces",
            "filter: \n  traces:\n    span:\n      - kind == SPAN_KIND_INTERNAL",
            "",
        ),
        example(
            "Drop data by resource attribute",
            "traces",
            "filter: \n  traces:\n    span:\n      - IsMatch(resource.attributes[\"service.name\"], \"my-*\")",
            "",
        ),
        example(
            "Drop debug and trace logs",
            "logs",
            "filter: \n  logs:\n    log_record:\n      - severity_number != SEVERITY_NUMBER_UNSPECIFIED and severity_number < SEVERITY_NUMBER_INFO",
            FILTER_LOGS_PAYLOAD,
        ),
    ]
}

const FILTER_LOGS_PAYLOAD: &str = r#"{"resourceLogs":[{"resource":{"attributes":[{"key":"service.name","value":{"stringValue":"my.service"}}]},"scopeLogs":[{"scope":{"name":"my.library","version":"1.0.0","attributes":[{"key":"my.scope.attribute","value":{"stringValue":"some scope attribute"}}]},"logRecords":[{"timeUnixNano":"1544712660300000000","observedTimeUnixNano":"1544712660300000000","severityNumber":10,"severityText":"Information","traceId":"5b8efff798038103d269b633813fc60c","spanId":"eee19b7ec3c1b174","body":{"stringValue":"I'm an INFO log record"}},{"timeUnixNano":"1544712660300000000","observedTimeUnixNano":"1544712660300000000","severityNumber":5,"severityText":"Debug","traceId":"5b8efff798038103d269b633813fc60c","spanId":"eee19b7ec3c1b174","body":{"stringValue":"I'm a DEBUG log record"}}]}]}]}"#;

/// Metadata of the filter processor executor. It has no debugger; `options`
/// apply after the bundled examples.
#[allow(non_snake_case)]
pub fn ZiFFilterProcessorMetadata(options: Vec<ZiCMetadataOption>) -> ZiCMetadata {
    let mut all = vec![ZiFWithConfigExamples(ZiFFilterProcessorExamples())];
    all.extend(options);
    ZiCMetadata::ZiFNew(
        ZiCComponentType::Processor,
        "filter_processor",
        "Filter",
        "github.com/open-telemetry/opentelemetry-collector-contrib/processor/filterprocessor",
        "https://github.com/open-telemetry/opentelemetry-collector-contrib/blob/main/processor/filterprocessor",
        all,
    )
}
