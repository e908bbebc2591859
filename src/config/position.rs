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

//! # Statement Position Index
//!
//! Maps a statement list of a configuration back to the source lines of its
//! statements. Positions always come from the positioned document tree of the
//! original text, never from the decoded configuration.
//!
//! Two list shapes are recognised under a statement-list field:
//!
//! ```yaml
//! trace_statements:          # grouped: one `statements` list per entry
//!   - context: resource
//!     statements:
//!       - set(attributes["a"], "b")   # line 4
//! log_statements:            # flat: each entry is one statement
//!   - set(attributes["a"], "b")
//! ```
//!
//! Both shapes may be mixed in one list; each entry is located on its own.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

use crate::errors::ZiCLocateError;

const STATEMENTS_KEY: &str = "statements";

/// 1-indexed line and column of a node in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZiCSourcePosition {
    pub line: usize,
    pub column: usize,
}

impl ZiCSourcePosition {
    fn at(marker: Marker) -> Self {
        ZiCSourcePosition {
            line: marker.line(),
            column: marker.col() + 1,
        }
    }
}

/// A located statement sequence: one position per element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiCStatementSequence {
    /// Position of the sequence node itself.
    pub position: ZiCSourcePosition,
    /// `true` when the entry is a bare statement rather than a group.
    pub flat: bool,
    pub items: Vec<ZiCSourcePosition>,
}

impl ZiCStatementSequence {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line of the element at `index`.
    #[allow(non_snake_case)]
    pub fn ZiFLine(&self, index: usize) -> Result<usize, ZiCLocateError> {
        self.items
            .get(index)
            .map(|position| position.line)
            .ok_or(ZiCLocateError::StatementOutOfRange {
                index,
                len: self.items.len(),
            })
    }
}

/// Node of the positioned document tree. Aliases are replaced by a copy of
/// the anchored node, positions included.
#[derive(Clone, Debug)]
enum ZiCYamlNode {
    Scalar {
        position: ZiCSourcePosition,
        value: String,
    },
    Sequence {
        position: ZiCSourcePosition,
        items: Vec<ZiCYamlNode>,
    },
    Mapping {
        position: ZiCSourcePosition,
        entries: Vec<(String, ZiCYamlNode)>,
    },
}

impl ZiCYamlNode {
    fn position(&self) -> ZiCSourcePosition {
        match self {
            ZiCYamlNode::Scalar { position, .. }
            | ZiCYamlNode::Sequence { position, .. }
            | ZiCYamlNode::Mapping { position, .. } => *position,
        }
    }

    fn get(&self, key: &str) -> Option<&ZiCYamlNode> {
        match self {
            ZiCYamlNode::Mapping { entries, .. } => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Text used when the node appears as a mapping key.
    fn key_text(&self) -> String {
        match self {
            ZiCYamlNode::Scalar { value, .. } => value.clone(),
            _ => String::new(),
        }
    }
}

enum ZiCOpenNode {
    Sequence {
        position: ZiCSourcePosition,
        anchor: usize,
        items: Vec<ZiCYamlNode>,
    },
    Mapping {
        position: ZiCSourcePosition,
        anchor: usize,
        entries: Vec<(String, ZiCYamlNode)>,
        key: Option<String>,
    },
}

/// Builds the first document of a parser event stream.
#[derive(Default)]
struct ZiCTreeBuilder {
    open: Vec<ZiCOpenNode>,
    anchors: HashMap<usize, ZiCYamlNode>,
    document: Option<ZiCYamlNode>,
    unresolved: Option<usize>,
}

impl ZiCTreeBuilder {
    fn attach(&mut self, node: ZiCYamlNode, anchor: usize) {
        // anchor ids start at 1
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.open.last_mut() {
            Some(ZiCOpenNode::Sequence { items, .. }) => items.push(node),
            Some(ZiCOpenNode::Mapping { entries, key, .. }) => match key.take() {
                Some(name) => entries.push((name, node)),
                None => *key = Some(node.key_text()),
            },
            None => {
                if self.document.is_none() {
                    self.document = Some(node);
                }
            }
        }
    }
}

impl MarkedEventReceiver for ZiCTreeBuilder {
    fn on_event(&mut self, event: Event, marker: Marker) {
        let position = ZiCSourcePosition::at(marker);
        match event {
            Event::Scalar(value, _, anchor, _) => {
                self.attach(ZiCYamlNode::Scalar { position, value }, anchor)
            }
            Event::Alias(id) => match self.anchors.get(&id).cloned() {
                Some(node) => self.attach(node, 0),
                None => self.unresolved = Some(id),
            },
            Event::SequenceStart(anchor, _) => self.open.push(ZiCOpenNode::Sequence {
                position,
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, _) => self.open.push(ZiCOpenNode::Mapping {
                position,
                anchor,
                entries: Vec::new(),
                key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.open.pop() {
                Some(ZiCOpenNode::Sequence {
                    position,
                    anchor,
                    items,
                }) => self.attach(ZiCYamlNode::Sequence { position, items }, anchor),
                Some(ZiCOpenNode::Mapping {
                    position,
                    anchor,
                    entries,
                    ..
                }) => self.attach(ZiCYamlNode::Mapping { position, entries }, anchor),
                None => {}
            },
            _ => {}
        }
    }
}

/// Positioned document tree of one configuration text.
///
/// Parsing once and locating many times keeps repeated lookups over the same
/// text cheap.
#[derive(Debug)]
pub struct ZiCYamlPositionIndex {
    root: ZiCYamlNode,
}

impl ZiCYamlPositionIndex {
    #[allow(non_snake_case)]
    pub fn ZiFParse(source: &str) -> Result<Self, ZiCLocateError> {
        if source.trim().is_empty() {
            return Err(ZiCLocateError::EmptyDocument);
        }

        let plain: serde_yaml::Value = serde_yaml::from_str(source)
            .map_err(|err| ZiCLocateError::Document(err.to_string()))?;
        match plain {
            serde_yaml::Value::Null => return Err(ZiCLocateError::EmptyDocument),
            serde_yaml::Value::Mapping(_) => {}
            _ => return Err(ZiCLocateError::RootNotMapping),
        }

        let mut builder = ZiCTreeBuilder::default();
        Parser::new_from_str(source)
            .load(&mut builder, false)
            .map_err(|err| ZiCLocateError::Document(err.to_string()))?;
        if let Some(id) = builder.unresolved {
            return Err(ZiCLocateError::Document(format!("unknown anchor id {}", id)));
        }

        match builder.document {
            Some(root @ ZiCYamlNode::Mapping { .. }) => Ok(ZiCYamlPositionIndex { root }),
            Some(_) => Err(ZiCLocateError::RootNotMapping),
            None => Err(ZiCLocateError::EmptyDocument),
        }
    }

    /// Parses `source` and locates one statement list in it.
    #[allow(non_snake_case)]
    pub fn ZiFLocateIn(
        source: &str,
        config_key: &str,
        list_field: &str,
        list_index: usize,
    ) -> Result<ZiCStatementSequence, ZiCLocateError> {
        Self::ZiFParse(source)?.ZiFLocate(config_key, list_field, list_index)
    }

    /// Locates entry `list_index` of the list under `config_key` (skipped
    /// when empty) and `list_field`.
    ///
    /// A scalar entry is a single flat statement. A mapping entry is a group
    /// whose `statements` list is returned.
    #[allow(non_snake_case)]
    pub fn ZiFLocate(
        &self,
        config_key: &str,
        list_field: &str,
        list_index: usize,
    ) -> Result<ZiCStatementSequence, ZiCLocateError> {
        let mut current = &self.root;
        for key in [config_key, list_field] {
            if key.is_empty() {
                continue;
            }
            if !matches!(current, ZiCYamlNode::Mapping { .. }) {
                return Err(ZiCLocateError::NotAMapping {
                    key: key.to_string(),
                });
            }
            current = current.get(key).ok_or_else(|| ZiCLocateError::KeyNotFound {
                key: key.to_string(),
            })?;
        }

        match current {
            ZiCYamlNode::Sequence { items, .. } => {
                let entry = items.get(list_index).ok_or(ZiCLocateError::GroupOutOfRange {
                    index: list_index,
                    len: items.len(),
                })?;
                match entry {
                    ZiCYamlNode::Scalar { position, .. } => Ok(ZiCStatementSequence {
                        position: *position,
                        flat: true,
                        items: vec![*position],
                    }),
                    ZiCYamlNode::Mapping { .. } => group_statements(entry, list_index),
                    ZiCYamlNode::Sequence { .. } => Err(ZiCLocateError::NotAMapping {
                        key: STATEMENTS_KEY.to_string(),
                    }),
                }
            }
            ZiCYamlNode::Mapping { .. } if !list_field.is_empty() => {
                group_statements(current, list_index)
            }
            _ => Err(ZiCLocateError::NotASequence {
                key: list_field.to_string(),
            }),
        }
    }
}

fn group_statements(group: &ZiCYamlNode, index: usize) -> Result<ZiCStatementSequence, ZiCLocateError> {
    let statements = group
        .get(STATEMENTS_KEY)
        .ok_or(ZiCLocateError::MissingStatements { index })?;
    match statements {
        ZiCYamlNode::Sequence { position, items } => Ok(ZiCStatementSequence {
            position: *position,
            flat: false,
            items: items.iter().map(ZiCYamlNode::position).collect(),
        }),
        _ => Err(ZiCLocateError::NotASequence {
            key: STATEMENTS_KEY.to_string(),
        }),
    }
}
