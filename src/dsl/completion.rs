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

//! # Completion Context
//!
//! Single pass over the tokens of a partially typed statement, deriving where
//! the cursor (assumed at the end) sits. Invalid input is expected here and
//! never reported as an error.

use serde::{Deserialize, Serialize};

use crate::dsl::lexer::{ZiCDSLLexer, ZiCToken, ZiCTokenKind};

/// Cursor context used to drive autocomplete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiCCompletionContext {
    /// Inside the arguments of an unclosed call.
    pub in_function_args: bool,
    /// Name of the innermost unclosed call, empty for grouping parens.
    pub function_name: String,
    /// 0-based argument index within that call.
    pub arg_index: usize,
    pub after_dot: bool,
    /// After a `where` keyword, with parens balanced back to its depth.
    pub after_where: bool,
    /// No token other than whitespace was seen.
    pub at_statement_start: bool,
    /// Kind name of the last non-whitespace token.
    pub last_token: String,
    pub paren_depth: usize,
}

impl Default for ZiCCompletionContext {
    fn default() -> Self {
        ZiCCompletionContext {
            in_function_args: false,
            function_name: String::new(),
            arg_index: 0,
            after_dot: false,
            after_where: false,
            at_statement_start: true,
            last_token: String::new(),
            paren_depth: 0,
        }
    }
}

struct ZiCCallFrame {
    name: String,
    arg_index: usize,
}

pub struct ZiCCompletionContextAnalyzer;

impl ZiCCompletionContextAnalyzer {
    /// Analyzes `statement` as typed so far.
    ///
    /// Falls back to the default context when the text cannot be tokenized.
    #[allow(non_snake_case)]
    pub fn ZiFAnalyze(statement: &str) -> ZiCCompletionContext {
        if statement.is_empty() {
            return ZiCCompletionContext::default();
        }

        let tokens = match ZiCDSLLexer::ZiFShared().and_then(|lexer| lexer.ZiFTokenize(statement)) {
            Ok(tokens) => tokens,
            Err(_) => return ZiCCompletionContext::default(),
        };

        Self::ZiFAnalyzeTokens(&tokens)
    }

    #[allow(non_snake_case)]
    pub fn ZiFAnalyzeTokens(tokens: &[ZiCToken]) -> ZiCCompletionContext {
        let mut ctx = ZiCCompletionContext::default();
        let mut calls: Vec<ZiCCallFrame> = Vec::new();
        let mut last: Option<&ZiCToken> = None;
        let mut where_depth: Option<usize> = None;

        for token in tokens {
            if token.kind == ZiCTokenKind::Whitespace {
                continue;
            }
            ctx.at_statement_start = false;

            match token.kind {
                ZiCTokenKind::LParen => {
                    let name = last
                        .filter(|prev| prev.kind.is_identifier())
                        .map(|prev| prev.value.clone())
                        .unwrap_or_default();
                    calls.push(ZiCCallFrame { name, arg_index: 0 });
                    ctx.paren_depth += 1;
                }
                ZiCTokenKind::RParen => {
                    calls.pop();
                    ctx.paren_depth = ctx.paren_depth.saturating_sub(1);
                }
                ZiCTokenKind::Comma => {
                    if let Some(top) = calls.last_mut() {
                        top.arg_index += 1;
                    }
                }
                ZiCTokenKind::Where => where_depth = Some(ctx.paren_depth),
                _ => {}
            }
            last = Some(token);
        }

        if let Some(top) = calls.last() {
            ctx.in_function_args = true;
            ctx.function_name = top.name.clone();
            ctx.arg_index = top.arg_index;
        }

        if let Some(last) = last {
            ctx.after_dot = last.kind == ZiCTokenKind::Dot;
            ctx.last_token = last.kind.as_str().to_string();
        }

        ctx.after_where = where_depth == Some(ctx.paren_depth) && !ctx.in_function_args;
        ctx
    }
}
