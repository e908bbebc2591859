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

//! # Statement Lexer
//!
//! Token grammar of the transformation statement language. Rules are tried
//! in declaration order at the current position and the first one matching
//! wins, so `Float` is preferred over `Int`, keywords over identifiers and
//! `==` over `=`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiCError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiCTokenKind {
    Bytes,
    Float,
    Int,
    String,
    OpNot,
    OpOr,
    OpAnd,
    Where,
    OpComparison,
    OpAddSub,
    OpMultDiv,
    Boolean,
    Equal,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Dot,
    LBracket,
    RBracket,
    Uppercase,
    Lowercase,
    Whitespace,
}

/// Token rules, in matching priority order. Digit, space and word-boundary
/// classes are ASCII only.
const ZI_TOKEN_RULES: &[(ZiCTokenKind, &str)] = &[
    (ZiCTokenKind::Bytes, r"0x[a-fA-F0-9]+"),
    (ZiCTokenKind::Float, r"[-+]?[0-9]*\.[0-9]+([eE][-+]?[0-9]+)?"),
    (ZiCTokenKind::Int, r"[-+]?[0-9]+"),
    (ZiCTokenKind::String, r#""(\\.|[^\\"])*""#),
    (ZiCTokenKind::OpNot, r"(?-u:\b)(not)(?-u:\b)"),
    (ZiCTokenKind::OpOr, r"(?-u:\b)(or)(?-u:\b)"),
    (ZiCTokenKind::OpAnd, r"(?-u:\b)(and)(?-u:\b)"),
    (ZiCTokenKind::Where, r"(?-u:\b)(where)(?-u:\b)"),
    (ZiCTokenKind::OpComparison, r"==|!=|>=|<=|>|<"),
    (ZiCTokenKind::OpAddSub, r"\+|\-"),
    (ZiCTokenKind::OpMultDiv, r"\/|\*"),
    (ZiCTokenKind::Boolean, r"(?-u:\b)(true|false)(?-u:\b)"),
    (ZiCTokenKind::Equal, r"="),
    (ZiCTokenKind::LParen, r"\("),
    (ZiCTokenKind::RParen, r"\)"),
    (ZiCTokenKind::LBrace, r"\{"),
    (ZiCTokenKind::RBrace, r"\}"),
    (ZiCTokenKind::Colon, r"\:"),
    (ZiCTokenKind::Comma, r","),
    (ZiCTokenKind::Dot, r"\."),
    (ZiCTokenKind::LBracket, r"\["),
    (ZiCTokenKind::RBracket, r"\]"),
    (ZiCTokenKind::Uppercase, r"[A-Z][a-zA-Z0-9_]*"),
    (ZiCTokenKind::Lowercase, r"[a-z][a-z0-9_]*"),
    (ZiCTokenKind::Whitespace, r"[\t\n\f\r ]+"),
];

impl ZiCTokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiCTokenKind::Bytes => "Bytes",
            ZiCTokenKind::Float => "Float",
            ZiCTokenKind::Int => "Int",
            ZiCTokenKind::String => "String",
            ZiCTokenKind::OpNot => "OpNot",
            ZiCTokenKind::OpOr => "OpOr",
            ZiCTokenKind::OpAnd => "OpAnd",
            ZiCTokenKind::Where => "Where",
            ZiCTokenKind::OpComparison => "OpComparison",
            ZiCTokenKind::OpAddSub => "OpAddSub",
            ZiCTokenKind::OpMultDiv => "OpMultDiv",
            ZiCTokenKind::Boolean => "Boolean",
            ZiCTokenKind::Equal => "Equal",
            ZiCTokenKind::LParen => "LParen",
            ZiCTokenKind::RParen => "RParen",
            ZiCTokenKind::LBrace => "LBrace",
            ZiCTokenKind::RBrace => "RBrace",
            ZiCTokenKind::Colon => "Colon",
            ZiCTokenKind::Comma => "Comma",
            ZiCTokenKind::Dot => "Dot",
            ZiCTokenKind::LBracket => "LBracket",
            ZiCTokenKind::RBracket => "RBracket",
            ZiCTokenKind::Uppercase => "Uppercase",
            ZiCTokenKind::Lowercase => "Lowercase",
            ZiCTokenKind::Whitespace => "Whitespace",
        }
    }

    /// Identifier tokens: type names and function/path names.
    pub fn is_identifier(&self) -> bool {
        matches!(self, ZiCTokenKind::Uppercase | ZiCTokenKind::Lowercase)
    }
}

impl fmt::Display for ZiCTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiCToken {
    pub kind: ZiCTokenKind,
    pub value: String,
    /// Byte offset of the token in the input.
    pub offset: usize,
}

/// Anchored tokenizer over the statement grammar.
#[derive(Debug)]
pub struct ZiCDSLLexer {
    pattern: Regex,
}

static ZI_SHARED_LEXER: OnceLock<std::result::Result<ZiCDSLLexer, String>> = OnceLock::new();

impl ZiCDSLLexer {
    #[allow(non_snake_case)]
    pub fn ZiFNew() -> Result<Self> {
        let alternatives: Vec<String> = ZI_TOKEN_RULES
            .iter()
            .map(|(kind, rule)| format!("(?P<{}>{})", kind.as_str(), rule))
            .collect();
        let pattern = Regex::new(&format!("^(?:{})", alternatives.join("|")))
            .map_err(|err| ZiCError::internal(format!("invalid token grammar: {}", err)))?;
        Ok(ZiCDSLLexer { pattern })
    }

    /// Lexer compiled once per process.
    #[allow(non_snake_case)]
    pub fn ZiFShared() -> Result<&'static ZiCDSLLexer> {
        ZI_SHARED_LEXER
            .get_or_init(|| ZiCDSLLexer::ZiFNew().map_err(|err| err.to_string()))
            .as_ref()
            .map_err(|err| ZiCError::internal(err.clone()))
    }

    /// Splits `input` into tokens, whitespace included.
    ///
    /// Fails on the first position no rule matches.
    #[allow(non_snake_case)]
    pub fn ZiFTokenize(&self, input: &str) -> Result<Vec<ZiCToken>> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        while offset < input.len() {
            let rest = &input[offset..];
            let captures = self.pattern.captures(rest).ok_or_else(|| {
                ZiCError::parse(format!("invalid input text at offset {}", offset))
            })?;

            let (kind, matched) = ZI_TOKEN_RULES
                .iter()
                .find_map(|(kind, _)| captures.name(kind.as_str()).map(|m| (*kind, m)))
                .ok_or_else(|| ZiCError::parse(format!("invalid input text at offset {}", offset)))?;
            if matched.as_str().is_empty() {
                return Err(ZiCError::parse(format!("empty token at offset {}", offset)));
            }

            tokens.push(ZiCToken {
                kind,
                value: matched.as_str().to_string(),
                offset,
            });
            offset += matched.end();
        }
        Ok(tokens)
    }
}
