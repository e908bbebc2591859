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

//! # DSL (Domain Specific Language) Module
//!
//! Editor support for the transformation statement language. Statement
//! grammar and evaluation belong to the external engine; this module only
//! tokenizes statements to describe the cursor position for autocomplete.
//!
//! ## Architecture
//!
//! - **Lexer** ([lexer.rs](lexer/index.html)): the statement token grammar
//! - **Completion** ([completion.rs](completion/index.html)): derives a
//!   [`ZiCCompletionContext`] from the tokens of a partial statement
//!
//! ## Example
//!
//! ```rust
//! use zi_playground::dsl::ZiCCompletionContextAnalyzer;
//!
//! let ctx = ZiCCompletionContextAnalyzer::ZiFAnalyze("replace_all(attributes, ");
//! assert!(ctx.in_function_args);
//! assert_eq!(ctx.function_name, "replace_all");
//! assert_eq!(ctx.arg_index, 1);
//! ```

pub mod completion;
pub mod lexer;

pub use completion::{ZiCCompletionContext, ZiCCompletionContextAnalyzer};
pub use lexer::{ZiCDSLLexer, ZiCToken, ZiCTokenKind};
