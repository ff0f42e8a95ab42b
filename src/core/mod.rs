// Copyright 2026 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Compiler core: tokenizer, parser, AST, and key validation
//!
//! Everything in this module is pure and synchronous — one input buffer
//! in, a list of hotkey trees out. Code generation lives in
//! [`crate::format`]; file and terminal I/O live in the binary.

pub mod ast;
pub mod parser;
pub mod token;
pub mod validator;

mod keys;

pub use ast::{AstKind, Hotkey, Part, DEFAULT_SYSTEM};
pub use parser::{parse, ParseError};
pub use token::{tokenize, Token, TokenKind, TokenStream};
pub use validator::{KeycodeDictionary, ValidationError, Validator};

#[cfg(test)]
mod tests;
