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

//! src/core/token.rs
//!
//! Tokenizer for the hotkey description language
//!
//! Turns raw source text into a flat stream of positioned tokens. The
//! tokenizer has no grammar knowledge: it only classifies characters and
//! merges adjacent characters of the same classification into one token.
//! Characters it does not recognise become [`TokenKind::Other`] instead of
//! failing, because command bodies may contain arbitrary shell text that
//! must survive the round trip untouched.
//!
//! Whitespace is preserved as [`TokenKind::Empty`] tokens rather than
//! discarded — command bodies need their exact spacing back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single token.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TokenKind {
    /// Sentinel returned when the cursor is out of range.
    Eof,
    /// A run of identifier characters: `[A-Za-z0-9_-]+`
    String,
    /// A run of spaces and tabs
    Empty,
    /// `+`
    Plus,
    /// `#`
    Comment,
    /// `\n`
    NewLine,
    /// `;`
    Semicolon,
    /// `{`
    MultiOpen,
    /// `}`
    MultiClose,
    /// `,`
    MultiDivide,
    /// `|`
    System,
    /// `[`
    FlagOpen,
    /// `]`
    FlagClose,
    /// Any other character, passed through verbatim
    Other,
}

/// One token with its source position.
///
/// Positions are tracked per character: `line` starts at 1 and `column`
/// resets on every newline. A merged run keeps the position of its first
/// character.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
    value: String,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            value: value.into(),
        }
    }

    /// The EOF sentinel handed out when a cursor runs past the end.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            line: 0,
            column: 0,
            value: String::new(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    /// Position formatted as `line:column` for diagnostics.
    pub fn position(&self) -> String {
        format!("{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Tokenize source text into a cursor-backed stream. Never fails.
pub fn tokenize(input: &str) -> TokenStream {
    let mut tokens: Vec<Token> = Vec::new();
    let mut line = 1usize;
    let mut column = 0usize;

    for ch in input.chars() {
        column += 1;
        if ch == '\n' {
            line += 1;
            column = 0;
        }

        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '-' => {
                accumulate(&mut tokens, ch, TokenKind::String, line, column);
            }
            ' ' | '\t' => {
                accumulate(&mut tokens, ch, TokenKind::Empty, line, column);
            }
            _ => {
                let kind = match ch {
                    '+' => TokenKind::Plus,
                    '#' => TokenKind::Comment,
                    '\n' => TokenKind::NewLine,
                    ';' => TokenKind::Semicolon,
                    '{' => TokenKind::MultiOpen,
                    '}' => TokenKind::MultiClose,
                    ',' => TokenKind::MultiDivide,
                    '|' => TokenKind::System,
                    '[' => TokenKind::FlagOpen,
                    ']' => TokenKind::FlagClose,
                    _ => TokenKind::Other,
                };
                tokens.push(Token::new(ch.to_string(), kind, line, column));
            }
        }
    }

    log::debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    TokenStream::new(tokens)
}

/// Extends the previous token when it has the same kind, otherwise starts
/// a new one. Only `String` and `Empty` runs merge.
fn accumulate(tokens: &mut Vec<Token>, ch: char, kind: TokenKind, line: usize, column: usize) {
    if let Some(last) = tokens.last_mut() {
        if last.kind == kind {
            last.value.push(ch);
            return;
        }
    }
    tokens.push(Token::new(ch.to_string(), kind, line, column));
}

/// Cursor over a token array.
///
/// The cursor starts one slot before the first token, so the first
/// [`TokenStream::advance`] lands on index 0. Reading out of range yields
/// the EOF sentinel instead of panicking, which lets the parser treat
/// "ran out of input" like any other terminator.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index: isize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: -1 }
    }

    /// Moves to the next token. Returns false once the stream is exhausted.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        (self.index as usize) < self.tokens.len()
    }

    /// The token under the cursor, or the EOF sentinel.
    pub fn current(&self) -> Token {
        if self.index < 0 {
            return Token::eof();
        }
        self.tokens
            .get(self.index as usize)
            .cloned()
            .unwrap_or_else(Token::eof)
    }

    /// Moves the cursor back one token, saturating at the pre-start slot.
    pub fn step_back(&mut self) {
        self.index -= 1;
        if self.index < -1 {
            self.index = -1;
        }
    }

    /// The next token without moving the cursor.
    pub fn peek(&self) -> Token {
        self.peek_skipping(&[])
    }

    /// The next token whose kind is not in `ignore`, without moving the
    /// cursor.
    pub fn peek_skipping(&self, ignore: &[TokenKind]) -> Token {
        let mut i = self.index + 1;
        while i >= 0 && (i as usize) < self.tokens.len() {
            let token = &self.tokens[i as usize];
            if !ignore.contains(&token.kind()) {
                return token.clone();
            }
            i += 1;
        }
        Token::eof()
    }

    /// Collects the current token and everything up to the first token of
    /// one of the given kinds. The terminator is consumed (the cursor is
    /// left on it) but not part of the span; it is returned separately and
    /// is the EOF sentinel when the stream ran out first.
    pub fn take_until(&mut self, kinds: &[TokenKind]) -> (Vec<Token>, Token) {
        let mut span = vec![self.current()];
        while self.advance() {
            let token = self.current();
            if kinds.contains(&token.kind()) {
                break;
            }
            span.push(token);
        }
        (span, self.current())
    }

    /// Collects the current token and any following tokens of the given
    /// kinds, leaving the cursor on the first token that does not match.
    /// Used to skip over blank runs.
    pub fn skip_while(&mut self, kinds: &[TokenKind]) -> (Vec<Token>, Token) {
        let mut span = vec![self.current()];
        while self.advance() {
            let token = self.current();
            if !kinds.contains(&token.kind()) {
                break;
            }
            span.push(token);
        }
        (span, self.current())
    }

    /// Collects the span between the current `open` token and its matching
    /// `close` token, counting nesting depth. The cursor is left on the
    /// matching close. Returns `None` when the stream ends before the
    /// group is closed.
    pub fn take_balanced(&mut self, open: TokenKind, close: TokenKind) -> Option<Vec<Token>> {
        let mut depth = 1usize;
        let mut span = Vec::new();
        while self.advance() {
            let token = self.current();
            if token.kind() == open {
                depth += 1;
            } else if token.kind() == close {
                depth -= 1;
                if depth == 0 {
                    return Some(span);
                }
            }
            span.push(token);
        }
        None
    }
}
