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

//! src/core/parser.rs
//!
//! State-machine parser for the hotkey description language
//!
//! Consumes the token stream produced by [`crate::core::token::tokenize`]
//! and builds a list of [`Hotkey`] records. The parser runs as a state
//! machine over four states:
//!
//! - `Root`: between hotkeys; skips blanks and comments
//! - `Binding`: the key-combination side, handed to the recursive binding
//!   sub-parser
//! - `Flags`: the optional `| system[value ...]` section
//! - `Command`: one or more command lines, optionally `system |` tagged
//!
//! The parse is all-or-nothing per input buffer: the first unexpected
//! token aborts with a positioned error and no partial result survives.
//!
//! # Grammar
//!
//! ```text
//! hotkey   := binding ('|' flags)? (';' | NEWLINE) command+
//! binding  := element (('+' | WS)* element)*
//! element  := STRING ('{' alt (',' alt)* '}')?
//! flags    := NAME '[' value (WS value)* ']' (WS NAME '[' ... ])*
//! command  := (SYS_NAME '|')? text_with_optional_braces NEWLINE
//! ```
//!
//! Comments run from `#` to end of line. A blank line ends a hotkey.

use thiserror::Error;

use crate::core::ast::{Hotkey, Part, DEFAULT_SYSTEM};
use crate::core::token::{tokenize, Token, TokenKind, TokenStream};

/// Parse errors with position context.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// A token that no rule in the current state accepts.
    #[error("unexpected token '{token}' at {position} in {state} state")]
    UnexpectedToken {
        token: String,
        position: String,
        state: &'static str,
    },

    /// The input ended while a state still expected more tokens.
    #[error("unexpected end of input in {state} state")]
    UnexpectedEof { state: &'static str },

    /// A `{` or `[` group that never closes.
    #[error("unterminated group opened at {position}")]
    UnterminatedGroup { position: String },

    /// The same system was flagged twice on one hotkey.
    #[error("flag '{0}' already exists")]
    DuplicateFlag(String),

    /// A binding with no command line after it.
    #[error("expected a command after hotkey '{binding}'")]
    MissingCommand { binding: String },
}

/// The stage the state machine is in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParserState {
    Root,
    Binding,
    Flags,
    Command,
}

impl ParserState {
    fn name(self) -> &'static str {
        match self {
            ParserState::Root => "root",
            ParserState::Binding => "binding",
            ParserState::Flags => "flags",
            ParserState::Command => "command",
        }
    }
}

fn unexpected(token: &Token, state: ParserState) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.text().to_string(),
        position: token.position(),
        state: state.name(),
    }
}

/// Parse source text into a list of hotkeys.
///
/// # Example
/// ```
/// let hotkeys = hotkeyc::parse("super + w; firefox")?;
/// assert_eq!(hotkeys.len(), 1);
/// assert_eq!(hotkeys[0].binding.to_string(), "super + w");
/// # Ok::<(), hotkeyc::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Vec<Hotkey>, ParseError> {
    let mut stream = tokenize(input);
    let mut hotkeys = Vec::new();
    let mut state = ParserState::Root;

    while stream.advance() {
        state = match state {
            ParserState::Root => state_root(&mut stream)?,
            ParserState::Binding => state_binding(&mut stream, &mut hotkeys)?,
            ParserState::Flags => state_flags(&mut stream, &mut hotkeys)?,
            ParserState::Command => state_command(&mut stream, &mut hotkeys)?,
        };
    }

    // Every binding must be followed by at least one command line.
    if matches!(state, ParserState::Binding | ParserState::Flags) {
        return Err(ParseError::UnexpectedEof { state: state.name() });
    }
    if let Some(hotkey) = hotkeys.last() {
        if hotkey.commands.is_empty() {
            return Err(ParseError::MissingCommand {
                binding: hotkey.binding.to_string(),
            });
        }
    }

    log::debug!("parsed {} hotkeys", hotkeys.len());
    Ok(hotkeys)
}

/// Root state: skip blank runs and comments, step back on content so the
/// binding state sees the token again.
fn state_root(stream: &mut TokenStream) -> Result<ParserState, ParseError> {
    let token = stream.current();
    match token.kind() {
        TokenKind::Empty | TokenKind::NewLine => Ok(ParserState::Root),
        TokenKind::Comment => {
            stream.take_until(&[TokenKind::NewLine]);
            Ok(ParserState::Root)
        }
        TokenKind::String | TokenKind::MultiOpen => {
            stream.step_back();
            Ok(ParserState::Binding)
        }
        _ => Err(unexpected(&token, ParserState::Root)),
    }
}

/// Binding state: hand everything up to the terminator to the binding
/// sub-parser and open a new hotkey record for the following states.
fn state_binding(
    stream: &mut TokenStream,
    hotkeys: &mut Vec<Hotkey>,
) -> Result<ParserState, ParseError> {
    let (span, terminator) = stream.take_until(&[
        TokenKind::Semicolon,
        TokenKind::NewLine,
        TokenKind::System,
    ]);

    let mut parts = Vec::new();
    parse_binding_into(&mut parts, &mut TokenStream::new(span))?;
    hotkeys.push(Hotkey::new(Part::binding(parts)));

    match terminator.kind() {
        TokenKind::Semicolon | TokenKind::NewLine => Ok(ParserState::Command),
        TokenKind::System => Ok(ParserState::Flags),
        TokenKind::Eof => Err(ParseError::UnexpectedEof {
            state: ParserState::Binding.name(),
        }),
        _ => Err(unexpected(&terminator, ParserState::Binding)),
    }
}

/// Flags state: `name[value value ...]` groups, written without spaces
/// between the name and its bracket, until the line ends.
fn state_flags(
    stream: &mut TokenStream,
    hotkeys: &mut Vec<Hotkey>,
) -> Result<ParserState, ParseError> {
    let mut name = String::new();

    loop {
        let token = stream.current();
        match token.kind() {
            TokenKind::Empty | TokenKind::Eof => {}
            TokenKind::String => {
                name = token.text().to_string();
                let next = stream.peek();
                if next.kind() != TokenKind::FlagOpen {
                    return Err(unexpected(&next, ParserState::Flags));
                }
            }
            TokenKind::FlagOpen => {
                // move onto the first value token so the bracket itself is
                // not part of the value span
                stream.advance();
                let (span, terminator) = stream.take_until(&[TokenKind::FlagClose]);
                if terminator.kind() == TokenKind::Eof {
                    return Err(ParseError::UnterminatedGroup {
                        position: token.position(),
                    });
                }

                let mut values = Vec::new();
                for value in &span {
                    match value.kind() {
                        TokenKind::Empty | TokenKind::Eof => continue,
                        TokenKind::String => values.push(value.text().to_string()),
                        _ => return Err(unexpected(value, ParserState::Flags)),
                    }
                }

                let hotkey = hotkeys.last_mut().ok_or(ParseError::UnexpectedEof {
                    state: ParserState::Flags.name(),
                })?;
                if hotkey.flags.contains_key(&name) {
                    return Err(ParseError::DuplicateFlag(name));
                }
                hotkey.flags.insert(std::mem::take(&mut name), values);
            }
            TokenKind::NewLine | TokenKind::Semicolon => return Ok(ParserState::Command),
            _ => return Err(unexpected(&token, ParserState::Flags)),
        }

        if !stream.advance() {
            return Ok(ParserState::Command);
        }
    }
}

/// Command state: one command line, either `system | body` or a bare body
/// stored under the default system. A pipe with more than one non-blank
/// token before it is command text, not a system tag.
fn state_command(
    stream: &mut TokenStream,
    hotkeys: &mut Vec<Hotkey>,
) -> Result<ParserState, ParseError> {
    let (mut span, terminator) =
        stream.take_until(&[TokenKind::NewLine, TokenKind::System]);
    let mut system = DEFAULT_SYSTEM.to_string();

    if terminator.kind() == TokenKind::System {
        let tagged: Vec<&Token> = span
            .iter()
            .filter(|t| t.kind() != TokenKind::Empty)
            .collect();
        if tagged.len() == 1 {
            system = tagged[0].text().to_string();
            // move past the pipe and the blank run after it
            stream.skip_while(&[TokenKind::Empty]);
            if matches!(stream.current().kind(), TokenKind::NewLine | TokenKind::Eof) {
                span = Vec::new();
            } else {
                let (body, _) = stream.take_until(&[TokenKind::NewLine]);
                span = body;
            }
        } else {
            // the pipe belongs to the command text itself
            let (rest, _) = stream.take_until(&[TokenKind::NewLine]);
            span.extend(rest);
        }
    }

    let body: Vec<Token> = span
        .into_iter()
        .skip_while(|t| t.kind() == TokenKind::Empty)
        .collect();
    let mut parts = Vec::new();
    parse_command_into(&mut parts, &mut TokenStream::new(body))?;

    let hotkey = hotkeys.last_mut().ok_or(ParseError::UnexpectedEof {
        state: ParserState::Command.name(),
    })?;
    hotkey.commands.insert(system, Part::command(parts));

    // A blank line ends the hotkey; anything else is a further per-system
    // command line. Step back so the driver loop re-reads its first token.
    let (_, next) = stream.skip_while(&[TokenKind::Empty]);
    stream.step_back();
    if next.kind() == TokenKind::NewLine {
        Ok(ParserState::Root)
    } else {
        Ok(ParserState::Command)
    }
}

/// Recursive binding sub-parser.
///
/// Builds `Single` nodes for identifier runs, attaching immediately
/// adjacent `{...}` groups and suffix strings to the same single so that
/// `XF86Audio{Play,Pause}` stays one atomic key position. `Plus` and blank
/// tokens carry no meaning and are skipped. `Semicolon`, `NewLine` and
/// `MultiDivide` end the current recursion level.
fn parse_binding_into(
    parts: &mut Vec<Part>,
    stream: &mut TokenStream,
) -> Result<(), ParseError> {
    while stream.advance() {
        let token = stream.current();
        match token.kind() {
            TokenKind::String => {
                let mut single = vec![Part::String(token.text().to_string())];
                loop {
                    match stream.peek().kind() {
                        TokenKind::MultiOpen => {
                            stream.advance();
                            single.push(parse_binding_multiple(stream)?);
                        }
                        TokenKind::String => {
                            stream.advance();
                            single.push(Part::String(stream.current().text().to_string()));
                        }
                        _ => break,
                    }
                }
                parts.push(Part::Single(single));
            }
            TokenKind::MultiOpen => {
                parts.push(parse_binding_multiple(stream)?);
            }
            TokenKind::Plus | TokenKind::Empty => {}
            TokenKind::Semicolon | TokenKind::NewLine | TokenKind::MultiDivide => return Ok(()),
            _ => return Err(unexpected(&token, ParserState::Binding)),
        }
    }
    Ok(())
}

/// Parses a `{a,b,...}` group on the binding side. The cursor must be on
/// the opening brace. Each alternative is a full binding tree, so nested
/// `+` combinations and further groups are allowed inside.
fn parse_binding_multiple(stream: &mut TokenStream) -> Result<Part, ParseError> {
    let open = stream.current();
    let span = stream
        .take_balanced(TokenKind::MultiOpen, TokenKind::MultiClose)
        .ok_or(ParseError::UnterminatedGroup {
            position: open.position(),
        })?;

    let mut sub = TokenStream::new(span);
    let mut alternatives = Vec::new();
    loop {
        let mut parts = Vec::new();
        parse_binding_into(&mut parts, &mut sub)?;
        alternatives.push(Part::binding(normalize_placeholder(parts)));
        if sub.peek().kind() == TokenKind::Eof {
            break;
        }
    }

    Ok(Part::Multiple(alternatives))
}

/// `_` as an entire alternative is the conventional empty-alternative
/// placeholder; it expands to an empty string instead of the literal key.
fn normalize_placeholder(parts: Vec<Part>) -> Vec<Part> {
    if let [Part::Single(inner)] = parts.as_slice() {
        if let [Part::String(text)] = inner.as_slice() {
            if text == "_" {
                return vec![Part::Single(Vec::new())];
            }
        }
    }
    parts
}

/// Command sub-parser. Command text is opaque: every token passes through
/// as a literal leaf, except `{...}` groups which expand into raw-text
/// alternatives split on top-level commas. Nested braces stay literal.
fn parse_command_into(
    parts: &mut Vec<Part>,
    stream: &mut TokenStream,
) -> Result<(), ParseError> {
    while stream.advance() {
        let token = stream.current();
        match token.kind() {
            TokenKind::MultiOpen => {
                let span = stream
                    .take_balanced(TokenKind::MultiOpen, TokenKind::MultiClose)
                    .ok_or(ParseError::UnterminatedGroup {
                        position: token.position(),
                    })?;

                let mut alternatives = Vec::new();
                let mut depth = 0usize;
                let mut text = String::new();
                for inner in &span {
                    match inner.kind() {
                        TokenKind::MultiOpen => {
                            depth += 1;
                            text.push_str(inner.text());
                        }
                        TokenKind::MultiClose => {
                            depth = depth.saturating_sub(1);
                            text.push_str(inner.text());
                        }
                        TokenKind::MultiDivide if depth == 0 => {
                            alternatives.push(Part::String(std::mem::take(&mut text)));
                        }
                        _ => text.push_str(inner.text()),
                    }
                }
                alternatives.push(Part::String(text));

                parts.push(Part::Multiple(alternatives));
            }
            _ => parts.push(Part::String(token.text().to_string())),
        }
    }
    Ok(())
}
