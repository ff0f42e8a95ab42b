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

//! Tokenizer tests
//!
//! Tests for character classification, run merging, position tracking,
//! and the token-stream cursor operations the parser relies on.

use crate::core::token::{tokenize, TokenKind};

/// Drains a stream into (kind, text) pairs for shape assertions.
fn collect(input: &str) -> Vec<(TokenKind, String)> {
    let mut stream = tokenize(input);
    let mut out = Vec::new();
    while stream.advance() {
        let token = stream.current();
        out.push((token.kind(), token.text().to_string()));
    }
    out
}

#[test]
fn test_tokenize_merges_identifier_and_blank_runs() {
    assert_eq!(
        collect("a + b"),
        vec![
            (TokenKind::String, "a".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::Plus, "+".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "b".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_plain_words() {
    assert_eq!(
        collect("this is a test"),
        vec![
            (TokenKind::String, "this".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "is".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "a".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "test".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_unrecognised_bytes_become_other() {
    assert_eq!(
        collect("echo \"Hello there\""),
        vec![
            (TokenKind::String, "echo".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::Other, "\"".to_string()),
            (TokenKind::String, "Hello".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "there".to_string()),
            (TokenKind::Other, "\"".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_full_hotkey_line() {
    assert_eq!(
        collect("Super + XF86Audio{Play,Pause}"),
        vec![
            (TokenKind::String, "Super".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::Plus, "+".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "XF86Audio".to_string()),
            (TokenKind::MultiOpen, "{".to_string()),
            (TokenKind::String, "Play".to_string()),
            (TokenKind::MultiDivide, ",".to_string()),
            (TokenKind::String, "Pause".to_string()),
            (TokenKind::MultiClose, "}".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_system_and_flag_tokens() {
    assert_eq!(
        collect("w | hyprland[r]"),
        vec![
            (TokenKind::String, "w".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::System, "|".to_string()),
            (TokenKind::Empty, " ".to_string()),
            (TokenKind::String, "hyprland".to_string()),
            (TokenKind::FlagOpen, "[".to_string()),
            (TokenKind::String, "r".to_string()),
            (TokenKind::FlagClose, "]".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_never_fails_on_arbitrary_text() {
    // anything a shell command might contain must pass through
    let tokens = collect("notify-send \"50%\" && echo $HOME/.config 😀");
    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|(kind, _)| *kind != TokenKind::Eof));
}

#[test]
fn test_token_positions() {
    let mut stream = tokenize("ab\ncd");
    stream.advance();
    assert_eq!(stream.current().position(), "1:1");
    stream.advance(); // newline
    stream.advance();
    assert_eq!(stream.current().position(), "2:1");
}

#[test]
fn test_cursor_current_out_of_range_is_eof() {
    let mut stream = tokenize("a");
    assert_eq!(stream.current().kind(), TokenKind::Eof);
    assert!(stream.advance());
    assert_eq!(stream.current().kind(), TokenKind::String);
    assert!(!stream.advance());
    assert_eq!(stream.current().kind(), TokenKind::Eof);
}

#[test]
fn test_cursor_step_back_saturates() {
    let mut stream = tokenize("a b");
    stream.step_back();
    stream.step_back();
    assert!(stream.advance());
    assert_eq!(stream.current().text(), "a");
}

#[test]
fn test_peek_skipping_kinds() {
    let mut stream = tokenize("a + b");
    stream.advance(); // on "a"
    assert_eq!(stream.peek().kind(), TokenKind::Empty);
    assert_eq!(
        stream
            .peek_skipping(&[TokenKind::Empty, TokenKind::Plus])
            .text(),
        "b"
    );
    // peeking never moves the cursor
    assert_eq!(stream.current().text(), "a");
}

#[test]
fn test_take_until_returns_span_and_terminator() {
    let mut stream = tokenize("a + b; echo");
    stream.advance();
    let (span, terminator) = stream.take_until(&[TokenKind::Semicolon]);

    let texts: Vec<&str> = span.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["a", " ", "+", " ", "b"]);
    assert_eq!(terminator.kind(), TokenKind::Semicolon);
    // the cursor is left on the terminator
    assert_eq!(stream.current().kind(), TokenKind::Semicolon);
}

#[test]
fn test_take_until_exhausted_returns_eof_terminator() {
    let mut stream = tokenize("a b");
    stream.advance();
    let (span, terminator) = stream.take_until(&[TokenKind::Semicolon]);
    assert_eq!(span.len(), 3);
    assert_eq!(terminator.kind(), TokenKind::Eof);
}

#[test]
fn test_skip_while_lands_on_first_non_matching() {
    let mut stream = tokenize(";   echo");
    stream.advance(); // on ";"
    let (_, next) = stream.skip_while(&[TokenKind::Empty]);
    assert_eq!(next.text(), "echo");
    assert_eq!(stream.current().text(), "echo");
}

#[test]
fn test_take_balanced_handles_nesting() {
    let mut stream = tokenize("{a{x,y},b}");
    stream.advance(); // on "{"
    let span = stream
        .take_balanced(TokenKind::MultiOpen, TokenKind::MultiClose)
        .unwrap();

    let texts: Vec<&str> = span.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["a", "{", "x", ",", "y", "}", ",", "b"]);
    // the cursor is left on the matching close
    assert_eq!(stream.current().kind(), TokenKind::MultiClose);
    assert!(!stream.advance());
}

#[test]
fn test_take_balanced_unterminated_is_none() {
    let mut stream = tokenize("{a,b");
    stream.advance();
    assert!(stream
        .take_balanced(TokenKind::MultiOpen, TokenKind::MultiClose)
        .is_none());
}
