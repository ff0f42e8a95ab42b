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

//! Parser state-machine tests
//!
//! Tests for binding/flag/command parsing, the recursive sub-parsers,
//! multi-line per-system commands, and positioned error reporting.

use crate::core::ast::{Part, DEFAULT_SYSTEM};
use crate::core::parser::{parse, ParseError};

#[test]
fn test_parse_simple_binding_and_command() {
    let hotkeys = parse("a + b + c; echo hello").unwrap();

    assert_eq!(hotkeys.len(), 1);
    assert_eq!(hotkeys[0].binding.to_string(), "a + b + c");
    assert_eq!(
        hotkeys[0].commands[DEFAULT_SYSTEM].to_string(),
        "echo hello"
    );
    assert!(hotkeys[0].flags.is_empty());
}

#[test]
fn test_parse_newline_separates_binding_and_command() {
    let hotkeys = parse("super + w\nfirefox").unwrap();

    assert_eq!(hotkeys.len(), 1);
    assert_eq!(hotkeys[0].binding.to_string(), "super + w");
    assert_eq!(hotkeys[0].commands[DEFAULT_SYSTEM].to_string(), "firefox");
}

#[test]
fn test_parse_flags() {
    let hotkeys = parse("a + b + c | test[left]; echo hello").unwrap();

    assert_eq!(hotkeys.len(), 1);
    assert_eq!(hotkeys[0].flags["test"], vec!["left".to_string()]);
    assert_eq!(
        hotkeys[0].commands[DEFAULT_SYSTEM].to_string(),
        "echo hello"
    );
}

#[test]
fn test_parse_multiple_flags_with_multiple_values() {
    let hotkeys = parse("w | hyprland[e l] sxhkd[r]; ls").unwrap();

    assert_eq!(
        hotkeys[0].flags["hyprland"],
        vec!["e".to_string(), "l".to_string()]
    );
    assert_eq!(hotkeys[0].flags["sxhkd"], vec!["r".to_string()]);
}

#[test]
fn test_parse_system_tagged_command() {
    let hotkeys = parse("a + b + c | test[right]; abc | echo hello").unwrap();

    assert_eq!(hotkeys.len(), 1);
    assert_eq!(hotkeys[0].commands["abc"].to_string(), "echo hello");
    assert!(!hotkeys[0].commands.contains_key(DEFAULT_SYSTEM));
}

#[test]
fn test_parse_expandable_single_stays_atomic() {
    let hotkeys = parse("super + XF86Audio{Play,Pause}; playerctl").unwrap();

    let binding = &hotkeys[0].binding;
    assert_eq!(binding.to_string(), "super + XF86Audio{Play,Pause}");

    // the brace group is inside the second single, not a separate element
    let children = binding.children();
    assert_eq!(children.len(), 2);
    let Part::Single(parts) = &children[1] else {
        panic!("expected a single, got {:?}", children[1]);
    };
    assert!(matches!(&parts[0], Part::String(s) if s == "XF86Audio"));
    assert!(matches!(&parts[1], Part::Multiple(alts) if alts.len() == 2));
}

#[test]
fn test_parse_bare_group_alternatives_are_bindings() {
    let hotkeys = parse("{super + a,ctrl + b}; ls").unwrap();

    let children = hotkeys[0].binding.children();
    assert_eq!(children.len(), 1);
    let Part::Multiple(alternatives) = &children[0] else {
        panic!("expected a multiple, got {:?}", children[0]);
    };
    assert_eq!(alternatives[0].to_string(), "super + a");
    assert_eq!(alternatives[1].to_string(), "ctrl + b");
}

#[test]
fn test_parse_nested_groups() {
    let hotkeys = parse("super + {a{x,y},b}; ls").unwrap();

    let children = hotkeys[0].binding.children();
    let Part::Multiple(alternatives) = &children[1] else {
        panic!("expected a multiple, got {:?}", children[1]);
    };
    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0].to_string(), "a{x,y}");
    assert_eq!(alternatives[1].to_string(), "b");
}

#[test]
fn test_parse_empty_alternative_placeholder() {
    let hotkeys = parse("super + {_,shift} + w; ls").unwrap();

    let children = hotkeys[0].binding.children();
    let Part::Multiple(alternatives) = &children[1] else {
        panic!("expected a multiple, got {:?}", children[1]);
    };
    assert_eq!(alternatives.len(), 2);
    // the `_` placeholder expands to nothing, not to a literal underscore
    assert_eq!(alternatives[0].to_string(), "");
    assert_eq!(alternatives[1].to_string(), "shift");
}

#[test]
fn test_parse_command_group_alternatives_are_raw_text() {
    let hotkeys = parse("super + a; playerctl {play,pause}").unwrap();

    let command = &hotkeys[0].commands[DEFAULT_SYSTEM];
    assert_eq!(command.to_string(), "playerctl {play,pause}");

    let multiple = command
        .children()
        .iter()
        .find(|part| matches!(part, Part::Multiple(_)));
    let Some(Part::Multiple(alternatives)) = multiple else {
        panic!("expected a multiple in the command body");
    };
    assert!(matches!(&alternatives[0], Part::String(s) if s == "play"));
    assert!(matches!(&alternatives[1], Part::String(s) if s == "pause"));
}

#[test]
fn test_parse_command_preserves_arbitrary_shell_text() {
    let hotkeys = parse("a; notify-send \"vol: $(pamixer --get-volume)%\"").unwrap();

    assert_eq!(
        hotkeys[0].commands[DEFAULT_SYSTEM].to_string(),
        "notify-send \"vol: $(pamixer --get-volume)%\""
    );
}

#[test]
fn test_parse_pipe_inside_command_is_not_a_system_tag() {
    let hotkeys = parse("a; echo hi | grep h").unwrap();

    assert_eq!(
        hotkeys[0].commands[DEFAULT_SYSTEM].to_string(),
        "echo hi | grep h"
    );
}

#[test]
fn test_parse_multiple_command_lines_per_hotkey() {
    let input = "super + w | test[right]; abc | playerctl {play,pause}\n\
                 def | echo \"{play,pause}\"\n\
                 echo \"not implemented\"";
    let hotkeys = parse(input).unwrap();

    assert_eq!(hotkeys.len(), 1);
    let commands = &hotkeys[0].commands;
    assert_eq!(commands.len(), 3);
    assert_eq!(commands["abc"].to_string(), "playerctl {play,pause}");
    assert_eq!(commands["def"].to_string(), "echo \"{play,pause}\"");
    assert_eq!(
        commands[DEFAULT_SYSTEM].to_string(),
        "echo \"not implemented\""
    );
}

#[test]
fn test_parse_blank_line_separates_hotkeys() {
    let hotkeys = parse("a; ls\n\nb; pwd").unwrap();

    assert_eq!(hotkeys.len(), 2);
    assert_eq!(hotkeys[0].binding.to_string(), "a");
    assert_eq!(hotkeys[1].binding.to_string(), "b");
}

#[test]
fn test_parse_skips_comments() {
    let input = "# media keys\nXF86AudioPlay; playerctl play\n\n# and another\na; ls";
    let hotkeys = parse(input).unwrap();

    assert_eq!(hotkeys.len(), 2);
    assert_eq!(hotkeys[0].binding.to_string(), "XF86AudioPlay");
}

#[test]
fn test_parse_unexpected_token_carries_position_and_state() {
    let err = parse("a + ]; ls").unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            token: "]".to_string(),
            position: "1:5".to_string(),
            state: "binding",
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected token ']' at 1:5 in binding state"
    );
}

#[test]
fn test_parse_duplicate_flag_is_an_error() {
    let err = parse("a | test[left] test[right]; ls").unwrap_err();
    assert_eq!(err, ParseError::DuplicateFlag("test".to_string()));
}

#[test]
fn test_parse_flag_name_must_touch_bracket() {
    assert!(matches!(
        parse("a | test [left]; ls"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_parse_unterminated_group_is_an_error() {
    assert!(matches!(
        parse("super + {a,b; ls"),
        Err(ParseError::UnterminatedGroup { .. })
    ));
    assert!(matches!(
        parse("a | test[left; ls"),
        Err(ParseError::UnterminatedGroup { .. })
    ));
}

#[test]
fn test_parse_binding_without_command_is_an_error() {
    assert!(matches!(
        parse("super + w"),
        Err(ParseError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        parse("super + w\n"),
        Err(ParseError::MissingCommand { .. })
    ));
}

#[test]
fn test_parse_empty_input_yields_no_hotkeys() {
    assert_eq!(parse("").unwrap().len(), 0);
    assert_eq!(parse("\n\n# just a comment\n").unwrap().len(), 0);
}

#[test]
fn test_parse_round_trips_unexpanded_text() {
    let hotkeys = parse("super + w; firefox --new-window").unwrap();

    assert_eq!(hotkeys[0].binding.to_string(), "super + w");
    assert_eq!(
        hotkeys[0].commands[DEFAULT_SYSTEM].to_string(),
        "firefox --new-window"
    );
}
