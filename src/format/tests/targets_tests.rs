//! Built-in target table tests
//!
//! Full-pipeline tests: parse, validate, then format with the shipped
//! target tables and check the emitted config lines.

use crate::core::parser::parse;
use crate::core::validator::{KeycodeDictionary, Validator};
use crate::format::engine::Formatter;
use crate::format::targets;

fn compile(input: &str, target: &str) -> Vec<String> {
    let mut hotkeys = parse(input).unwrap();
    Validator::new(KeycodeDictionary::new())
        .validate(&mut hotkeys)
        .unwrap();
    let host = targets::builtin(target).unwrap();
    Formatter::new(target, host).format(&hotkeys).unwrap()
}

#[test]
fn test_builtin_lookup() {
    assert!(targets::builtin("sxhkd").is_some());
    assert!(targets::builtin("hyprland").is_some());
    assert!(targets::builtin("emacs").is_none());
    assert_eq!(targets::builtin_names(), &["sxhkd", "hyprland"]);
}

#[test]
fn test_sxhkd_simple_binding() {
    assert_eq!(
        compile("super + w; firefox", "sxhkd"),
        vec!["super + w\n\tfirefox".to_string()]
    );
}

#[test]
fn test_sxhkd_expands_media_keys() {
    assert_eq!(
        compile(
            "super + XF86Audio{Play,Pause}\n\tplayerctl {play,pause}",
            "sxhkd"
        ),
        vec![
            "super + XF86AudioPlay\n\tplayerctl play".to_string(),
            "super + XF86AudioPause\n\tplayerctl pause".to_string(),
        ]
    );
}

#[test]
fn test_sxhkd_empty_alternative() {
    assert_eq!(
        compile("super + {_,shift} + w; bspc node {--close,--kill}", "sxhkd"),
        vec![
            "super +  + w\n\tbspc node --close".to_string(),
            "super + shift + w\n\tbspc node --kill".to_string(),
        ]
    );
}

#[test]
fn test_hyprland_simple_binding() {
    assert_eq!(
        compile("super + q; kitty", "hyprland"),
        vec!["bind = super, q, exec, kitty".to_string()]
    );
}

#[test]
fn test_hyprland_flags_become_bind_suffix() {
    assert_eq!(
        compile("super + XF86MonBrightnessUp | hyprland[e]; light -A 5", "hyprland"),
        vec!["binde = super, XF86MonBrightnessUp, exec, light -A 5".to_string()]
    );
}

#[test]
fn test_hyprland_no_modifiers() {
    assert_eq!(
        compile("XF86AudioMute; pamixer -t", "hyprland"),
        vec!["bind = , XF86AudioMute, exec, pamixer -t".to_string()]
    );
}

#[test]
fn test_hyprland_ignores_other_systems_flags() {
    assert_eq!(
        compile("super + w | sxhkd[r]; ls", "hyprland"),
        vec!["bind = super, w, exec, ls".to_string()]
    );
}

#[test]
fn test_per_system_command_overrides() {
    let input = "super + r; sxhkd | pkill -USR1 -x sxhkd\nhyprland | hyprctl reload";

    assert_eq!(
        compile(input, "sxhkd"),
        vec!["super + r\n\tpkill -USR1 -x sxhkd".to_string()]
    );
    assert_eq!(
        compile(input, "hyprland"),
        vec!["bind = super, r, exec, hyprctl reload".to_string()]
    );
}
