//! src/format/targets.rs
//!
//! Built-in target formatter tables
//!
//! Each target daemon gets one [`TableHost`]: a fixed set of generator
//! functions selected by AST kind. These replace per-daemon formatter
//! scripts — adding a target means adding a table here, without touching
//! the engine.

use crate::core::ast::AstKind;
use crate::format::host::{FormatError, Invocation, Output, Phase, TableHost};

/// Looks up a built-in target table by name.
pub fn builtin(name: &str) -> Option<TableHost> {
    match name {
        "sxhkd" => Some(sxhkd()),
        "hyprland" => Some(hyprland()),
        _ => None,
    }
}

/// Names of all built-in targets.
pub fn builtin_names() -> &'static [&'static str] {
    &["sxhkd", "hyprland"]
}

/// sxhkd: binding line followed by a tab-indented command line.
///
/// ```text
/// super + XF86AudioPlay
///     playerctl play
/// ```
pub fn sxhkd() -> TableHost {
    TableHost::new("sxhkd")
        .with(AstKind::Hotkey, sxhkd::hotkey)
        .with(AstKind::Binding, sxhkd::binding)
        .with(AstKind::Single, sxhkd::single)
        .with(AstKind::Multiple, sxhkd::multiple)
        .with(AstKind::String, sxhkd::string)
}

mod sxhkd {
    use super::*;

    pub fn hotkey(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        let [binding, command] = invocation.row() else {
            return Err(FormatError::MalformedReturn {
                kind: AstKind::Hotkey,
                reason: "expected a binding/command pair".to_string(),
            });
        };
        Ok(Output::One(format!("{binding}\n\t{command}")))
    }

    pub fn binding(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        let joined = match invocation.phase {
            Phase::Command => invocation.row().concat(),
            _ => invocation.row().join(" + "),
        };
        Ok(Output::One(joined))
    }

    pub fn single(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::One(invocation.row().concat()))
    }

    // returning the row as a list is what fans the alternatives out into
    // separate output rows in the parent fold
    pub fn multiple(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::Many(invocation.row().to_vec()))
    }

    pub fn string(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::One(invocation.text().to_string()))
    }
}

/// Hyprland: `bind<flags> = MODS, KEY, exec, COMMAND` lines.
///
/// Flag values supply the bind-type suffix letters, so a hotkey flagged
/// `hyprland[e l]` renders as `bindel = ...`.
///
/// ```text
/// bind = super, XF86AudioPlay, exec, playerctl play
/// ```
pub fn hyprland() -> TableHost {
    TableHost::new("hyprland")
        .with(AstKind::Hotkey, hyprland::hotkey)
        .with(AstKind::Binding, hyprland::binding)
        .with(AstKind::Single, hyprland::single)
        .with(AstKind::Multiple, hyprland::multiple)
        .with(AstKind::String, hyprland::string)
}

mod hyprland {
    use super::*;

    pub fn hotkey(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        let [binding, command] = invocation.row() else {
            return Err(FormatError::MalformedReturn {
                kind: AstKind::Hotkey,
                reason: "expected a binding/command pair".to_string(),
            });
        };
        let suffix = invocation.flags.concat();
        Ok(Output::One(format!("bind{suffix} = {binding}, exec, {command}")))
    }

    pub fn binding(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        let row = invocation.row();
        let joined = match invocation.phase {
            Phase::Command => row.concat(),
            // a nested alternative contributes a modifier-list segment
            Phase::MultiBinding => row.join(" "),
            _ => match row.split_last() {
                Some((key, modifiers)) => format!("{}, {}", modifiers.join(" "), key),
                None => String::new(),
            },
        };
        Ok(Output::One(joined))
    }

    pub fn single(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::One(invocation.row().concat()))
    }

    pub fn multiple(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::Many(invocation.row().to_vec()))
    }

    pub fn string(invocation: &Invocation<'_>) -> Result<Output, FormatError> {
        Ok(Output::One(invocation.text().to_string()))
    }
}
