//! src/core/ast.rs
//!
//! AST data model for parsed hotkeys
//!
//! This module defines the tree the parser produces and the formatter
//! consumes:
//! - `AstKind`: tag for the node kinds, also the generator lookup name
//! - `Part`: closed union of binding/single/multiple/string nodes
//! - `Hotkey`: one binding with its per-system commands and flags
//!
//! Ownership is strictly tree shaped: no node is shared between two
//! hotkeys and only the validator ever mutates a tree (rewriting string
//! leaves to canonical casing). `Display` reconstructs the source syntax,
//! which the round-trip tests rely on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The command map key used when a command line carries no system tag.
pub const DEFAULT_SYSTEM: &str = "default";

/// Kind tag for AST nodes.
///
/// The lowercase name doubles as the generator-function name a formatter
/// table is keyed by, so renaming a variant here is a breaking change for
/// every callback host.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AstKind {
    /// The top-level binding/command pair combiner
    Hotkey,
    /// An ordered sequence of key positions (or raw command pieces)
    Binding,
    /// One atomic key position, possibly expandable
    Single,
    /// A `{a,b,c}` alternation group
    Multiple,
    /// A literal text leaf
    String,
}

impl AstKind {
    /// Name used to select the generator for this kind.
    pub fn name(self) -> &'static str {
        match self {
            AstKind::Hotkey => "hotkey",
            AstKind::Binding => "binding",
            AstKind::Single => "single",
            AstKind::Multiple => "multiple",
            AstKind::String => "string",
        }
    }
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a parsed hotkey tree.
///
/// - `Binding` joins its children with a separator: `" + "` on the binding
///   side, `""` for command bodies.
/// - `Single` concatenates its `String`/`Multiple` children with no
///   separator and never contains another `Single`.
/// - `Multiple` holds one child per alternative: full `Binding` trees on
///   the binding side, bare `String` runs on the command side.
/// - `String` is the mutable leaf the validator rewrites in place.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Part {
    Binding { parts: Vec<Part>, separator: String },
    Single(Vec<Part>),
    Multiple(Vec<Part>),
    String(String),
}

impl Part {
    /// A binding-side sequence, joined with `" + "`.
    pub fn binding(parts: Vec<Part>) -> Self {
        Part::Binding {
            parts,
            separator: " + ".to_string(),
        }
    }

    /// A command-side sequence, concatenated with no separator.
    pub fn command(parts: Vec<Part>) -> Self {
        Part::Binding {
            parts,
            separator: String::new(),
        }
    }

    pub fn kind(&self) -> AstKind {
        match self {
            Part::Binding { .. } => AstKind::Binding,
            Part::Single(_) => AstKind::Single,
            Part::Multiple(_) => AstKind::Multiple,
            Part::String(_) => AstKind::String,
        }
    }

    /// The node's children. A `String` leaf has none.
    pub fn children(&self) -> &[Part] {
        match self {
            Part::Binding { parts, .. } => parts,
            Part::Single(parts) | Part::Multiple(parts) => parts,
            Part::String(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Part] {
        match self {
            Part::Binding { parts, .. } => parts,
            Part::Single(parts) | Part::Multiple(parts) => parts,
            Part::String(_) => &mut [],
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::String(value) => f.write_str(value),
            Part::Single(parts) => {
                for part in parts {
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Part::Multiple(alternatives) => {
                f.write_str("{")?;
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{alternative}")?;
                }
                f.write_str("}")
            }
            Part::Binding { parts, separator } => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}

/// One compiled hotkey: a binding tree, per-system command trees, and
/// per-system flags.
///
/// `commands` always carries a `"default"` entry unless every command line
/// was explicitly system-tagged. Ordered maps keep `Display` and JSON
/// output deterministic.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Hotkey {
    pub binding: Part,
    pub commands: BTreeMap<String, Part>,
    pub flags: BTreeMap<String, Vec<String>>,
}

impl Hotkey {
    pub fn new(binding: Part) -> Self {
        Self {
            binding,
            commands: BTreeMap::new(),
            flags: BTreeMap::new(),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binding)?;

        if !self.flags.is_empty() {
            let flags = self
                .flags
                .iter()
                .map(|(name, values)| format!("{}[{}]", name, values.join(" ")))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " | {flags}")?;
        }

        for (system, command) in &self.commands {
            if system == DEFAULT_SYSTEM {
                write!(f, "\n  {command}")?;
            } else {
                write!(f, "\n  {system} | {command}")?;
            }
        }

        Ok(())
    }
}
