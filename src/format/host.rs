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

//! src/format/host.rs
//!
//! Callback host contract for code generation
//!
//! The formatter engine knows how to walk a hotkey tree and expand its
//! alternation groups, but not what any target daemon's syntax looks
//! like. That knowledge lives behind [`CallbackHost`]: one generator per
//! AST node kind, each receiving the assembled row for that node and
//! returning the rendered text — or a list of texts, which is how a
//! generator fans a `{a,b}` group out into multiple output rows.
//!
//! [`TableHost`] is the built-in implementation: a fixed table of plain
//! functions keyed by [`AstKind`]. A host embedding a scripting runtime
//! would implement the same trait around its interpreter.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::core::ast::AstKind;

/// Formatting errors.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// The host has no generator for a node kind the tree contains.
    #[error("no generator for kind '{0}'")]
    MissingGenerator(AstKind),

    /// A generator produced something the engine cannot use. Typed hosts
    /// cannot return a wrong shape, but hosts wrapping dynamic runtimes
    /// report their conversion failures here.
    #[error("generator for kind '{kind}' returned a malformed value: {reason}")]
    MalformedReturn { kind: AstKind, reason: String },

    /// No command tree applies to a hotkey on the active system and no
    /// default exists.
    #[error("no command found for hotkey '{hotkey}' on system '{system}'")]
    CommandNotFound { hotkey: String, system: String },
}

/// Which stage of hotkey rendering a generator is being invoked for.
///
/// Generators often render the same node kind differently per phase: a
/// binding sequence joins with `" + "`, a command sequence concatenates.
/// `MultiBinding` marks the alternatives nested inside a binding-side
/// `{...}` group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Hotkey,
    Binding,
    Command,
    MultiBinding,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Hotkey => "hotkey",
            Phase::Binding => "binding",
            Phase::Command => "command",
            Phase::MultiBinding => "multi-binding",
        };
        f.write_str(name)
    }
}

/// The row value handed to a generator: the raw text of a string leaf, or
/// the ordered outputs of a node's children.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Row(Vec<String>),
}

/// Everything a generator gets to see for one invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation<'a> {
    /// The row being rendered.
    pub value: Value,
    /// Flag values attached to the hotkey for the active system.
    pub flags: &'a [String],
    /// Kind of the node being rendered.
    pub ast: AstKind,
    /// Rendering stage.
    pub phase: Phase,
}

impl Invocation<'_> {
    /// Leaf text, or empty for row invocations.
    pub fn text(&self) -> &str {
        match &self.value {
            Value::Text(text) => text,
            Value::Row(_) => "",
        }
    }

    /// The ordered child outputs, or empty for leaf invocations.
    pub fn row(&self) -> &[String] {
        match &self.value {
            Value::Row(row) => row,
            Value::Text(_) => &[],
        }
    }
}

/// A generator's result: one rendered string, or several — each entry
/// becomes its own row in the parent's cartesian fold.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    One(String),
    Many(Vec<String>),
}

impl Output {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Output::One(value) => vec![value],
            Output::Many(values) => values,
        }
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Output::One(value)
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Output::One(value.to_string())
    }
}

impl From<Vec<String>> for Output {
    fn from(values: Vec<String>) -> Self {
        Output::Many(values)
    }
}

/// A code-generation backend: one invocable generator per AST node kind.
///
/// A host instance is exclusively owned by the [`crate::format::Formatter`]
/// driving it — generator state is not required to be reentrant across
/// concurrent formatting runs.
pub trait CallbackHost {
    fn invoke(&mut self, kind: AstKind, invocation: &Invocation<'_>)
        -> Result<Output, FormatError>;
}

/// A generator function in a [`TableHost`].
pub type Generator = fn(&Invocation<'_>) -> Result<Output, FormatError>;

/// A callback host backed by a fixed table of generator functions.
///
/// This is the non-scripting rendition of a formatter definition: each
/// built-in target in [`crate::format::targets`] is one of these tables.
pub struct TableHost {
    name: &'static str,
    generators: HashMap<AstKind, Generator>,
}

impl TableHost {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generators: HashMap::new(),
        }
    }

    /// Registers the generator for a node kind, replacing any previous one.
    pub fn with(mut self, kind: AstKind, generator: Generator) -> Self {
        self.generators.insert(kind, generator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl CallbackHost for TableHost {
    fn invoke(
        &mut self,
        kind: AstKind,
        invocation: &Invocation<'_>,
    ) -> Result<Output, FormatError> {
        let generator = self
            .generators
            .get(&kind)
            .ok_or(FormatError::MissingGenerator(kind))?;
        generator(invocation)
    }
}

impl fmt::Debug for TableHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableHost")
            .field("name", &self.name)
            .field("kinds", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}
