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

//! src/format/engine.rs
//!
//! Formatting engine: cartesian expansion plus callback dispatch
//!
//! Walks a hotkey tree bottom-up. String leaves go straight to the
//! `string` generator. Every other node folds its children's output lists
//! into a set of rows by cartesian product — the same combinatorial law
//! shells use for brace expansion — and invokes its own generator once
//! per row. Alternation fan-out falls out of this: a `multiple` generator
//! returns its row as a list, and the parent's fold multiplies.
//!
//! The fold order is deterministic (child-output index is the outer loop),
//! and the binding and command sides share it, which is what keeps
//! binding row *i* paired with command row *i mod n*.

use crate::core::ast::{AstKind, Hotkey, Part, DEFAULT_SYSTEM};
use crate::format::host::{CallbackHost, FormatError, Invocation, Phase, Value};

/// Drives a [`CallbackHost`] over parsed hotkeys for one target system.
///
/// The host is moved into the formatter: generator state is not assumed
/// reentrant, so a host cannot be shared between two engines.
pub struct Formatter<H: CallbackHost> {
    system: String,
    host: H,
}

impl<H: CallbackHost> Formatter<H> {
    pub fn new(system: impl Into<String>, host: H) -> Self {
        Self {
            system: system.into(),
            host,
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    /// Formats every hotkey into output lines, fail-fast on the first
    /// error. Re-running on the same trees produces identical output; the
    /// engine reads the AST without mutating it.
    pub fn format(&mut self, hotkeys: &[Hotkey]) -> Result<Vec<String>, FormatError> {
        let mut output = Vec::new();

        for hotkey in hotkeys {
            log::debug!("formatting hotkey '{}' for system '{}'", hotkey.binding, self.system);

            let flags = hotkey
                .flags
                .get(&self.system)
                .cloned()
                .unwrap_or_default();

            let bindings = self.format_part(&hotkey.binding, &flags, Phase::Binding)?;

            let command = hotkey
                .commands
                .get(&self.system)
                .or_else(|| hotkey.commands.get(DEFAULT_SYSTEM))
                .ok_or_else(|| FormatError::CommandNotFound {
                    hotkey: hotkey.binding.to_string(),
                    system: self.system.clone(),
                })?;
            let commands = self.format_part(command, &flags, Phase::Command)?;
            if commands.is_empty() {
                return Err(FormatError::MalformedReturn {
                    kind: AstKind::Binding,
                    reason: format!(
                        "command expansion for hotkey '{}' produced no rows",
                        hotkey.binding
                    ),
                });
            }

            // Bindings wrap around a shorter command list, so one set of
            // alternative keys may share fewer command alternatives.
            for (i, binding) in bindings.iter().enumerate() {
                let row = vec![binding.clone(), commands[i % commands.len()].clone()];
                let invocation = Invocation {
                    value: Value::Row(row),
                    flags: &flags,
                    ast: AstKind::Hotkey,
                    phase: Phase::Hotkey,
                };
                output.extend(
                    self.host
                        .invoke(AstKind::Hotkey, &invocation)?
                        .into_vec(),
                );
            }
        }

        Ok(output)
    }

    /// Recursive formatting of one node; returns its output list.
    fn format_part(
        &mut self,
        part: &Part,
        flags: &[String],
        phase: Phase,
    ) -> Result<Vec<String>, FormatError> {
        if let Part::String(text) = part {
            let invocation = Invocation {
                value: Value::Text(text.clone()),
                flags,
                ast: AstKind::String,
                phase,
            };
            return Ok(self.host.invoke(AstKind::String, &invocation)?.into_vec());
        }

        let kind = part.kind();
        // alternatives nested in a binding-side group render in their own
        // phase so generators can tell them apart from the top-level row
        let child_phase = if kind == AstKind::Multiple && phase == Phase::Binding {
            Phase::MultiBinding
        } else {
            phase
        };

        let mut rows: Vec<Vec<String>> = vec![Vec::new()];
        for child in part.children() {
            let outputs = self.format_part(child, flags, child_phase)?;

            let mut next = Vec::with_capacity(rows.len() * outputs.len());
            for output in &outputs {
                for row in &rows {
                    let mut entry = row.clone();
                    entry.push(output.clone());
                    next.push(entry);
                }
            }
            rows = next;
        }

        let mut outputs = Vec::new();
        for row in rows {
            let invocation = Invocation {
                value: Value::Row(row),
                flags,
                ast: kind,
                phase,
            };
            outputs.extend(self.host.invoke(kind, &invocation)?.into_vec());
        }
        Ok(outputs)
    }
}
