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

//! src/core/validator.rs
//!
//! Key-name validation and canonicalisation
//!
//! Every atomic key position in a binding is checked against a dictionary
//! of known key names. Expandable positions like `XF86Audio{Play,Pause}`
//! are cartesian-expanded first, so every reachable candidate key must be
//! known. On a hit the canonical casing from the dictionary is written
//! back into the tree, so later formatting always emits the spelling the
//! target daemon expects regardless of how the user cased the source.
//!
//! Validation is whitelist based: a key name the dictionary does not carry
//! is a hard error. Custom keys are supported by passing extra entries to
//! [`KeycodeDictionary::with_entries`]; there is no mutable global
//! registry.

use std::collections::HashMap;
use thiserror::Error;

use crate::core::ast::{AstKind, Hotkey, Part};
use crate::core::keys::KEYSYM_TABLE;

/// Validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A candidate key name absent from the dictionary.
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Immutable lookup table from lowercase key name to canonical key name.
///
/// Built once at startup from the generated keysym table, optionally
/// extended with caller-supplied entries. Never mutated afterwards.
#[derive(Clone, Debug)]
pub struct KeycodeDictionary {
    entries: HashMap<String, String>,
}

impl KeycodeDictionary {
    /// The generated table alone.
    pub fn new() -> Self {
        Self::with_entries(std::iter::empty::<(String, String)>())
    }

    /// The generated table plus extra entries. Extra keys are lowercased
    /// on insertion and override generated entries of the same name.
    pub fn with_entries<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: HashMap<String, String> = KEYSYM_TABLE
            .iter()
            .map(|(name, canonical)| (name.to_string(), canonical.to_string()))
            .collect();
        for (name, canonical) in extra {
            entries.insert(name.into().to_lowercase(), canonical.into());
        }
        Self { entries }
    }

    /// Looks up a key name case-insensitively, returning its canonical
    /// casing.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeycodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks binding trees, validating and canonicalising every key position.
pub struct Validator {
    dictionary: KeycodeDictionary,
}

/// One contributing leaf of a candidate: its index path below the single
/// being validated and the length of its text.
type LeafRef = (Vec<usize>, usize);

impl Validator {
    pub fn new(dictionary: KeycodeDictionary) -> Self {
        Self { dictionary }
    }

    /// Validates every binding and rewrites its string leaves to canonical
    /// casing. Command trees are never touched.
    ///
    /// The canonical casing is distributed across a candidate's leaves by
    /// position: leaf `i` receives `canonical[offset..offset + len(i)]`.
    /// This is reliable for dictionary keys, whose canonical form differs
    /// from the candidate only in case. For caller-supplied entries whose
    /// canonical text has a different length, a single-leaf candidate is
    /// replaced wholesale and a multi-leaf candidate keeps its original
    /// casing — the slice positions would not line up, and guessing a
    /// split would be worse than leaving the input alone.
    pub fn validate(&self, hotkeys: &mut [Hotkey]) -> Result<(), ValidationError> {
        for hotkey in hotkeys.iter_mut() {
            self.validate_part(&mut hotkey.binding)?;
        }
        Ok(())
    }

    /// Depth-first search for `Single` nodes. The per-single pass handles
    /// everything nested below a single (its groups expand into the
    /// candidates), so the search does not descend into one.
    fn validate_part(&self, part: &mut Part) -> Result<(), ValidationError> {
        match part.kind() {
            AstKind::Single => self.canonicalize_single(part),
            _ => {
                for child in part.children_mut() {
                    self.validate_part(child)?;
                }
                Ok(())
            }
        }
    }

    fn canonicalize_single(&self, single: &mut Part) -> Result<(), ValidationError> {
        let candidates = expand_candidates(single, &[]);

        for (text, leaves) in candidates {
            // an empty alternative expands to an empty candidate
            if text.is_empty() {
                continue;
            }

            let canonical = self
                .dictionary
                .lookup(&text)
                .ok_or_else(|| ValidationError::UnknownKey(text.clone()))?
                .to_string();

            if canonical.len() == text.len() {
                let mut offset = 0;
                for (path, len) in &leaves {
                    if let Some(leaf) = leaf_mut(single, path) {
                        *leaf = canonical[offset..offset + len].to_string();
                    }
                    offset += len;
                }
            } else if let [(path, _)] = leaves.as_slice() {
                if let Some(leaf) = leaf_mut(single, path) {
                    *leaf = canonical;
                }
            }
        }

        Ok(())
    }
}

/// Cartesian expansion of a part into candidate strings, each paired with
/// the ordered leaves that contributed to it.
///
/// Sequences multiply their children's expansions, alternation groups
/// concatenate theirs.
fn expand_candidates(part: &Part, base: &[usize]) -> Vec<(String, Vec<LeafRef>)> {
    match part {
        Part::String(text) => vec![(text.clone(), vec![(base.to_vec(), text.len())])],
        Part::Multiple(alternatives) => {
            let mut out = Vec::new();
            for (i, alternative) in alternatives.iter().enumerate() {
                let mut path = base.to_vec();
                path.push(i);
                out.extend(expand_candidates(alternative, &path));
            }
            out
        }
        Part::Binding { parts, .. } | Part::Single(parts) => {
            let mut rows: Vec<(String, Vec<LeafRef>)> = vec![(String::new(), Vec::new())];
            for (i, child) in parts.iter().enumerate() {
                let mut path = base.to_vec();
                path.push(i);
                let expansions = expand_candidates(child, &path);

                let mut next = Vec::with_capacity(rows.len() * expansions.len());
                for (text, leaves) in &expansions {
                    for (row_text, row_leaves) in &rows {
                        let mut combined_text = row_text.clone();
                        combined_text.push_str(text);
                        let mut combined_leaves = row_leaves.clone();
                        combined_leaves.extend(leaves.iter().cloned());
                        next.push((combined_text, combined_leaves));
                    }
                }
                rows = next;
            }
            rows
        }
    }
}

/// Follows an index path from `root` down to a string leaf.
fn leaf_mut<'a>(root: &'a mut Part, path: &[usize]) -> Option<&'a mut String> {
    let mut node = root;
    for &index in path {
        node = node.children_mut().get_mut(index)?;
    }
    match node {
        Part::String(text) => Some(text),
        _ => None,
    }
}
