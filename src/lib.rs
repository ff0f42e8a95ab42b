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

//! Hotkey Config Compiler
//!
//! Compiles a compact, brace-expansion hotkey description language into
//! concrete keybinding/command lines for one or more hotkey daemons.
//! A single source line like
//!
//! ```text
//! super + XF86Audio{Play,Pause} | hyprland[e]; playerctl {play,pause}
//! ```
//!
//! expands into one binding/command pair per alternative, with per-system
//! command overrides, per-system flags, and key-name canonicalisation
//! against a generated keysym dictionary.
//!
//! # Architecture
//!
//! - **`core`:** tokenizer, state-machine parser, AST, key validation
//! - **`format`:** formatting engine, callback host contract, built-in
//!   target tables (`sxhkd`, `hyprland`)
//!
//! The whole pipeline is a pure, single-threaded transformation over one
//! input buffer. Either every hotkey formats, or the first error aborts
//! the run — there is no partial output.
//!
//! # Examples
//!
//! ## Compiling a hotkey for sxhkd
//!
//! ```
//! use hotkeyc::format::targets;
//! use hotkeyc::{parse, Formatter, KeycodeDictionary, Validator};
//!
//! let mut hotkeys = parse("super + XF86Audio{Play,Pause}\n\tplayerctl {play,pause}")?;
//!
//! let validator = Validator::new(KeycodeDictionary::new());
//! validator.validate(&mut hotkeys)?;
//!
//! let host = targets::builtin("sxhkd").ok_or("unknown target")?;
//! let mut formatter = Formatter::new("sxhkd", host);
//! let lines = formatter.format(&hotkeys)?;
//!
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0], "super + XF86AudioPlay\n\tplayerctl play");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom keys
//!
//! Key names outside the generated table are rejected unless they are
//! registered up front:
//!
//! ```
//! use hotkeyc::{parse, KeycodeDictionary, Validator};
//!
//! let mut hotkeys = parse("macropad1; notify-send hi")?;
//!
//! let dictionary = KeycodeDictionary::with_entries([("macropad1", "MacroPad1")]);
//! Validator::new(dictionary).validate(&mut hotkeys)?;
//!
//! assert_eq!(hotkeys[0].binding.to_string(), "MacroPad1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod format;

// Re-export the pipeline types for convenience
pub use crate::core::{
    parse, AstKind, Hotkey, KeycodeDictionary, ParseError, Part, ValidationError, Validator,
    DEFAULT_SYSTEM,
};
pub use crate::format::{CallbackHost, FormatError, Formatter, Invocation, Output, Phase, Value};
