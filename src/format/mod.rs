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

//! src/format/mod.rs
//!
//! Code generation: the formatting engine, the callback host contract,
//! and the built-in target tables.

pub mod engine;
pub mod host;
pub mod targets;

pub use engine::Formatter;
pub use host::{CallbackHost, FormatError, Generator, Invocation, Output, Phase, TableHost, Value};

#[cfg(test)]
mod tests;
