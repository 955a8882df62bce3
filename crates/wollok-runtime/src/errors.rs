// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-runtime/src/errors.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! The native bridge's error domain — strictly separate from the
//! validator's `Problem`s, which are data, never exceptions.

use thiserror::Error;

/// A fault raised by a native, in one of three distinguishable kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NativeError {
    /// A null argument where non-null was required, an `assertIsX` type
    /// mismatch, or a duplicate insertion into a uniqueness-bearing
    /// collection.
    #[error("type error: {0}")]
    TypeError(String),
    /// A numeric value outside its required range.
    #[error("range error: {0}")]
    RangeError(String),
    /// An illegal state transition (e.g. a `Sound` transition, or `play`
    /// before `game.running`).
    #[error("state error: {0}")]
    StateError(String),
}

impl NativeError {
    /// Builds a [`NativeError::TypeError`].
    pub fn type_error(message: impl Into<String>) -> Self { Self::TypeError(message.into()) }

    /// Builds a [`NativeError::RangeError`].
    pub fn range_error(message: impl Into<String>) -> Self { Self::RangeError(message.into()) }

    /// Builds a [`NativeError::StateError`].
    pub fn state_error(message: impl Into<String>) -> Self { Self::StateError(message.into()) }
}
