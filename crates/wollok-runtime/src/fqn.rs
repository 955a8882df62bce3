// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-runtime/src/fqn.rs
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
//! Well-known fully-qualified names that are part of the contract between
//! the Language standard library and the host.

/// `innerValue` carries an ordered/unordered sequence of [`ObjectId`](crate::id::ObjectId)s.
pub const LIST: &str = "wollok.lang.List";
/// `innerValue` carries an unordered sequence of [`ObjectId`](crate::id::ObjectId)s.
pub const SET: &str = "wollok.lang.Set";
/// `innerValue` carries a `String`.
pub const STRING: &str = "wollok.lang.String";
/// `innerValue` carries a numeric scalar.
pub const NUMBER: &str = "wollok.lang.Number";
/// Represented only by the sentinel `TRUE_ID`/`FALSE_ID`; never has an `innerValue`.
pub const BOOLEAN: &str = "wollok.lang.Boolean";
/// `moduleFQN` of the sole `NULL_ID` sentinel.
pub const NULL: &str = "wollok.lang.Object";
/// `moduleFQN` of the sole `VOID_ID` sentinel, used for "no meaningful return".
pub const VOID: &str = "wollok.lang.Void";
/// The `gameMirror` singleton several `game` natives forward to.
pub const GAME_MIRROR: &str = "wollok.gameMirror.gameMirror";
/// The `io` singleton several `game` natives forward to.
pub const IO: &str = "wollok.io.io";
/// The `game` singleton itself.
pub const GAME: &str = "wollok.game.game";
/// The `Sound` class — instances carry a `status` attribute driving the
/// state machine in `wollok-natives`.
pub const SOUND: &str = "wollok.game.Sound";
