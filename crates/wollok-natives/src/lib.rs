// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-natives/src/lib.rs
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
//! The native bridge between the interpreter and the host: the `game`
//! singleton's visual bookkeeping and forwarding, and the `Sound` state
//! machine.

mod game;
mod registry;
mod sound;
mod support;

pub use registry::{native_for, visual_native};

#[cfg(test)]
mod tests {
    use wollok_runtime::fqn;

    use super::*;

    #[test]
    fn native_for_resolves_every_catalogued_sound_selector() {
        let selectors = ["play", "stop", "pause", "resume", "played", "paused", "volume", "shouldLoop"];
        for selector in selectors {
            assert!(native_for(fqn::SOUND, selector).is_some(), "missing native for Sound.{selector}");
        }
    }

    #[test]
    fn visual_native_resolves_same_position_only() {
        assert!(visual_native("samePosition").is_some());
        assert!(visual_native("anythingElse").is_none());
    }
}
