// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-natives/src/registry.rs
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
//! Maps `(moduleFQN, selector)` to the [`Native`] that implements it, for
//! the interpreter to consult when dispatch lands on `game`/`Sound`.

use wollok_runtime::{fqn, Native};

use crate::{game, sound};

/// Looks up the native bound to `selector` on `module_fqn`, if any.
#[must_use]
pub fn native_for(module_fqn: &str, selector: &str) -> Option<Native> {
    match module_fqn {
        fqn::GAME => game_native(selector),
        fqn::SOUND => sound_native(selector),
        _ => None,
    }
}

fn game_native(selector: &str) -> Option<Native> {
    Some(match selector {
        "addVisual" => game::add_visual,
        "addVisualIn" => game::add_visual_in,
        "addVisualCharacter" => game::add_visual_character,
        "addVisualCharacterIn" => game::add_visual_character_in,
        "whenCollideDo" => game::when_collide_do,
        "onCollideDo" => game::on_collide_do,
        "onTick" => game::on_tick,
        "schedule" => game::schedule,
        "whenKeyPressedDo" => game::when_key_pressed_do,
        "removeTickEvent" => game::remove_tick_event,
        "removeVisual" => game::remove_visual,
        "allVisuals" => game::all_visuals,
        "hasVisual" => game::has_visual,
        "getObjectsIn" => game::get_objects_in,
        "colliders" => game::colliders,
        "say" => game::say,
        "clear" => game::clear,
        "title" => game::title,
        "width" => game::width,
        "height" => game::height,
        "ground" => game::ground,
        "boardGround" => game::board_ground,
        "doCellSize" => game::do_cell_size,
        "errorReporter" => game::error_reporter,
        "hideAttributes" => game::hide_attributes,
        "showAttributes" => game::show_attributes,
        "stop" => game::stop,
        "doStart" => game::do_start,
        _ => return None,
    })
}

fn sound_native(selector: &str) -> Option<Native> {
    Some(match selector {
        "play" => sound::play,
        "stop" => sound::stop,
        "pause" => sound::pause,
        "resume" => sound::resume,
        "played" => sound::played,
        "paused" => sound::paused,
        "volume" => sound::volume,
        "shouldLoop" => sound::should_loop,
        _ => return None,
    })
}

/// Looks up `samePosition`, which is bound to any visual rather than to a
/// single module FQN — the interpreter consults this only once the
/// receiver's own module (a user-defined mixin) fails to resolve the
/// selector itself.
#[must_use]
pub fn visual_native(selector: &str) -> Option<Native> {
    match selector {
        "samePosition" => Some(game::same_position_native),
        _ => None,
    }
}
