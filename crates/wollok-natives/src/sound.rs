// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-natives/src/sound.rs
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
//! `Sound` state machine natives: a state machine over the `status`
//! attribute, gated on `game.running`.

use wollok_runtime::{fqn, Evaluation, InnerValue, NativeError, ObjectId};

use crate::support::{find_singleton, property_accessor, push_bool, set_attr};

const SOUNDS: &str = "sounds";

fn status_of(eval: &Evaluation, sound: ObjectId) -> Result<Option<&'static str>, NativeError> {
    let Some(status) = eval.instance(sound).and_then(|o| o.get("status")) else {
        return Ok(None);
    };
    let text = eval.instance(status).ok_or_else(|| NativeError::type_error("status is not a live instance"))?.assert_is_string()?;
    match text {
        "played" => Ok(Some("played")),
        "stopped" => Ok(Some("stopped")),
        "paused" => Ok(Some("paused")),
        other => Err(NativeError::state_error(format!("unrecognized sound status {other:?}"))),
    }
}

fn set_status(eval: &mut Evaluation, sound: ObjectId, status: &str) -> Result<(), NativeError> {
    let value = eval.create_instance(fqn::STRING, Some(InnerValue::String(status.to_string())));
    set_attr(eval, sound, "status", value)
}

fn add_to_game_sounds(eval: &mut Evaluation, game: ObjectId, sound: ObjectId) -> Result<(), NativeError> {
    let list = match eval.instance(game).and_then(|o| o.get(SOUNDS)) {
        Some(list) => list,
        None => {
            let list = eval.create_instance(fqn::LIST, Some(InnerValue::List(Vec::new())));
            set_attr(eval, game, SOUNDS, list)?;
            list
        }
    };
    eval.instance_mut(list).expect("just ensured").assert_is_collection_mut()?.push(sound);
    Ok(())
}

fn remove_from_game_sounds(eval: &mut Evaluation, game: ObjectId, sound: ObjectId) -> Result<(), NativeError> {
    if let Some(list) = eval.instance(game).and_then(|o| o.get(SOUNDS)) {
        eval.instance_mut(list).expect("looked up").assert_is_collection_mut()?.retain(|id| *id != sound);
    }
    Ok(())
}

fn rejected_transition(sound: ObjectId, event: &str, from: impl std::fmt::Debug) -> NativeError {
    log::warn!("sound {sound} rejected {event} from {from:?}");
    NativeError::state_error(format!("cannot {event} a sound that is {from:?}"))
}

/// `play()`: Idle/Stopped -> Played, gated on `game.running`.
pub fn play(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("play takes no arguments"));
    }
    let game = find_singleton(eval, fqn::GAME)?;
    let running = eval.instance(game).and_then(|o| o.get("running"));
    if running != Some(eval.true_id()) {
        log::warn!("sound {receiver} rejected play: game is not running");
        return Err(NativeError::state_error("cannot play a sound while the game is not running"));
    }
    match status_of(eval, receiver)? {
        None | Some("stopped") => {
            set_status(eval, receiver, "played")?;
            add_to_game_sounds(eval, game, receiver)?;
        }
        Some(other) => return Err(rejected_transition(receiver, "play", other)),
    }
    log::debug!("sound {receiver} -> played");
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `stop()`: Played -> Stopped.
pub fn stop(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("stop takes no arguments"));
    }
    match status_of(eval, receiver)? {
        Some("played") => {
            set_status(eval, receiver, "stopped")?;
            let game = find_singleton(eval, fqn::GAME)?;
            remove_from_game_sounds(eval, game, receiver)?;
        }
        other => return Err(rejected_transition(receiver, "stop", other)),
    }
    log::debug!("sound {receiver} -> stopped");
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `pause()`: Played -> Paused.
pub fn pause(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("pause takes no arguments"));
    }
    match status_of(eval, receiver)? {
        Some("played") => set_status(eval, receiver, "paused")?,
        other => return Err(rejected_transition(receiver, "pause", other)),
    }
    log::debug!("sound {receiver} -> paused");
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `resume()`: Paused -> Played.
pub fn resume(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("resume takes no arguments"));
    }
    match status_of(eval, receiver)? {
        Some("paused") => set_status(eval, receiver, "played")?,
        other => return Err(rejected_transition(receiver, "resume", other)),
    }
    log::debug!("sound {receiver} -> played");
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `played()`.
pub fn played(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("played takes no arguments"));
    }
    let is_played = status_of(eval, receiver)? == Some("played");
    push_bool(eval, is_played);
    Ok(())
}

/// `paused()`.
pub fn paused(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("paused takes no arguments"));
    }
    let is_paused = status_of(eval, receiver)? == Some("paused");
    push_bool(eval, is_paused);
    Ok(())
}

/// `volume(v?)`: `0 <= v <= 1`, range-checked on set.
pub fn volume(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if let [value] = args {
        let number = eval
            .instance(*value)
            .ok_or_else(|| NativeError::type_error("volume argument is not a live instance"))?
            .assert_is_number()?;
        if !(0.0..=1.0).contains(&number) {
            return Err(NativeError::range_error(format!("volume {number} is out of range [0, 1]")));
        }
    }
    property_accessor(eval, receiver, "volume", args)
}

/// `shouldLoop(b?)`: boolean property accessor.
pub fn should_loop(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    property_accessor(eval, receiver, "shouldLoop", args)
}
