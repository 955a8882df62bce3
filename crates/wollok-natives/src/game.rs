// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-natives/src/game.rs
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
//! Native catalogue for the `game` singleton: visual bookkeeping kept
//! directly on `self`, everything else forwarded to `gameMirror`/`io`.

use wollok_runtime::{fqn, Evaluation, InnerValue, NativeError, ObjectId};

use crate::support::{ensure_list, find_singleton, property_accessor, push_bool, redirect_to, resolve_position, set_attr};

const VISUALS: &str = "visuals";

fn assert_not_null(eval: &Evaluation, id: ObjectId, what: &str) -> Result<(), NativeError> {
    if id == eval.null_id() {
        return Err(NativeError::type_error(format!("{what} must not be null")));
    }
    Ok(())
}

/// Two `position` objects are the same position when both their `x` and
/// `y` attribute ids match — identity of the ids, not of a value read out
/// of them.
fn positions_equal(eval: &Evaluation, a: ObjectId, b: ObjectId) -> Result<bool, NativeError> {
    let (ax, ay) = attrs_xy(eval, a)?;
    let (bx, by) = attrs_xy(eval, b)?;
    Ok(ax == bx && ay == by)
}

fn attrs_xy(eval: &Evaluation, position: ObjectId) -> Result<(ObjectId, ObjectId), NativeError> {
    let instance = eval
        .instance(position)
        .ok_or_else(|| NativeError::type_error("position is not a live instance"))?;
    let x = instance.get("x").ok_or_else(|| NativeError::type_error("position has no x"))?;
    let y = instance.get("y").ok_or_else(|| NativeError::type_error("position has no y"))?;
    Ok((x, y))
}

/// Two visuals share a position when both resolve `position` (field first,
/// method fallback) and those positions' `x`/`y` ids match.
pub fn same_position(eval: &mut Evaluation, a: ObjectId, b: ObjectId) -> Result<bool, NativeError> {
    let pos_a = resolve_position(eval, a)?;
    let pos_b = resolve_position(eval, b)?;
    positions_equal(eval, pos_a, pos_b)
}

/// `samePosition(other)` as a native bound to the visual itself (`self` is
/// the receiver, `other` the sole argument).
pub fn same_position_native(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [other] = args else { return Err(NativeError::type_error("samePosition takes exactly one argument")) };
    let result = same_position(eval, receiver, *other)?;
    push_bool(eval, result);
    Ok(())
}

/// `addVisual(visual)`.
pub fn add_visual(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual] = args else { return Err(NativeError::type_error("addVisual takes exactly one argument")) };
    let visual = *visual;
    assert_not_null(eval, visual, "visual")?;
    // A visual qualifies only if its module resolves a zero-arg position
    // method; resolve_position is the operational stand-in for that check.
    resolve_position(eval, visual)?;

    let list = ensure_list(eval, receiver, VISUALS)?;
    let already_present = eval.instance(list).and_then(|o| o.inner()).is_some_and(|inner| match inner {
        InnerValue::List(items) => items.contains(&visual),
        _ => false,
    });
    if already_present {
        return Err(NativeError::type_error("visual is already registered"));
    }
    eval.instance_mut(list).expect("just ensured").assert_is_collection_mut()?.push(visual);

    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `addVisualIn(visual, position)`.
pub fn add_visual_in(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual, position] = args else { return Err(NativeError::type_error("addVisualIn takes exactly two arguments")) };
    let (visual, position) = (*visual, *position);
    set_attr(eval, visual, "position", position)?;
    add_visual(eval, receiver, &[visual])
}

macro_rules! forward_to_game_mirror {
    ($name:ident, $selector:expr) => {
        /// Forwards to the `gameMirror` singleton under the same selector.
        pub fn $name(eval: &mut Evaluation, _receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
            redirect_to(eval, fqn::GAME_MIRROR, $selector, args, false)
        }
    };
}

forward_to_game_mirror!(add_visual_character, "addVisualCharacter");
forward_to_game_mirror!(add_visual_character_in, "addVisualCharacterIn");
forward_to_game_mirror!(when_collide_do, "whenCollideDo");
forward_to_game_mirror!(on_collide_do, "onCollideDo");
forward_to_game_mirror!(on_tick, "onTick");
forward_to_game_mirror!(schedule, "schedule");

/// `whenKeyPressedDo(event, action)` — forwards to `io` as `addEventHandler`.
pub fn when_key_pressed_do(eval: &mut Evaluation, _receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    redirect_to(eval, fqn::IO, "addEventHandler", args, false)
}

/// `removeTickEvent(event)` — forwards to `io` as `removeTimeHandler`.
pub fn remove_tick_event(eval: &mut Evaluation, _receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    redirect_to(eval, fqn::IO, "removeTimeHandler", args, true)
}

/// `removeVisual(visual)`.
pub fn remove_visual(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual] = args else { return Err(NativeError::type_error("removeVisual takes exactly one argument")) };
    let visual = *visual;
    if let Some(list) = eval.instance(receiver).and_then(|o| o.get(VISUALS)) {
        eval.instance_mut(list).expect("looked up").assert_is_collection_mut()?.retain(|id| *id != visual);
    }
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `allVisuals()` — a fresh `List` copy of `self.visuals`.
pub fn all_visuals(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("allVisuals takes no arguments"));
    }
    let items = current_visuals(eval, receiver);
    let copy = eval.create_instance(fqn::LIST, Some(InnerValue::List(items)));
    eval.current_frame().push(copy);
    Ok(())
}

fn current_visuals(eval: &Evaluation, receiver: ObjectId) -> Vec<ObjectId> {
    eval.instance(receiver)
        .and_then(|o| o.get(VISUALS))
        .and_then(|list| eval.instance(list))
        .and_then(|o| o.inner())
        .map_or_else(Vec::new, |inner| match inner {
            InnerValue::List(items) => items.clone(),
            _ => Vec::new(),
        })
}

/// `hasVisual(visual)`.
pub fn has_visual(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual] = args else { return Err(NativeError::type_error("hasVisual takes exactly one argument")) };
    let present = current_visuals(eval, receiver).contains(visual);
    push_bool(eval, present);
    Ok(())
}

/// `getObjectsIn(position)` — visuals whose resolved position matches.
pub fn get_objects_in(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [position] = args else { return Err(NativeError::type_error("getObjectsIn takes exactly one argument")) };
    let target = *position;
    let candidates = current_visuals(eval, receiver);
    let mut matches = Vec::new();
    for visual in candidates {
        let their_position = resolve_position(eval, visual)?;
        if positions_equal(eval, their_position, target)? {
            matches.push(visual);
        }
    }
    let list = eval.create_instance(fqn::LIST, Some(InnerValue::List(matches)));
    eval.current_frame().push(list);
    Ok(())
}

/// `colliders(visual)` — other visuals sharing `visual`'s position.
pub fn colliders(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual] = args else { return Err(NativeError::type_error("colliders takes exactly one argument")) };
    let visual = *visual;
    let target = resolve_position(eval, visual)?;
    let candidates = current_visuals(eval, receiver);
    let mut matches = Vec::new();
    for other in candidates {
        if other == visual {
            continue;
        }
        let their_position = resolve_position(eval, other)?;
        if positions_equal(eval, their_position, target)? {
            matches.push(other);
        }
    }
    let list = eval.create_instance(fqn::LIST, Some(InnerValue::List(matches)));
    eval.current_frame().push(list);
    Ok(())
}

/// `say(visual, message)`.
pub fn say(eval: &mut Evaluation, _receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [visual, message] = args else { return Err(NativeError::type_error("say takes exactly two arguments")) };
    let (visual, message) = (*visual, *message);
    set_attr(eval, visual, "message", message)?;

    let io = find_singleton(eval, fqn::IO)?;
    let now = eval.send_message("currentTime", io, &[])?;
    let now_value = eval.instance(now).ok_or_else(|| NativeError::type_error("currentTime did not return a live instance"))?.assert_is_number()?;
    let message_time = eval.create_instance(fqn::NUMBER, Some(InnerValue::Number(now_value + 2000.0)));
    set_attr(eval, visual, "messageTime", message_time)?;

    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `clear()` — forwards `clear` to `io`, then resets `self.visuals`.
pub fn clear(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("clear takes no arguments"));
    }
    let io = find_singleton(eval, fqn::IO)?;
    eval.send_message("clear", io, &[])?;
    let fresh = eval.create_instance(fqn::LIST, Some(InnerValue::List(Vec::new())));
    set_attr(eval, receiver, VISUALS, fresh)?;
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

macro_rules! property {
    ($name:ident, $attr:expr) => {
        /// Property getter/setter sharing one selector name.
        pub fn $name(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
            property_accessor(eval, receiver, $attr, args)
        }
    };
}

property!(title, "title");
property!(width, "width");
property!(height, "height");

macro_rules! setter {
    ($name:ident, $attr:expr) => {
        /// Pure setter, always returns void.
        pub fn $name(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
            let [value] = args else { return Err(NativeError::type_error(concat!(stringify!($name), " takes exactly one argument"))) };
            set_attr(eval, receiver, $attr, *value)?;
            let void = eval.void_id();
            eval.current_frame().push(void);
            Ok(())
        }
    };
}

setter!(ground, "ground");
setter!(board_ground, "boardGround");
setter!(do_cell_size, "cellSize");
setter!(error_reporter, "errorReporter");
setter!(hide_attributes, "hideAttributes");
setter!(show_attributes, "showAttributes");

/// `stop()` — sets `self.running` to `FALSE_ID`.
pub fn stop(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    if !args.is_empty() {
        return Err(NativeError::type_error("stop takes no arguments"));
    }
    let false_id = eval.false_id();
    set_attr(eval, receiver, "running", false_id)?;
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}

/// `doStart(_isRepl)` — sets `self.running` to `TRUE_ID`.
pub fn do_start(eval: &mut Evaluation, receiver: ObjectId, args: &[ObjectId]) -> Result<(), NativeError> {
    let [_is_repl] = args else { return Err(NativeError::type_error("doStart takes exactly one argument")) };
    let true_id = eval.true_id();
    set_attr(eval, receiver, "running", true_id)?;
    let void = eval.void_id();
    eval.current_frame().push(void);
    Ok(())
}
