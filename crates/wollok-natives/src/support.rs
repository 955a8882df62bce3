// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-natives/src/support.rs
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
//! Shared helpers for the native catalogue: the property-accessor and
//! `redirectTo` patterns, singleton lookup, and visual position resolution.

use wollok_runtime::{Evaluation, InnerValue, NativeError, ObjectId};

/// The getter/setter-sharing-one-name pattern described for `title`,
/// `width`, `height`, `volume`, and `shouldLoop`: if `args` carries the
/// optional value, set it and push void; otherwise push the current
/// value, or `NULL_ID` if unset.
///
/// # Errors
/// Returns [`NativeError::TypeError`] if more than one argument is given.
pub(crate) fn property_accessor(
    eval: &mut Evaluation,
    receiver: ObjectId,
    attr: &str,
    args: &[ObjectId],
) -> Result<(), NativeError> {
    match args {
        [] => {
            let current = eval.instance(receiver).and_then(|o| o.get(attr)).unwrap_or_else(|| eval.null_id());
            eval.current_frame().push(current);
        }
        [value] => {
            let value = *value;
            set_attr(eval, receiver, attr, value)?;
            let void = eval.void_id();
            eval.current_frame().push(void);
        }
        _ => return Err(NativeError::type_error(format!("{attr} takes at most one argument"))),
    }
    Ok(())
}

/// A setter that always returns void, for natives with no paired getter
/// (`ground`, `boardGround`, `doCellSize`, `errorReporter`,
/// `hideAttributes`, `showAttributes`).
pub(crate) fn set_attr(
    eval: &mut Evaluation,
    receiver: ObjectId,
    attr: &str,
    value: ObjectId,
) -> Result<(), NativeError> {
    eval.instance_mut(receiver)
        .ok_or_else(|| NativeError::type_error("receiver is not a live instance"))?
        .set(attr, value);
    Ok(())
}

/// Scans the object table for the sole instance of `module_fqn` — the
/// mechanism by which a forwarding native locates the `gameMirror`/`io`
/// singleton it redirects to.
///
/// # Errors
/// Returns [`NativeError::StateError`] if no such instance exists.
pub(crate) fn find_singleton(eval: &Evaluation, module_fqn: &str) -> Result<ObjectId, NativeError> {
    eval.objects_with_fqn(module_fqn)
        .next()
        .ok_or_else(|| NativeError::state_error(format!("no live instance of {module_fqn}")))
}

/// The `redirectTo` pattern: re-send `selector` to the instance of
/// `target_fqn`, then either forward its result or discard it as void.
///
/// # Errors
/// Propagates [`find_singleton`]'s or the re-sent message's errors.
pub(crate) fn redirect_to(
    eval: &mut Evaluation,
    target_fqn: &str,
    selector: &str,
    args: &[ObjectId],
    discard_result: bool,
) -> Result<(), NativeError> {
    let target = find_singleton(eval, target_fqn)?;
    let result = eval.send_message(selector, target, args)?;
    let pushed = if discard_result { eval.void_id() } else { result };
    eval.current_frame().push(pushed);
    Ok(())
}

/// Position retrieval for a visual: read the `position` field if present,
/// falling back to sending the `position` selector — fields take
/// precedence over methods.
///
/// # Errors
/// Propagates the `position` message send's error if neither is available.
pub(crate) fn resolve_position(eval: &mut Evaluation, visual: ObjectId) -> Result<ObjectId, NativeError> {
    if let Some(position) = eval.instance(visual).and_then(|o| o.get("position")) {
        return Ok(position);
    }
    eval.send_message("position", visual, &[])
}

/// Ensures `receiver.list_attr` is a `List`, creating an empty one if absent.
pub(crate) fn ensure_list(eval: &mut Evaluation, receiver: ObjectId, list_attr: &str) -> Result<ObjectId, NativeError> {
    if let Some(list) = eval.instance(receiver).and_then(|o| o.get(list_attr)) {
        return Ok(list);
    }
    let list = eval.create_instance(wollok_runtime::fqn::LIST, Some(InnerValue::List(Vec::new())));
    set_attr(eval, receiver, list_attr, list)?;
    Ok(list)
}

/// Pushes `wollok.lang.Boolean`'s `TRUE_ID`/`FALSE_ID` for `value`.
pub(crate) fn push_bool(eval: &mut Evaluation, value: bool) {
    let id = if value { eval.true_id() } else { eval.false_id() };
    eval.current_frame().push(id);
}
