// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-runtime/src/evaluation.rs
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
//! Evaluation state: the runtime object table, the frame stack, the
//! sentinel ids, and re-entrant message dispatch with the interpreter.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::NativeError;
use crate::fqn;
use crate::id::ObjectId;
use crate::object::{InnerValue, RuntimeObject};

/// A native bound to a receiver's `moduleFQN` and a method name. Must push
/// exactly one [`ObjectId`] onto the current frame's operand stack before
/// returning — use [`fqn::VOID`]'s sentinel (`VOID_ID`) when the method
/// has no meaningful return. This postcondition is checked by
/// [`Evaluation::call_native`].
pub type Native = fn(&mut Evaluation, ObjectId, &[ObjectId]) -> Result<(), NativeError>;

/// The interpreter's message-send entry point, installed once per
/// `Evaluation` so natives can re-enter it via [`Evaluation::send_message`].
/// Like a [`Native`], it must push exactly one `Id` before returning.
pub type MessageDispatcher = Rc<dyn Fn(&mut Evaluation, &str, ObjectId, &[ObjectId]) -> Result<(), NativeError>>;

/// A call frame's operand stack. "Return a value" means push onto the
/// current frame's stack; "return void" means push `VOID_ID`.
#[derive(Debug, Default)]
pub struct Frame {
    operand_stack: Vec<ObjectId>,
}

impl Frame {
    /// Pushes a result onto this frame.
    pub fn push(&mut self, id: ObjectId) { self.operand_stack.push(id); }

    /// Pops the most recent result off this frame.
    pub fn pop(&mut self) -> Option<ObjectId> { self.operand_stack.pop() }

    /// Current stack depth, for the "pushed exactly one" postcondition check.
    #[must_use]
    pub fn depth(&self) -> usize { self.operand_stack.len() }
}

/// Owns every `RuntimeObject` and the frame stack for one evaluation run.
pub struct Evaluation {
    objects: FxHashMap<ObjectId, RuntimeObject>,
    frames: Vec<Frame>,
    next_id: u64,
    dispatcher: Option<MessageDispatcher>,
    true_id: ObjectId,
    false_id: ObjectId,
    null_id: ObjectId,
    void_id: ObjectId,
}

impl Evaluation {
    /// Creates a fresh evaluation: allocates the four sentinels and a
    /// single root frame.
    #[must_use]
    pub fn new() -> Self {
        let mut this = Self {
            objects: FxHashMap::default(),
            frames: vec![Frame::default()],
            next_id: 0,
            dispatcher: None,
            true_id: ObjectId::new(0),
            false_id: ObjectId::new(0),
            null_id: ObjectId::new(0),
            void_id: ObjectId::new(0),
        };
        this.true_id = this.create_instance(fqn::BOOLEAN, None);
        this.false_id = this.create_instance(fqn::BOOLEAN, None);
        this.null_id = this.create_instance(fqn::NULL, None);
        this.void_id = this.create_instance(fqn::VOID, None);
        this
    }

    /// Installs the interpreter's message-send entry point, enabling
    /// [`Self::send_message`].
    pub fn set_dispatcher(&mut self, dispatcher: MessageDispatcher) { self.dispatcher = Some(dispatcher); }

    /// The sole instance of `wollok.lang.Boolean` representing `true`.
    #[must_use]
    pub const fn true_id(&self) -> ObjectId { self.true_id }

    /// The sole instance of `wollok.lang.Boolean` representing `false`.
    #[must_use]
    pub const fn false_id(&self) -> ObjectId { self.false_id }

    /// The sole instance representing `null`.
    #[must_use]
    pub const fn null_id(&self) -> ObjectId { self.null_id }

    /// The sole instance representing "no meaningful return".
    #[must_use]
    pub const fn void_id(&self) -> ObjectId { self.void_id }

    /// Allocates and registers a fresh `RuntimeObject`.
    pub fn create_instance(&mut self, module_fqn: impl Into<String>, inner: Option<InnerValue>) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        let module_fqn = module_fqn.into();
        log::trace!("allocated {id} of {module_fqn}");
        self.objects.insert(id, RuntimeObject::new(id, module_fqn, inner));
        id
    }

    /// Looks up an instance by id.
    #[must_use]
    pub fn instance(&self, id: ObjectId) -> Option<&RuntimeObject> { self.objects.get(&id) }

    /// Mutable lookup of an instance by id.
    pub fn instance_mut(&mut self, id: ObjectId) -> Option<&mut RuntimeObject> { self.objects.get_mut(&id) }

    /// Every live instance whose `moduleFQN` is `module_fqn` — the lookup a
    /// forwarding native uses to find a singleton receiver (`gameMirror`,
    /// `io`) by name, since the object table carries no separate registry.
    pub fn objects_with_fqn<'a>(&'a self, module_fqn: &'a str) -> impl Iterator<Item = ObjectId> + 'a {
        self.objects.values().filter(move |o| o.module_fqn() == module_fqn).map(RuntimeObject::id)
    }

    /// The innermost (currently executing) frame.
    pub fn current_frame(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("Evaluation always has at least one frame")
    }

    /// Pushes a fresh frame, e.g. before a nested native call that needs
    /// its own operand stack.
    pub fn push_frame(&mut self) { self.frames.push(Frame::default()); }

    /// Pops the innermost frame. Panics if it would leave no frame at all
    /// — the root frame installed by [`Self::new`] is never popped.
    pub fn pop_frame(&mut self) -> Frame {
        assert!(self.frames.len() > 1, "cannot pop the root frame");
        self.frames.pop().expect("checked above")
    }

    /// Invokes `native`, enforcing its postcondition (exactly one `Id`
    /// pushed) and returning that `Id`.
    ///
    /// # Errors
    /// Propagates whatever `native` returns, plus a [`NativeError::StateError`]
    /// if it violates the push-exactly-one contract.
    pub fn call_native(&mut self, native: Native, receiver: ObjectId, args: &[ObjectId]) -> Result<ObjectId, NativeError> {
        let depth_before = self.current_frame().depth();
        native(self, receiver, args)?;
        let frame = self.current_frame();
        debug_assert_eq!(frame.depth(), depth_before + 1, "native must push exactly one Id");
        frame.pop().ok_or_else(|| NativeError::state_error("native did not push a result"))
    }

    /// Synchronously re-enters the interpreter to send `selector` to
    /// `receiver`, driving evaluation to completion of that message and
    /// returning its result.
    ///
    /// # Errors
    /// Returns [`NativeError::StateError`] if no dispatcher was installed,
    /// or propagates whatever the dispatcher's underlying send raised.
    pub fn send_message(&mut self, selector: &str, receiver: ObjectId, args: &[ObjectId]) -> Result<ObjectId, NativeError> {
        let dispatcher = self
            .dispatcher
            .clone()
            .ok_or_else(|| NativeError::state_error("no message dispatcher installed"))?;
        let depth_before = self.current_frame().depth();
        if let Err(err) = dispatcher(self, selector, receiver, args) {
            log::warn!("send_message({selector}) on {receiver} failed: {err}");
            return Err(err);
        }
        let frame = self.current_frame();
        debug_assert_eq!(frame.depth(), depth_before + 1, "message send must push exactly one Id");
        frame.pop().ok_or_else(|| NativeError::state_error(format!("send of {selector} did not push a result")))
    }
}

impl Default for Evaluation {
    fn default() -> Self { Self::new() }
}
