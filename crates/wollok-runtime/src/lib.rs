// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-runtime/src/lib.rs
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
//! The runtime object model and evaluation state: identity-based
//! objects, well-known sentinels, and the frame/operand-stack discipline
//! natives are bound by.

mod errors;
mod evaluation;
mod id;
mod object;

pub mod fqn;

pub use errors::NativeError;
pub use evaluation::{Evaluation, Frame, MessageDispatcher, Native};
pub use id::ObjectId;
pub use object::{InnerValue, RuntimeObject};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_distinct_and_stable() {
        let eval = Evaluation::new();
        let ids = [eval.true_id(), eval.false_id(), eval.null_id(), eval.void_id()];
        for i in 0..ids.len() {
            for j in 0..ids.len() {
                assert_eq!(i == j, ids[i] == ids[j]);
            }
        }
    }

    #[test]
    fn create_instance_allocates_fresh_ids() {
        let mut eval = Evaluation::new();
        let a = eval.create_instance(fqn::STRING, Some(InnerValue::String("a".into())));
        let b = eval.create_instance(fqn::STRING, Some(InnerValue::String("b".into())));
        assert_ne!(a, b);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut eval = Evaluation::new();
        let target = eval.create_instance(fqn::NULL, None);
        let holder = eval.create_instance("p.C", None);
        eval.instance_mut(holder).unwrap().set("field", target);
        assert_eq!(eval.instance(holder).unwrap().get("field"), Some(target));
    }

    #[test]
    fn assert_is_number_fails_on_a_string() {
        let mut eval = Evaluation::new();
        let id = eval.create_instance(fqn::STRING, Some(InnerValue::String("x".into())));
        assert!(eval.instance(id).unwrap().assert_is_number().is_err());
    }

    #[test]
    fn call_native_enforces_the_push_exactly_one_contract() {
        fn pushes_nothing(_eval: &mut Evaluation, _receiver: ObjectId, _args: &[ObjectId]) -> Result<(), NativeError> {
            Ok(())
        }
        let mut eval = Evaluation::new();
        let receiver = eval.void_id();
        let result = eval.call_native(pushes_nothing, receiver, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn call_native_returns_the_pushed_id() {
        fn pushes_void(eval: &mut Evaluation, _receiver: ObjectId, _args: &[ObjectId]) -> Result<(), NativeError> {
            let void = eval.void_id();
            eval.current_frame().push(void);
            Ok(())
        }
        let mut eval = Evaluation::new();
        let receiver = eval.void_id();
        let result = eval.call_native(pushes_void, receiver, &[]).unwrap();
        assert_eq!(result, eval.void_id());
    }
}
