// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2026 The Wollok Contributors
// SPDX-FileName: crates/wollok-runtime/src/object.rs
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
//! The runtime object model: identity-based objects with an attribute map
//! and an optional typed `innerValue`.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::NativeError;
use crate::fqn;
use crate::id::ObjectId;

/// The typed payload a [`RuntimeObject`] may carry, keyed off its
/// `moduleFQN` (see [`crate::fqn`]).
#[derive(Debug, Clone, PartialEq)]
pub enum InnerValue {
    /// A `wollok.lang.Number`.
    Number(f64),
    /// A `wollok.lang.String`.
    String(String),
    /// A `wollok.lang.List` — preserves insertion order.
    List(Vec<ObjectId>),
    /// A `wollok.lang.Set` — membership only, order not meaningful.
    Set(Vec<ObjectId>),
}

/// An instance tracked by an [`Evaluation`](crate::evaluation::Evaluation).
///
/// Equality between runtime objects is by [`ObjectId`], never by
/// structural comparison of attributes or `innerValue` — two objects with
/// identical attributes are still distinct objects.
#[derive(Debug, Clone)]
pub struct RuntimeObject {
    id: ObjectId,
    module_fqn: String,
    attributes: FxHashMap<String, ObjectId>,
    inner: Option<InnerValue>,
}

impl RuntimeObject {
    pub(crate) fn new(id: ObjectId, module_fqn: impl Into<String>, inner: Option<InnerValue>) -> Self {
        Self { id, module_fqn: module_fqn.into(), attributes: FxHashMap::default(), inner }
    }

    /// This object's identity.
    #[must_use]
    pub const fn id(&self) -> ObjectId { self.id }

    /// The fully-qualified name of the class/singleton this object is an
    /// instance of.
    #[must_use]
    pub fn module_fqn(&self) -> &str { &self.module_fqn }

    /// Reads an attribute.
    #[must_use]
    pub fn get(&self, attr: &str) -> Option<ObjectId> { self.attributes.get(attr).copied() }

    /// Writes an attribute, replacing any prior value.
    pub fn set(&mut self, attr: impl Into<String>, value: ObjectId) { self.attributes.insert(attr.into(), value); }

    /// This object's `innerValue`, if it has one.
    #[must_use]
    pub const fn inner(&self) -> Option<&InnerValue> { self.inner.as_ref() }

    /// Asserts this object carries a numeric `innerValue` and returns it.
    ///
    /// # Errors
    /// Returns [`NativeError::TypeError`] if `innerValue` is absent or not a number.
    pub fn assert_is_number(&self) -> Result<f64, NativeError> {
        match &self.inner {
            Some(InnerValue::Number(n)) => Ok(*n),
            _ => Err(NativeError::type_error(format!("{} is not a number", self.id))),
        }
    }

    /// Asserts this object carries a string `innerValue` and returns it.
    ///
    /// # Errors
    /// Returns [`NativeError::TypeError`] if `innerValue` is absent or not a string.
    pub fn assert_is_string(&self) -> Result<&str, NativeError> {
        match &self.inner {
            Some(InnerValue::String(s)) => Ok(s.as_str()),
            _ => Err(NativeError::type_error(format!("{} is not a string", self.id))),
        }
    }

    /// Asserts this object carries a `List` or `Set` `innerValue` and
    /// returns its elements.
    ///
    /// # Errors
    /// Returns [`NativeError::TypeError`] if `innerValue` is absent or not a collection.
    pub fn assert_is_collection(&self) -> Result<&[ObjectId], NativeError> {
        match &self.inner {
            Some(InnerValue::List(items) | InnerValue::Set(items)) => Ok(items),
            _ => Err(NativeError::type_error(format!("{} is not a collection", self.id))),
        }
    }

    /// Mutable access to this object's `List`/`Set` elements.
    ///
    /// # Errors
    /// Returns [`NativeError::TypeError`] if `innerValue` is absent or not a collection.
    pub fn assert_is_collection_mut(&mut self) -> Result<&mut Vec<ObjectId>, NativeError> {
        match &mut self.inner {
            Some(InnerValue::List(items) | InnerValue::Set(items)) => Ok(items),
            _ => Err(NativeError::type_error(format!("{} is not a collection", self.id))),
        }
    }
}

impl fmt::Display for RuntimeObject {
    /// Renders `wollok.lang.{Number,String,Boolean}` by value and
    /// collections by element count; anything else falls back to its
    /// `moduleFQN` and id, which is what a native error message needs to
    /// describe what was passed where something else was expected.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inner, self.module_fqn.as_str()) {
            (Some(InnerValue::Number(n)), _) => write!(f, "{n}"),
            (Some(InnerValue::String(s)), _) => write!(f, "{s:?}"),
            (Some(InnerValue::List(items)), _) => write!(f, "List({})", items.len()),
            (Some(InnerValue::Set(items)), _) => write!(f, "Set({})", items.len()),
            (None, m) if m == fqn::BOOLEAN => write!(f, "{}", self.id),
            _ => write!(f, "{}({})", self.module_fqn, self.id),
        }
    }
}
