//! Per-object storage for validated attributes.
//!
//! A [`PropertyMap`] is owned by the object whose attributes it stores.
//! Each declared name has a slot holding an optional value and an optional
//! validator. Installing a validator never touches the stored value;
//! assigning a value always goes through the installed validator.
//!
//! # Example
//!
//! ```
//! use matprop::properties::{PropertyMap, ShapeValidator, SlotState};
//!
//! let mut props = PropertyMap::with_properties(["P"]);
//! assert_eq!(props.state("P").unwrap(), SlotState::Unset);
//!
//! props.set("P", ShapeValidator::new(3, 3).unwrap()).unwrap();
//! assert_eq!(props.state("P").unwrap(), SlotState::HasValidatorOnly);
//! assert!(props.get("P").is_err());
//!
//! props.set("P", 100.0).unwrap();
//! assert_eq!(props.matrix("P").unwrap().get(1, 1), 100.0);
//! assert!(props.set("P", vec![1.0, 2.0, 3.0]).is_err());
//! ```

use std::collections::HashMap;

use tracing::debug;

use super::validator::{Assignment, Validator};
use super::value::Value;
use crate::error::{PropertyError, Result};
use crate::primitives::{Array, Matrix};

/// Lifecycle of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// No validator, no value
    Unset,
    /// Validator installed, nothing assigned since
    HasValidatorOnly,
    /// A value is stored
    Set,
}

/// Storage for one attribute.
#[derive(Debug, Clone, Default)]
pub struct PropertySlot {
    value: Option<Value>,
    validator: Option<Validator>,
}

impl PropertySlot {
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> SlotState {
        match (&self.value, &self.validator) {
            (Some(_), _) => SlotState::Set,
            (None, Some(_)) => SlotState::HasValidatorOnly,
            (None, None) => SlotState::Unset,
        }
    }
}

/// Name-to-slot mapping for one object's validated attributes.
///
/// Cloning the map clones every slot, so two objects never share a stored
/// value or validator.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    slots: HashMap<String, PropertySlot>,
}

impl PropertyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with every name declared and unset.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for name in names {
            map.declare(name);
        }
        map
    }

    /// Declares an attribute. Redeclaring an existing name is a no-op.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.slots.entry(name.into()).or_default();
    }

    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Declared names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, name: &str) -> Result<&PropertySlot> {
        self.slots
            .get(name)
            .ok_or_else(|| PropertyError::UnknownProperty {
                name: name.to_string(),
            })
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut PropertySlot> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| PropertyError::UnknownProperty {
                name: name.to_string(),
            })
    }

    /// Installs `validator` on `name`, replacing any previous one.
    ///
    /// The validator is rebound to the attribute name so its errors refer
    /// to it. The stored value is left as it is and isn't revalidated.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` wasn't declared.
    pub fn install(&mut self, name: &str, validator: impl Into<Validator>) -> Result<()> {
        let mut validator = validator.into();
        validator.bind(name);
        let slot = self.slot_mut(name)?;
        slot.validator = Some(validator);
        debug!(property = name, state = ?slot.state(), "validator installed");
        Ok(())
    }

    /// Validates `value` and stores the result.
    ///
    /// Without an installed validator the value is stored unchanged. On
    /// failure the slot keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` wasn't declared, otherwise the
    /// validator's error.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let slot = self.slot_mut(name)?;
        let value = value.into();
        let validated = match &slot.validator {
            Some(validator) => validator.apply(value).inspect_err(|err| {
                debug!(property = name, %err, "assignment rejected");
            })?,
            None => value,
        };
        debug!(property = name, kind = validated.kind(), "value assigned");
        slot.value = Some(validated);
        Ok(())
    }

    /// Assigns a value or installs a validator, depending on what's given.
    ///
    /// # Errors
    ///
    /// See [`install`](Self::install) and [`assign`](Self::assign). Array
    /// conversion errors are returned before the slot is touched.
    pub fn set<A>(&mut self, name: &str, assignment: A) -> Result<()>
    where
        A: TryInto<Assignment>,
        PropertyError: From<A::Error>,
    {
        match assignment.try_into()? {
            Assignment::Validator(v) => self.install(name, v),
            Assignment::Value(v) => self.assign(name, v),
        }
    }

    /// The stored value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` for undeclared names and
    /// `PropertyUndefined` if nothing was assigned yet.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.slot(name)?
            .value
            .as_ref()
            .ok_or_else(|| PropertyError::PropertyUndefined {
                name: name.to_string(),
            })
    }

    /// The stored value as a matrix.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus `TypeMismatch` if the value is a
    /// function or an array that isn't 2D.
    pub fn matrix(&self, name: &str) -> Result<Matrix<f64>> {
        let value = self.get(name)?;
        value
            .clone()
            .into_matrix()
            .map_err(|_| PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: "matrix",
                found: value.kind(),
            })
    }

    /// Calls the stored function.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus `NotCallable` for data values and
    /// whatever the call itself returns.
    pub fn call(&self, name: &str, args: &[Array]) -> Result<Value> {
        match self.get(name)? {
            value if value.is_callable() => value.call(args),
            _ => Err(PropertyError::NotCallable {
                name: name.to_string(),
            }),
        }
    }

    /// The installed validator, if any.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` wasn't declared.
    pub fn validator(&self, name: &str) -> Result<Option<&Validator>> {
        Ok(self.slot(name)?.validator.as_ref())
    }

    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` wasn't declared.
    pub fn state(&self, name: &str) -> Result<SlotState> {
        Ok(self.slot(name)?.state())
    }

    /// The whole slot.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` wasn't declared.
    pub fn slot_of(&self, name: &str) -> Result<&PropertySlot> {
        self.slot(name)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
