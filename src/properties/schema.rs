//! Declarative property schemas.
//!
//! A schema lists the validated attributes of a container type and the
//! validator each one gets, so a filter can be configured from JSON
//! instead of a sequence of `install` calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::store::PropertyMap;
use super::validator::{FunctionShapeValidator, ShapeValidator, Validator};
use crate::error::Result;
use crate::primitives::Shape;

fn default_multiplicative() -> bool {
    true
}

/// Validator configuration for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatorSpec {
    /// Store values unchanged
    Identity,
    /// Matrix of a fixed shape
    Matrix {
        shape: Shape,
        #[serde(default = "default_multiplicative")]
        multiplicative: bool,
    },
    /// Function returning a fixed shape
    MatrixFunction {
        shape: Shape,
        #[serde(default = "default_multiplicative")]
        multiplicative: bool,
    },
}

impl ValidatorSpec {
    /// Builds the configured validator.
    #[must_use]
    pub fn to_validator(&self) -> Validator {
        match *self {
            ValidatorSpec::Identity => Validator::identity(),
            ValidatorSpec::Matrix {
                shape,
                multiplicative,
            } => ShapeValidator::from_shape(shape)
                .with_multiplicative(multiplicative)
                .into(),
            ValidatorSpec::MatrixFunction {
                shape,
                multiplicative,
            } => FunctionShapeValidator::from_shape(shape)
                .with_multiplicative(multiplicative)
                .into(),
        }
    }
}

/// Attribute declarations for a container type.
///
/// # Examples
///
/// ```
/// use matprop::properties::{PropertySchema, SlotState};
///
/// let schema = PropertySchema::from_json(r#"{
///     "properties": {
///         "F": { "kind": "matrix", "shape": [2, 2] },
///         "R": { "kind": "matrix", "shape": [2, 2], "multiplicative": false },
///         "hx": { "kind": "matrix_function", "shape": [1, 2] }
///     }
/// }"#).unwrap();
///
/// let mut props = schema.build().unwrap();
/// assert_eq!(props.state("F").unwrap(), SlotState::HasValidatorOnly);
/// props.set("F", 1.0).unwrap();
/// assert_eq!(props.matrix("F").unwrap().shape(), (2, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    pub properties: BTreeMap<String, ValidatorSpec>,
}

impl PropertySchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one attribute.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, spec: ValidatorSpec) -> Self {
        self.properties.insert(name.into(), spec);
        self
    }

    /// Parses a schema.
    ///
    /// # Errors
    ///
    /// Returns `Schema` for malformed JSON, unknown kinds or shapes with a
    /// zero dimension.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns `Schema` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Creates a property map with every attribute declared and its
    /// validator installed.
    ///
    /// # Errors
    ///
    /// Doesn't fail for a well-formed schema; the `Result` mirrors
    /// [`apply_to`](Self::apply_to).
    pub fn build(&self) -> Result<PropertyMap> {
        let mut map = PropertyMap::new();
        self.apply_to(&mut map)?;
        Ok(map)
    }

    /// Declares every attribute on `map` and installs its validator.
    ///
    /// Values already stored in `map` are kept.
    ///
    /// # Errors
    ///
    /// Propagates install errors.
    pub fn apply_to(&self, map: &mut PropertyMap) -> Result<()> {
        for (name, spec) in &self.properties {
            map.declare(name.as_str());
            map.install(name, spec.to_validator())?;
        }
        debug!(properties = self.properties.len(), "schema applied");
        Ok(())
    }
}
