//! Pattern 2: Closed Sum Types
//!
//! `Shape` is a tagged union. Inside Rust the variant set is closed, so
//! `area` needs no fallback arm: adding a variant without handling it is a
//! compile error. Unknown discriminants can only show up in untyped input,
//! and `parse_shape` rejects them there.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::PI;
use tracing::{debug, warn};

use crate::error::ShapeError;

/// JSON form: `{"shape": "circle", "radius": 5}` or
/// `{"shape": "rectangle", "width": 4, "height": 6}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", deny_unknown_fields)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    /// Every discriminant value, in declaration order. Must list one tag
    /// per variant: `parse_shape` rejects any tag missing from it.
    pub const KINDS: [&'static str; 2] = ["circle", "rectangle"];

    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius * radius * PI,
            Shape::Rectangle { width, height } => width * height,
        }
    }

    /// Dimensions must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            Shape::Circle { radius } => check_dimension("radius", radius),
            Shape::Rectangle { width, height } => {
                check_dimension("width", width)?;
                check_dimension("height", height)
            }
        }
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ShapeError::InvalidDimension { field, value });
    }
    Ok(())
}

pub fn area(shape: &Shape) -> f64 {
    let area = shape.area();
    debug!(kind = shape.kind(), area, "computed area");
    area
}

/// Decode a shape from JSON, checking the discriminant before the fields.
pub fn parse_shape(input: &str) -> Result<Shape, ShapeError> {
    let value: Value = serde_json::from_str(input)?;

    let tag = match value.get("shape") {
        None => return Err(ShapeError::MissingDiscriminant),
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => other.to_string(),
    };
    if !Shape::KINDS.contains(&tag.as_str()) {
        warn!(%tag, "rejecting unknown shape");
        return Err(ShapeError::UnknownShape { tag });
    }

    let shape: Shape = serde_json::from_value(value)?;
    shape.validate()?;
    Ok(shape)
}

/// The area as text, or a diagnostic when the input is not a known shape.
pub fn describe_area(input: &str) -> String {
    match parse_shape(input) {
        Ok(shape) => area(&shape).to_string(),
        Err(err) => err.to_string(),
    }
}
