//! Shape inference over JSON samples.
//!
//! A sample is parsed into a [`Shape`] tree. Arrays unify the shapes of
//! their elements: object fields missing from some elements become
//! optional, integers widen to doubles when mixed, and irreconcilable
//! mixtures collapse to [`Shape::Any`]. Null never wins a unification; it
//! marks the other side optional instead.

use std::collections::BTreeMap;

use serde_json::Value;

/// Inferred shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Conflicting or unknown; emitted as the language's "any" type.
    Any,
    /// Only null was observed.
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array(Box<Shape>),
    Object(ObjectShape),
}

/// Inferred shape of a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    /// Fields keyed by JSON property name, in lexicographic order.
    pub fields: BTreeMap<String, Field>,
}

/// One inferred object field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub shape: Shape,
    /// False when the field was missing or null in part of the sample.
    pub required: bool,
}

/// Infer the shape of a parsed JSON value.
pub fn infer(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Null,
        Value::Bool(_) => Shape::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Shape::Integer
            } else {
                Shape::Double
            }
        }
        Value::String(_) => Shape::String,
        Value::Array(items) => {
            // An empty array carries no evidence: Null, not Any, so later
            // samples can still refine the element shape.
            let element = items
                .iter()
                .map(infer)
                .reduce(unify)
                .unwrap_or(Shape::Null);
            Shape::Array(Box::new(element))
        }
        Value::Object(map) => {
            let fields = map
                .iter()
                .map(|(key, item)| {
                    let shape = infer(item);
                    let required = shape != Shape::Null;
                    (key.clone(), Field { shape, required })
                })
                .collect();
            Shape::Object(ObjectShape { fields })
        }
    }
}

/// Unify two shapes observed in the same position.
pub fn unify(a: Shape, b: Shape) -> Shape {
    match (a, b) {
        (a, b) if a == b => a,
        // A conflict is sticky: once a position is Any it stays Any.
        (Shape::Any, _) | (_, Shape::Any) => Shape::Any,
        (Shape::Null, other) | (other, Shape::Null) => other,
        (Shape::Integer, Shape::Double) | (Shape::Double, Shape::Integer) => Shape::Double,
        (Shape::Array(a), Shape::Array(b)) => Shape::Array(Box::new(unify(*a, *b))),
        (Shape::Object(a), Shape::Object(b)) => Shape::Object(unify_objects(a, b)),
        _ => Shape::Any,
    }
}

fn unify_objects(a: ObjectShape, b: ObjectShape) -> ObjectShape {
    let mut fields = BTreeMap::new();
    let mut b_fields = b.fields;

    for (name, field_a) in a.fields {
        let merged = match b_fields.remove(&name) {
            Some(field_b) => {
                // Null on either side keeps the other shape but drops the
                // required flag.
                let saw_null = field_a.shape == Shape::Null || field_b.shape == Shape::Null;
                Field {
                    shape: unify(field_a.shape, field_b.shape),
                    required: field_a.required && field_b.required && !saw_null,
                }
            }
            // Present in a only.
            None => Field {
                required: false,
                ..field_a
            },
        };
        fields.insert(name, merged);
    }

    // Present in b only.
    for (name, field_b) in b_fields {
        fields.insert(
            name,
            Field {
                required: false,
                ..field_b
            },
        );
    }

    ObjectShape { fields }
}
