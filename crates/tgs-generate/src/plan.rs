//! Language-independent type planning.
//!
//! Turns an inferred [`Shape`] tree into a flat list of named classes so
//! the emitters only deal with syntax. Class names come from the sample
//! name (root) or the owning field name (nested), de-duplicated with a
//! numeric suffix. Classes are ordered parent-first with the root at
//! index zero.

use crate::infer::{ObjectShape, Shape};
use crate::naming;

/// Planned output: a root type and the classes it references.
#[derive(Debug, Clone, PartialEq)]
pub struct TypePlan {
    pub root: FieldType,
    pub classes: Vec<PlannedClass>,
}

/// One named object type to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedClass {
    pub name: String,
    pub fields: Vec<PlannedField>,
}

/// One field of a planned class.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedField {
    /// Property name exactly as it appears in the sample.
    pub json_name: String,
    pub ty: FieldType,
    pub required: bool,
}

/// Resolved type of a field or of the root value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Any,
    Bool,
    Integer,
    Double,
    String,
    Array(Box<FieldType>),
    /// Index into [`TypePlan::classes`].
    Class(usize),
}

impl TypePlan {
    /// Plan the types for an inferred sample shape.
    pub fn build(sample_name: &str, shape: &Shape) -> Self {
        let mut planner = Planner::default();
        let root_name = naming::pascal_case(sample_name);
        let root = planner.plan(&root_name, shape);
        Self {
            root,
            classes: planner.classes,
        }
    }

    /// Name of the root class, when the sample is an object.
    pub fn root_class(&self) -> Option<&PlannedClass> {
        match self.root {
            FieldType::Class(index) => Some(&self.classes[index]),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Planner {
    classes: Vec<PlannedClass>,
    used_names: Vec<String>,
}

impl Planner {
    fn plan(&mut self, name_hint: &str, shape: &Shape) -> FieldType {
        match shape {
            // A position where only null (or nothing) was observed has no
            // usable shape; emitters render it as "any".
            Shape::Any | Shape::Null => FieldType::Any,
            Shape::Bool => FieldType::Bool,
            Shape::Integer => FieldType::Integer,
            Shape::Double => FieldType::Double,
            Shape::String => FieldType::String,
            Shape::Array(element) => {
                FieldType::Array(Box::new(self.plan(name_hint, element)))
            }
            Shape::Object(object) => FieldType::Class(self.plan_class(name_hint, object)),
        }
    }

    fn plan_class(&mut self, name_hint: &str, object: &ObjectShape) -> usize {
        let name = self.unique_name(name_hint);
        let index = self.classes.len();
        self.classes.push(PlannedClass {
            name,
            fields: Vec::new(),
        });

        let fields = object
            .fields
            .iter()
            .map(|(json_name, field)| PlannedField {
                json_name: json_name.clone(),
                ty: self.plan(&naming::pascal_case(json_name), &field.shape),
                required: field.required,
            })
            .collect();
        self.classes[index].fields = fields;
        index
    }

    fn unique_name(&mut self, preferred: &str) -> String {
        let base = if preferred.is_empty() {
            "Generated".to_owned()
        } else {
            preferred.to_owned()
        };
        let mut candidate = base.clone();
        let mut counter = 2;
        while self.used_names.contains(&candidate) {
            candidate = format!("{base}{counter}");
            counter += 1;
        }
        self.used_names.push(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::infer;

    fn plan(name: &str, text: &str) -> TypePlan {
        TypePlan::build(name, &infer(&serde_json::from_str(text).unwrap()))
    }

    #[test]
    fn root_object_is_class_zero() {
        let plan = plan("welcome", r#"{"name": "x", "count": 1}"#);
        assert_eq!(plan.root, FieldType::Class(0));
        let root = plan.root_class().unwrap();
        assert_eq!(root.name, "Welcome");
        assert_eq!(root.fields.len(), 2);
    }

    #[test]
    fn nested_objects_are_named_after_their_field() {
        let plan = plan("album", r#"{"artist": {"name": "x"}, "tracks": [{"name": "y"}]}"#);
        let names: Vec<_> = plan.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Album", "Artist", "Tracks"]);
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let plan = plan("item", r#"{"item": {"item": {"x": 1}}}"#);
        let names: Vec<_> = plan.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Item", "Item2", "Item3"]);
    }

    #[test]
    fn scalar_root_has_no_classes() {
        let plan = plan("numbers", "[1, 2, 3]");
        assert_eq!(
            plan.root,
            FieldType::Array(Box::new(FieldType::Integer))
        );
        assert!(plan.classes.is_empty());
        assert!(plan.root_class().is_none());
    }
}
