//! Python emitter (dataclasses).

use std::collections::BTreeMap;

use tgs_lang::OptionValue;

use crate::emit::OptionsView;
use crate::naming;
use crate::plan::{FieldType, PlannedClass, TypePlan};

pub fn emit(plan: &TypePlan, options: &BTreeMap<String, OptionValue>) -> Vec<String> {
    let options = OptionsView::new(options);
    let nice_names = options.flag("nice-property-names", true);
    let all_optional = options.flag("all-properties-optional", false);
    // 3.9 keeps typing.Optional / typing.List; 3.11 uses PEP 604/585 syntax.
    let modern = options.text("python-version", "3.11") != "3.9";

    let mut body = Vec::new();
    let mut imports = Imports::default();

    // Python needs referenced names defined before use; the plan is
    // parent-first, so emit in reverse.
    let mut first = true;
    for class in plan.classes.iter().rev() {
        if !first {
            body.push(String::new());
            body.push(String::new());
        }
        first = false;
        emit_class(
            &mut body,
            class,
            plan,
            nice_names,
            all_optional,
            modern,
            &mut imports,
        );
    }

    // A non-object root becomes an alias; it references the classes, so
    // it comes after all of them.
    if plan.root_class().is_none() {
        if !first {
            body.push(String::new());
            body.push(String::new());
        }
        body.push(format!(
            "Root = {}",
            type_name(&plan.root, plan, modern, &mut imports)
        ));
    }

    let mut lines = vec!["from dataclasses import dataclass".to_owned()];
    if let Some(typing) = imports.typing_line() {
        lines.push(typing);
    }
    lines.push(String::new());
    lines.push(String::new());
    lines.extend(body);
    lines
}

fn emit_class(
    lines: &mut Vec<String>,
    class: &PlannedClass,
    plan: &TypePlan,
    nice_names: bool,
    all_optional: bool,
    modern: bool,
    imports: &mut Imports,
) {
    lines.push("@dataclass".to_owned());
    lines.push(format!("class {}:", class.name));

    if class.fields.is_empty() {
        lines.push("    pass".to_owned());
        return;
    }

    for field in &class.fields {
        let name = if nice_names || !naming::is_plain_identifier(&field.json_name) {
            naming::snake_case(&field.json_name)
        } else {
            field.json_name.clone()
        };
        let mut ty = type_name(&field.ty, plan, modern, imports);
        if all_optional || !field.required {
            ty = if modern {
                format!("{ty} | None")
            } else {
                imports.optional = true;
                format!("Optional[{ty}]")
            };
        }
        lines.push(format!("    {name}: {ty}"));
    }
}

fn type_name(ty: &FieldType, plan: &TypePlan, modern: bool, imports: &mut Imports) -> String {
    match ty {
        FieldType::Any => {
            imports.any = true;
            "Any".to_owned()
        }
        FieldType::Bool => "bool".to_owned(),
        FieldType::Integer => "int".to_owned(),
        FieldType::Double => "float".to_owned(),
        FieldType::String => "str".to_owned(),
        FieldType::Array(element) => {
            let inner = type_name(element, plan, modern, imports);
            if modern {
                format!("list[{inner}]")
            } else {
                imports.list = true;
                format!("List[{inner}]")
            }
        }
        FieldType::Class(index) => plan.classes[*index].name.clone(),
    }
}

/// Tracks which `typing` names the emitted source needs.
#[derive(Default)]
struct Imports {
    any: bool,
    list: bool,
    optional: bool,
}

impl Imports {
    fn typing_line(&self) -> Option<String> {
        let mut names = Vec::new();
        if self.any {
            names.push("Any");
        }
        if self.list {
            names.push("List");
        }
        if self.optional {
            names.push("Optional");
        }
        if names.is_empty() {
            None
        } else {
            Some(format!("from typing import {}", names.join(", ")))
        }
    }
}
