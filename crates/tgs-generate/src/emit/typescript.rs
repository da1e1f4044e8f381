//! TypeScript emitter.

use std::collections::BTreeMap;

use tgs_lang::OptionValue;

use crate::emit::OptionsView;
use crate::naming;
use crate::plan::{FieldType, PlannedClass, TypePlan};

pub fn emit(plan: &TypePlan, options: &BTreeMap<String, OptionValue>) -> Vec<String> {
    let options = OptionsView::new(options);
    let use_interface = options.text("declaration-style", "interface") != "type";
    let all_optional = options.flag("all-properties-optional", false);
    let readonly = options.flag("readonly-properties", false);
    let terminator = if options.flag("semicolons", true) {
        ";"
    } else {
        ""
    };

    let mut lines = Vec::new();

    if plan.root_class().is_none() {
        lines.push(format!(
            "export type Root = {}{}",
            type_name(&plan.root, plan),
            terminator
        ));
    }

    let mut first = plan.root_class().is_some();
    for class in &plan.classes {
        if !first {
            lines.push(String::new());
        }
        first = false;
        emit_class(
            &mut lines,
            class,
            plan,
            use_interface,
            all_optional,
            readonly,
            terminator,
        );
    }

    lines
}

fn emit_class(
    lines: &mut Vec<String>,
    class: &PlannedClass,
    plan: &TypePlan,
    use_interface: bool,
    all_optional: bool,
    readonly: bool,
    terminator: &str,
) {
    if use_interface {
        lines.push(format!("export interface {} {{", class.name));
    } else {
        lines.push(format!("export type {} = {{", class.name));
    }

    for field in &class.fields {
        let name = if naming::is_plain_identifier(&field.json_name) {
            field.json_name.clone()
        } else {
            format!("\"{}\"", field.json_name)
        };
        let marker = if all_optional || !field.required {
            "?"
        } else {
            ""
        };
        let prefix = if readonly { "readonly " } else { "" };
        lines.push(format!(
            "    {prefix}{name}{marker}: {}{terminator}",
            type_name(&field.ty, plan)
        ));
    }

    if use_interface {
        lines.push("}".to_owned());
    } else {
        lines.push(format!("}}{terminator}"));
    }
}

fn type_name(ty: &FieldType, plan: &TypePlan) -> String {
    match ty {
        FieldType::Any => "any".to_owned(),
        FieldType::Bool => "boolean".to_owned(),
        FieldType::Integer | FieldType::Double => "number".to_owned(),
        FieldType::String => "string".to_owned(),
        FieldType::Array(element) => format!("{}[]", type_name(element, plan)),
        FieldType::Class(index) => plan.classes[*index].name.clone(),
    }
}
