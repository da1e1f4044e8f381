//! Go emitter.

use std::collections::BTreeMap;

use tgs_lang::OptionValue;

use crate::emit::OptionsView;
use crate::naming;
use crate::plan::{FieldType, PlannedClass, TypePlan};

pub fn emit(plan: &TypePlan, options: &BTreeMap<String, OptionValue>) -> Vec<String> {
    let options = OptionsView::new(options);
    let package = options.text("package", "main");
    let json_tags = options.flag("json-tags", true);
    let int_type = match options.text("int-type", "int64") {
        "int" => "int",
        _ => "int64",
    };

    let mut lines = vec![format!("package {package}")];

    if plan.root_class().is_none() {
        lines.push(String::new());
        lines.push(format!(
            "type Root = {}",
            type_name(&plan.root, plan, int_type)
        ));
    }

    for class in &plan.classes {
        lines.push(String::new());
        emit_class(&mut lines, class, plan, json_tags, int_type);
    }

    lines
}

fn emit_class(
    lines: &mut Vec<String>,
    class: &PlannedClass,
    plan: &TypePlan,
    json_tags: bool,
    int_type: &str,
) {
    lines.push(format!("type {} struct {{", class.name));

    for field in &class.fields {
        let go_name = naming::pascal_case(&field.json_name);
        let mut ty = type_name(&field.ty, plan, int_type);
        if !field.required {
            ty = format!("*{ty}");
        }
        let tag = if json_tags {
            let omitempty = if field.required { "" } else { ",omitempty" };
            format!(" `json:\"{}{}\"`", field.json_name, omitempty)
        } else {
            String::new()
        };
        lines.push(format!("\t{go_name} {ty}{tag}"));
    }

    lines.push("}".to_owned());
}

fn type_name(ty: &FieldType, plan: &TypePlan, int_type: &str) -> String {
    match ty {
        FieldType::Any => "any".to_owned(),
        FieldType::Bool => "bool".to_owned(),
        FieldType::Integer => int_type.to_owned(),
        FieldType::Double => "float64".to_owned(),
        FieldType::String => "string".to_owned(),
        FieldType::Array(element) => format!("[]{}", type_name(element, plan, int_type)),
        FieldType::Class(index) => plan.classes[*index].name.clone(),
    }
}
