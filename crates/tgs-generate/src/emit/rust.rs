//! Rust emitter.

use std::collections::BTreeMap;

use tgs_lang::OptionValue;

use crate::emit::OptionsView;
use crate::naming;
use crate::plan::{FieldType, PlannedClass, TypePlan};

pub fn emit(plan: &TypePlan, options: &BTreeMap<String, OptionValue>) -> Vec<String> {
    let options = OptionsView::new(options);
    let derive_debug = options.flag("derive-debug", true);
    let derive_clone = options.flag("derive-clone", true);
    let all_optional = options.flag("all-properties-optional", false);
    let dense = options.text("density", "normal") == "dense";
    let visibility = match options.text("visibility", "public") {
        "crate" => "pub(crate) ",
        "private" => "",
        _ => "pub ",
    };

    let mut derives = vec!["Serialize", "Deserialize"];
    if derive_debug {
        derives.insert(0, "Debug");
    }
    if derive_clone {
        let at = usize::from(derive_debug);
        derives.insert(at, "Clone");
    }
    let derive_line = format!("#[derive({})]", derives.join(", "));

    let mut lines = vec!["use serde::{Deserialize, Serialize};".to_owned()];

    // Non-object root: a type alias is all there is to say about it.
    if plan.root_class().is_none() {
        lines.push(String::new());
        lines.push(format!(
            "{}type {} = {};",
            visibility,
            naming::pascal_case("root"),
            type_name(&plan.root, plan)
        ));
    }

    for class in &plan.classes {
        lines.push(String::new());
        emit_class(
            &mut lines,
            class,
            plan,
            &derive_line,
            visibility,
            all_optional,
            dense,
        );
    }

    lines
}

fn emit_class(
    lines: &mut Vec<String>,
    class: &PlannedClass,
    plan: &TypePlan,
    derive_line: &str,
    visibility: &str,
    all_optional: bool,
    dense: bool,
) {
    lines.push(derive_line.to_owned());
    lines.push(format!("{}struct {} {{", visibility, class.name));

    let mut first = true;
    for field in &class.fields {
        if !first && !dense {
            lines.push(String::new());
        }
        first = false;

        let rust_name = naming::snake_case(&field.json_name);
        if rust_name != field.json_name {
            lines.push(format!("    #[serde(rename = \"{}\")]", field.json_name));
        }

        let optional = all_optional || !field.required;
        let mut ty = type_name(&field.ty, plan);
        if optional {
            ty = format!("Option<{ty}>");
        }
        lines.push(format!("    {visibility}{rust_name}: {ty},"));
    }

    lines.push("}".to_owned());
}

fn type_name(ty: &FieldType, plan: &TypePlan) -> String {
    match ty {
        FieldType::Any => "serde_json::Value".to_owned(),
        FieldType::Bool => "bool".to_owned(),
        FieldType::Integer => "i64".to_owned(),
        FieldType::Double => "f64".to_owned(),
        FieldType::String => "String".to_owned(),
        FieldType::Array(element) => {
            format!("Vec<{}>", type_name(element, plan))
        }
        FieldType::Class(index) => plan.classes[*index].name.clone(),
    }
}
