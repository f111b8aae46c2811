use crate::ast::{FieldDef, StructDef};
use crate::target::Target;
use std::fmt::Write;

// Downstream consumers diff generated output byte-for-byte; the exact
// shape of these lines, stray space after the opening brace included, is
// part of the contract.

pub(crate) fn emit_field(field: &FieldDef, target: &Target) -> String {
    let rendered = target.render(&field.field_type);
    if field.required {
        format!(
            "\t{} *{} `json:\"{}\"`\n",
            field.exported, rendered, field.name
        )
    } else {
        format!(
            "\t{} *{} `json:\"{},omitempty\"`\n",
            field.exported, rendered, field.name
        )
    }
}

pub(crate) fn emit_struct(def: &StructDef, target: &Target) -> String {
    let mut out = String::new();
    let _ = write!(out, "type {} struct {{ \n", def.name);
    for field in &def.fields {
        out.push_str(&emit_field(field, target));
    }
    out.push_str("}\n");
    out
}

/// One Go source file for a whole batch of definitions: a package clause,
/// then each struct under a one-line doc comment, in the order given.
pub(crate) fn emit_file(package: &str, defs: &[StructDef], target: &Target) -> String {
    let mut out = format!("package {package}\n");
    for def in defs {
        let _ = write!(out, "\n// {} struct\n", def.name);
        out.push_str(&emit_struct(def, target));
    }
    out
}
