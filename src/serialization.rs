use crate::ast::StructDef;
use crate::target::Target;
use serde::Serialize;

/// A machine-readable view of one compiled definition, with every type
/// already rendered in the target's spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DefinitionView {
    pub name: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FieldView {
    pub name: String,
    pub exported: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: String,
}

pub(crate) fn to_view(def: &StructDef, target: &Target) -> DefinitionView {
    DefinitionView {
        name: def.name.clone(),
        fields: def
            .fields
            .iter()
            .map(|field| FieldView {
                name: field.name.clone(),
                exported: field.exported.clone(),
                required: field.required,
                field_type: target.render(&field.field_type),
            })
            .collect(),
    }
}
