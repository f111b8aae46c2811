use crate::ast::{Scalar, TypeSpec};

/// Output-language profile: how the scalar vocabulary spells in the target
/// language, and which field names clash with its keywords. The generator
/// ships with the Go profile; both tables are caller-overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    map_type: String,
    boolean_type: String,
    string_type: String,
    enum_type: String,
    reserved: Vec<(String, String)>,
}

impl Target {
    /// The Go profile.
    pub fn go() -> Self {
        Target {
            map_type: "map[string]interface{}".to_string(),
            boolean_type: "bool".to_string(),
            string_type: "string".to_string(),
            enum_type: "string".to_string(),
            reserved: vec![("type".to_string(), "typ".to_string())],
        }
    }

    /// Registers a further reserved word and the identifier substituted for
    /// it when a field name collides.
    #[must_use]
    pub fn with_reserved(mut self, word: &str, substitute: &str) -> Self {
        self.reserved.push((word.to_string(), substitute.to_string()));
        self
    }

    /// The substitute identifier for a clashing field name, if any.
    pub fn substitute(&self, name: &str) -> Option<&str> {
        self.reserved
            .iter()
            .find(|(word, _)| word == name)
            .map(|(_, sub)| sub.as_str())
    }

    pub fn scalar_name(&self, scalar: Scalar) -> &str {
        match scalar {
            Scalar::Map => &self.map_type,
            Scalar::Boolean => &self.boolean_type,
            Scalar::String => &self.string_type,
            Scalar::Enum => &self.enum_type,
        }
    }

    /// Renders a resolved type in the target's concrete spelling. Integer
    /// widths and passthrough references are emitted verbatim.
    pub fn render(&self, spec: &TypeSpec) -> String {
        match spec {
            TypeSpec::Scalar(scalar) => self.scalar_name(*scalar).to_string(),
            TypeSpec::Int(width) => width.as_str().to_string(),
            TypeSpec::Array(inner) => format!("[]{}", self.render(inner)),
            TypeSpec::Reference(name) => name.clone(),
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::IntWidth;

    #[test]
    fn test_go_scalar_table() {
        let target = Target::go();
        assert_eq!(target.scalar_name(Scalar::Map), "map[string]interface{}");
        assert_eq!(target.scalar_name(Scalar::Boolean), "bool");
        assert_eq!(target.scalar_name(Scalar::String), "string");
        assert_eq!(target.scalar_name(Scalar::Enum), "string");
    }

    #[test]
    fn test_reserved_word_policy() {
        let target = Target::go();
        assert_eq!(target.substitute("type"), Some("typ"));
        assert_eq!(target.substitute("name"), None);

        let target = target.with_reserved("func", "fn_");
        assert_eq!(target.substitute("func"), Some("fn_"));
        // The shipped entry survives extension.
        assert_eq!(target.substitute("type"), Some("typ"));
    }

    #[test]
    fn test_render_nested_array() {
        let target = Target::go();
        let spec = TypeSpec::Array(Box::new(TypeSpec::Array(Box::new(TypeSpec::Int(
            IntWidth::Int32,
        )))));
        assert_eq!(target.render(&spec), "[][]int32");
    }

    #[test]
    fn test_render_reference_verbatim() {
        let target = Target::go();
        let spec = TypeSpec::Reference("UserRepresentation".to_string());
        assert_eq!(target.render(&spec), "UserRepresentation");
    }
}
