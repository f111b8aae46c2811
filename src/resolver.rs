use crate::ast::{IntWidth, Scalar, TypeSpec};
use crate::error::{FieldSpecError, GrammarError};
use crate::parser::TokenCursor;
use miette::NamedSource;
use std::sync::Arc;

/// Opens a nested array wrapper.
pub const OPEN_TOKEN: &str = "<";
/// The matching close. Never required by the grammar; stray occurrences are
/// ignored wherever they appear.
pub const CLOSE_TOKEN: &str = ">";
/// Marks an integer field, whose width sits at the end of the line.
pub const INT_TOKEN: &str = "integer";

/// Resolves the trailing type tokens of a field line into a [`TypeSpec`].
pub struct Resolver {
    source: Arc<NamedSource<String>>,
}

impl Resolver {
    pub fn new(source: Arc<NamedSource<String>>) -> Self {
        Resolver { source }
    }

    /// Type ::= "<" Type | ScalarToken | "integer" IntWidth | Reference
    ///
    /// Checked in that precedence order. An unrecognized head token is a
    /// passthrough reference to a previously emitted definition, not an
    /// error.
    pub fn resolve(&self, cursor: &mut TokenCursor) -> Result<TypeSpec, FieldSpecError> {
        let token = cursor.pop_front().ok_or_else(|| GrammarError::UnexpectedEndOfLine {
            src: (*self.source).clone(),
            span: cursor.end_span(),
            expected: "a type token".to_string(),
        })?;

        if token.text == OPEN_TOKEN {
            let inner = self.resolve(cursor)?;
            return Ok(TypeSpec::Array(Box::new(inner)));
        }
        if let Some(scalar) = Scalar::from_token(&token.text) {
            return Ok(TypeSpec::Scalar(scalar));
        }
        if token.text == INT_TOKEN {
            return self.resolve_int_width(cursor);
        }
        Ok(TypeSpec::Reference(token.text))
    }

    /// IntWidth ::= "int16" | "int32" | "int64"
    ///
    /// The width is read from the back of the line, not from the front.
    /// Close-bracket tokens at the tail are skipped first, so an array of
    /// integers may spell its closing bracket or not.
    fn resolve_int_width(&self, cursor: &mut TokenCursor) -> Result<TypeSpec, FieldSpecError> {
        while let Some(token) = cursor.pop_back() {
            if token.text == CLOSE_TOKEN {
                continue;
            }
            return match IntWidth::from_token(&token.text) {
                Some(width) => Ok(TypeSpec::Int(width)),
                None => Err(GrammarError::IntWidthMismatch {
                    src: (*self.source).clone(),
                    span: token.span(),
                    token: token.text,
                }
                .into()),
            };
        }
        Err(GrammarError::UnexpectedEndOfLine {
            src: (*self.source).clone(),
            span: cursor.end_span(),
            expected: "an integer width".to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{IntWidth, Scalar, TypeSpec};
    use crate::lexer;

    fn resolve_ok(tail: &str) -> TypeSpec {
        let source = Arc::new(NamedSource::new("test.spec", tail.to_string()));
        let tokens = lexer::tokenize(tail, 0);
        let mut cursor = TokenCursor::new(tokens, tail.len());
        Resolver::new(source).resolve(&mut cursor).unwrap()
    }

    fn resolve_err(tail: &str) -> FieldSpecError {
        let source = Arc::new(NamedSource::new("test.spec", tail.to_string()));
        let tokens = lexer::tokenize(tail, 0);
        let mut cursor = TokenCursor::new(tokens, tail.len());
        Resolver::new(source)
            .resolve(&mut cursor)
            .expect_err("expected a grammar violation")
    }

    #[test]
    fn test_scalars() {
        assert_eq!(resolve_ok("string"), TypeSpec::Scalar(Scalar::String));
        assert_eq!(resolve_ok("boolean"), TypeSpec::Scalar(Scalar::Boolean));
        assert_eq!(resolve_ok("enum"), TypeSpec::Scalar(Scalar::Enum));
        assert_eq!(resolve_ok("Map"), TypeSpec::Scalar(Scalar::Map));
        assert_eq!(resolve_ok("map"), TypeSpec::Scalar(Scalar::Map));
    }

    #[test]
    fn test_integer_width_from_tail() {
        assert_eq!(resolve_ok("integer int16"), TypeSpec::Int(IntWidth::Int16));
        assert_eq!(resolve_ok("integer int64"), TypeSpec::Int(IntWidth::Int64));
    }

    #[test]
    fn test_passthrough_reference() {
        assert_eq!(
            resolve_ok("RealmRepresentation"),
            TypeSpec::Reference("RealmRepresentation".to_string())
        );
        // Resolving a token that is already a resolved type name changes nothing.
        assert_eq!(resolve_ok("int32"), TypeSpec::Reference("int32".to_string()));
    }

    #[test]
    fn test_array_of_scalar() {
        assert_eq!(
            resolve_ok("< string"),
            TypeSpec::Array(Box::new(TypeSpec::Scalar(Scalar::String)))
        );
    }

    #[test]
    fn test_unbounded_nesting_without_closes() {
        assert_eq!(
            resolve_ok("< < < integer int32"),
            TypeSpec::Array(Box::new(TypeSpec::Array(Box::new(TypeSpec::Array(
                Box::new(TypeSpec::Int(IntWidth::Int32))
            )))))
        );
    }

    #[test]
    fn test_close_brackets_are_ignored() {
        assert_eq!(
            resolve_ok("< string >"),
            TypeSpec::Array(Box::new(TypeSpec::Scalar(Scalar::String)))
        );
        assert_eq!(
            resolve_ok("< < integer int32 > >"),
            TypeSpec::Array(Box::new(TypeSpec::Array(Box::new(TypeSpec::Int(
                IntWidth::Int32
            )))))
        );
    }

    #[test]
    fn test_wrong_int_width_is_fatal() {
        let err = resolve_err("integer foo");
        assert!(err.to_string().contains("foo is wrong int type!"));
    }

    #[test]
    fn test_missing_int_width_is_fatal() {
        let err = resolve_err("integer");
        assert!(matches!(
            err,
            FieldSpecError::Grammar(GrammarError::UnexpectedEndOfLine { .. })
        ));
    }

    #[test]
    fn test_missing_type_is_fatal() {
        let err = resolve_err("");
        assert!(matches!(
            err,
            FieldSpecError::Grammar(GrammarError::UnexpectedEndOfLine { .. })
        ));
    }
}
