use crate::ast::FieldDef;
use crate::error::{FieldSpecError, GrammarError};
use crate::lexer::{self, Token};
use crate::resolver::Resolver;
use crate::target::Target;
use crate::utils::export_name;
use miette::{NamedSource, SourceSpan};
use std::sync::Arc;

pub const REQUIRED_TOKEN: &str = "required";
pub const OPTIONAL_TOKEN: &str = "optional";

/// A double-ended cursor over one line's tokens. The token array itself is
/// never mutated; grammar tokens advance the front index, the integer-width
/// suffix retreats the back index.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    front: usize,
    back: usize,
    line_end: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>, line_end: usize) -> Self {
        let back = tokens.len();
        TokenCursor {
            tokens,
            front: 0,
            back,
            line_end,
        }
    }

    /// The next unconsumed token from the front of the line.
    pub fn pop_front(&mut self) -> Option<Token> {
        if self.front < self.back {
            let token = self.tokens[self.front].clone();
            self.front += 1;
            Some(token)
        } else {
            None
        }
    }

    /// The last unconsumed token of the line.
    pub fn pop_back(&mut self) -> Option<Token> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.tokens[self.back].clone())
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front >= self.back
    }

    /// A zero-width span at the end of the line, for "ran out of tokens"
    /// labels.
    pub fn end_span(&self) -> SourceSpan {
        (self.line_end, 0).into()
    }
}

/// Interprets spec lines one at a time, in fixed grammar order.
pub struct Parser<'a> {
    source: Arc<NamedSource<String>>,
    source_text: &'a str,
    target: Target,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "fields.spec".to_string())
    }

    pub fn new_with_name(source_text: &'a str, name: String) -> Self {
        let source = Arc::new(NamedSource::new(name, source_text.to_string()));
        Parser {
            source,
            source_text,
            target: Target::default(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    // === Main Parsing Methods ===

    /// Fields ::= { Field "\n" }
    ///
    /// Strictly sequential; the first bad line aborts the whole run.
    pub fn parse_fields(&self) -> Result<Vec<FieldDef>, FieldSpecError> {
        let resolver = Resolver::new(Arc::clone(&self.source));
        let mut fields = Vec::new();
        let mut offset = 0;

        for raw_line in self.source_text.split('\n') {
            // A trailing newline yields one final empty segment, which is
            // not a line.
            if offset >= self.source_text.len() {
                break;
            }
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let tokens = lexer::tokenize(line, offset);
            let span_anchor = (offset + line.len()).min(self.source_text.len().saturating_sub(1));
            let mut cursor = TokenCursor::new(tokens, span_anchor);
            fields.push(self.parse_field(&mut cursor, &resolver)?);
            offset += raw_line.len() + 1;
        }

        Ok(fields)
    }

    /// Field ::= Name Requirement Type
    fn parse_field(
        &self,
        cursor: &mut TokenCursor,
        resolver: &Resolver,
    ) -> Result<FieldDef, FieldSpecError> {
        let name_token = self.pop_expected(cursor, "a field name")?;
        let raw_name = name_token.text;
        let identifier = self
            .target
            .substitute(&raw_name)
            .unwrap_or(raw_name.as_str());
        let exported = export_name(identifier);

        let required = self.parse_requirement(cursor)?;
        let field_type = resolver.resolve(cursor)?;

        Ok(FieldDef {
            name: raw_name,
            exported,
            required,
            field_type,
        })
    }

    /// Requirement ::= "required" | "optional"
    fn parse_requirement(&self, cursor: &mut TokenCursor) -> Result<bool, FieldSpecError> {
        let token = self.pop_expected(cursor, "a requirement marker")?;
        match token.text.as_str() {
            REQUIRED_TOKEN => Ok(true),
            OPTIONAL_TOKEN => Ok(false),
            _ => Err(GrammarError::RequirementMismatch {
                src: (*self.source).clone(),
                span: token.span(),
                token: token.text,
            }
            .into()),
        }
    }

    fn pop_expected(
        &self,
        cursor: &mut TokenCursor,
        expected: &str,
    ) -> Result<Token, FieldSpecError> {
        cursor.pop_front().ok_or_else(|| {
            GrammarError::UnexpectedEndOfLine {
                src: (*self.source).clone(),
                span: cursor.end_span(),
                expected: expected.to_string(),
            }
            .into()
        })
    }
}
