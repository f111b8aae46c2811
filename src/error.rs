use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FieldSpecError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),

    #[error("Failed to read {path}")]
    #[diagnostic(code(fieldspec::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A grammar violation. Any one of these aborts the whole run; a spec
/// corpus with a single bad line produces no output at all.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum GrammarError {
    #[error("Token {token} does not match requirement tokens")]
    #[diagnostic(
        code(grammar::requirement_mismatch),
        help("A field line reads `name required|optional type`; the second token must be exactly `required` or `optional`.")
    )]
    RequirementMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `required` or `optional`")]
        span: SourceSpan,
        token: String,
    },

    #[error("{token} is wrong int type!")]
    #[diagnostic(
        code(grammar::int_width_mismatch),
        help("`integer` fields carry their width as the last token of the line: int16, int32 or int64.")
    )]
    IntWidthMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected int16, int32 or int64")]
        span: SourceSpan,
        token: String,
    },

    #[error("Line ended before {expected} was found")]
    #[diagnostic(
        code(grammar::unexpected_end_of_line),
        help("Every field line needs at least a name, a requirement marker and a type.")
    )]
    UnexpectedEndOfLine {
        #[source_code]
        src: NamedSource<String>,
        #[label("the line ends here")]
        span: SourceSpan,
        expected: String,
    },
}
