use miette::SourceSpan;

/// A single token and its byte span in the source file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos_start: usize, pos_end: usize) -> Token {
        Token {
            text: text.into(),
            pos_start,
            pos_end,
        }
    }

    pub fn span(&self) -> SourceSpan {
        (self.pos_start, self.pos_end - self.pos_start).into()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Splits one raw line into the ordered list of non-empty substrings
/// delimited by runs of whitespace and the literal characters `(` and `)`.
/// No other normalization is performed; the looseness is deliberate, since
/// input files are scraped or hand-authored.
///
/// `base` is the byte offset of the line within the whole source, so token
/// spans stay valid against the full file for error reporting.
pub fn tokenize(line: &str, base: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if is_separator(c) {
            if let Some(s) = start.take() {
                tokens.push(Token::new(&line[s..i], base + s, base + i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&line[s..], base + s, base + line.len()));
    }

    tokens
}
